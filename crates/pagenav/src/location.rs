//! Locations and page-link targets.
//!
//! A [`Location`] is the router-level view of a URL: path, ordered query
//! parameters and hash fragment. Page links are built by rewriting a single
//! query parameter and leaving everything else untouched.

use std::fmt;

use crate::errors::AppError;

/// Path, query parameters and hash of a navigable location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    /// Query parameters in their original order. Duplicate names are kept.
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`.
    pub hash: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Parses a root-relative href such as `/projects?page=2&sort=name#top`.
    pub fn parse(href: &str) -> Result<Self, AppError> {
        if !href.starts_with('/') {
            return Err(AppError::InvalidLocation(format!(
                "expected a path starting with '/', got {href:?}"
            )));
        }

        let (rest, hash) = match href.split_once('#') {
            Some((rest, hash)) => (rest, hash),
            None => (href, ""),
        };
        let (path, search) = match rest.split_once('?') {
            Some((path, search)) => (path, search),
            None => (rest, ""),
        };

        let query = form_urlencoded::parse(search.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            path: path.to_string(),
            query,
            hash: hash.to_string(),
        })
    }

    /// First value of the query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns a copy with `name` set to `value`.
    ///
    /// The first occurrence of `name` keeps its position, later duplicates
    /// are removed, and a missing parameter is appended at the end.
    pub fn with_param(&self, name: &str, value: impl Into<String>) -> Self {
        let mut value = Some(value.into());
        let mut query = Vec::with_capacity(self.query.len() + 1);
        for (k, v) in &self.query {
            if k != name {
                query.push((k.clone(), v.clone()));
            } else if let Some(value) = value.take() {
                query.push((k.clone(), value));
            }
        }
        if let Some(value) = value {
            query.push((name.to_string(), value));
        }

        Self {
            path: self.path.clone(),
            query,
            hash: self.hash.clone(),
        }
    }

    /// Returns a copy with every occurrence of `name` removed.
    pub fn without_param(&self, name: &str) -> Self {
        Self {
            path: self.path.clone(),
            query: self
                .query
                .iter()
                .filter(|(k, _)| k != name)
                .cloned()
                .collect(),
            hash: self.hash.clone(),
        }
    }

    /// The location a link to `page` points at: `param` set to the page
    /// number, all other state preserved.
    pub fn page_target(&self, param: &str, page: i64) -> Self {
        self.with_param(param, page.to_string())
    }

    /// Encoded query string without the leading `?`.
    pub fn search(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.query {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }

    pub fn to_href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.search())?;
        }
        if !self.hash.is_empty() {
            write!(f, "#{}", self.hash)?;
        }
        Ok(())
    }
}
