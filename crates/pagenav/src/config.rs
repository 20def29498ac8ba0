//! Runtime configuration read from the environment.

use std::{env, str::FromStr};

use tracing::warn;

use crate::{
    nav::DEFAULT_ARIA_LABEL,
    page_param::{DEFAULT_PAGE_PARAM, DEFAULT_PER_PAGE},
    window::{DEFAULT_MAX_PAGES, MAX_WINDOW_LIMIT},
};

pub const DEFAULT_PORT: u16 = 3001;

/// Service settings and the defaults applied to requests that omit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavConfig {
    pub port: u16,
    /// Number of page links shown at once.
    pub max_pages: i64,
    pub per_page: i64,
    pub page_param: String,
    pub aria_label: String,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            max_pages: DEFAULT_MAX_PAGES,
            per_page: DEFAULT_PER_PAGE,
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
        }
    }
}

impl NavConfig {
    /// Reads `PORT`, `PAGENAV_MAX_PAGES`, `PAGENAV_PER_PAGE`,
    /// `PAGENAV_PAGE_PARAM` and `PAGENAV_ARIA_LABEL`. Missing or invalid
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let max_pages = parse_or(&lookup, "PAGENAV_MAX_PAGES", defaults.max_pages);
        let per_page = parse_or(&lookup, "PAGENAV_PER_PAGE", defaults.per_page);

        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            max_pages: if (1..=MAX_WINDOW_LIMIT).contains(&max_pages) {
                max_pages
            } else {
                warn!(max_pages, "PAGENAV_MAX_PAGES out of range, using default");
                defaults.max_pages
            },
            per_page: if per_page > 0 {
                per_page
            } else {
                warn!(per_page, "PAGENAV_PER_PAGE must be positive, using default");
                defaults.per_page
            },
            page_param: lookup("PAGENAV_PAGE_PARAM")
                .filter(|param| !param.is_empty())
                .unwrap_or(defaults.page_param),
            aria_label: lookup("PAGENAV_ARIA_LABEL").unwrap_or(defaults.aria_label),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparsable setting");
            default
        }),
        None => default,
    }
}
