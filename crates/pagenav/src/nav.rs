//! Pagination control model.
//!
//! Combines the page window with page-link targets into the ordered list
//! of controls a list view renders: first, previous, the page numbers,
//! next, last.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    location::Location,
    window::{PageWindow, PaginationState},
};

/// Accessible name of the `<nav>` landmark when none is configured.
pub const DEFAULT_ARIA_LABEL: &str = "page navigation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavItemKind {
    First,
    Previous,
    Page,
    Next,
    Last,
}

impl NavItemKind {
    fn is_shortcut(&self) -> bool {
        *self != NavItemKind::Page
    }
}

/// One link of the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct NavItem {
    pub kind: NavItemKind,
    /// Page this control navigates to.
    pub page: i64,
    #[serde(skip)]
    pub target: Location,
    pub href: String,
    pub aria_label: String,
    pub active: bool,
}

impl NavItem {
    /// Visible text of the control.
    pub fn label(&self) -> String {
        match self.kind {
            NavItemKind::First => "«".to_string(),
            NavItemKind::Previous => "‹".to_string(),
            NavItemKind::Page => self.page.to_string(),
            NavItemKind::Next => "›".to_string(),
            NavItemKind::Last => "»".to_string(),
        }
    }

    fn new(
        kind: NavItemKind,
        page: i64,
        location: &Location,
        param: &str,
        aria_label: String,
    ) -> Self {
        let target = location.page_target(param, page);
        Self {
            kind,
            page,
            href: target.to_href(),
            target,
            aria_label,
            active: false,
        }
    }
}

/// Ordered pagination controls for one list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PaginationNav {
    pub aria_label: String,
    pub current_page: i64,
    pub total_pages: i64,
    pub items: Vec<NavItem>,
}

impl PaginationNav {
    /// Builds the controls for `state`, linking every page through `param`
    /// on `location`. Returns `None` when there is nothing to paginate.
    pub fn build(state: &PaginationState, location: &Location, param: &str) -> Option<Self> {
        Self::from_window(state.current_page, &state.window(), location, param)
    }

    pub fn from_window(
        current_page: i64,
        window: &PageWindow,
        location: &Location,
        param: &str,
    ) -> Option<Self> {
        if window.is_empty() {
            return None;
        }
        let total_pages = window.total_pages;
        let mut items = Vec::with_capacity(window.pages.len() + 4);

        if window.show_first {
            items.push(NavItem::new(NavItemKind::First, 1, location, param, "first page".into()));
        }
        if window.show_prev {
            items.push(NavItem::new(
                NavItemKind::Previous,
                current_page - 1,
                location,
                param,
                "previous page".into(),
            ));
        }
        for &page in &window.pages {
            let mut item = NavItem::new(
                NavItemKind::Page,
                page,
                location,
                param,
                format!("page {page} of {total_pages}"),
            );
            item.active = page == current_page;
            items.push(item);
        }
        if window.show_next {
            items.push(NavItem::new(
                NavItemKind::Next,
                current_page + 1,
                location,
                param,
                "next page".into(),
            ));
        }
        if window.show_last {
            items.push(NavItem::new(
                NavItemKind::Last,
                total_pages,
                location,
                param,
                "last page".into(),
            ));
        }

        Some(Self {
            aria_label: DEFAULT_ARIA_LABEL.to_string(),
            current_page,
            total_pages,
            items,
        })
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = aria_label.into();
        self
    }

    /// The item marked as the current page, if the current page is in the window.
    pub fn active_item(&self) -> Option<&NavItem> {
        self.items.iter().find(|item| item.active)
    }

    /// Renders the controls as a Bootstrap-style `<nav>` fragment.
    pub fn render_html(&self) -> String {
        let mut html = format!(
            r#"<nav aria-label="{}"><ul class="pagination">"#,
            escape_html(&self.aria_label)
        );
        for item in &self.items {
            let (item_class, current) = if item.active {
                ("page-item active", r#" aria-current="page""#)
            } else {
                ("page-item", "")
            };
            let link_class = if item.kind.is_shortcut() {
                "page-link px-2"
            } else {
                "page-link"
            };
            html.push_str(&format!(r#"<li class="{item_class}">"#));
            html.push_str(&format!(
                r#"<a class="{link_class}" href="{}" aria-label="{}"{current}>{}</a></li>"#,
                escape_html(&item.href),
                escape_html(&item.aria_label),
                escape_html(&item.label()),
            ));
        }
        html.push_str("</ul></nav>");
        html
    }
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
