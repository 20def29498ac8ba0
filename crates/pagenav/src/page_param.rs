//! Reading and writing the page query parameter of list views.

use crate::location::Location;

/// Query parameter used when a list view does not name its own.
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Default page size of list views.
pub const DEFAULT_PER_PAGE: i64 = 12;

/// Page requested by `location`. Missing, unparsable and non-positive values
/// all read as page 1.
pub fn read_page(location: &Location, param: &str) -> i64 {
    location
        .query_param(param)
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Location after the user moves to `page`. Page 1 is the default and
/// drops the parameter from the URL.
pub fn change_page(location: &Location, param: &str, page: i64) -> Location {
    if page == 1 {
        location.without_param(param)
    } else {
        location.page_target(param, page)
    }
}

/// Location to replace the current one with when `current_page` lies past
/// the last page, or `None` when no correction is needed.
///
/// An unknown page count (`total_pages <= 0`) never triggers a redirect.
pub fn resolve_out_of_range(
    location: &Location,
    param: &str,
    current_page: i64,
    total_pages: i64,
) -> Option<Location> {
    if total_pages <= 0 || current_page <= total_pages {
        return None;
    }
    Some(change_page(location, param, total_pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(href: &str) -> Location {
        Location::parse(href).unwrap()
    }

    #[test]
    fn test_read_page() {
        assert_eq!(read_page(&loc("/projects?page=4"), "page"), 4);
        assert_eq!(read_page(&loc("/projects"), "page"), 1);
        assert_eq!(read_page(&loc("/projects?page="), "page"), 1);
        assert_eq!(read_page(&loc("/projects?page=abc"), "page"), 1);
        assert_eq!(read_page(&loc("/projects?page=0"), "page"), 1);
        assert_eq!(read_page(&loc("/projects?page=-2"), "page"), 1);
        assert_eq!(read_page(&loc("/projects?page=4"), "p"), 1);
    }

    #[test]
    fn test_change_page_to_first_removes_param() {
        let location = loc("/projects?page=3&sort=name");
        assert_eq!(
            change_page(&location, "page", 1).to_href(),
            "/projects?sort=name"
        );
        assert_eq!(
            change_page(&location, "page", 5).to_href(),
            "/projects?page=5&sort=name"
        );
    }

    #[test]
    fn test_redirect_to_last_page() {
        let location = loc("/projects?page=9#list");
        let target = resolve_out_of_range(&location, "page", 9, 4).unwrap();
        assert_eq!(target.to_href(), "/projects?page=4#list");
    }

    #[test]
    fn test_redirect_with_single_page_drops_param() {
        let location = loc("/projects?page=3&q=x");
        let target = resolve_out_of_range(&location, "page", 3, 1).unwrap();
        assert_eq!(target.to_href(), "/projects?q=x");
    }

    #[test]
    fn test_no_redirect_in_range_or_unknown() {
        let location = loc("/projects?page=3");
        assert!(resolve_out_of_range(&location, "page", 3, 3).is_none());
        assert!(resolve_out_of_range(&location, "page", 1, 3).is_none());
        assert!(resolve_out_of_range(&location, "page", 3, 0).is_none());
    }
}
