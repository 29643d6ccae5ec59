//! Route table: path → page, with a catch-all back to the landing page.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::Page;

static ROUTES: Lazy<HashMap<&'static str, Page>> =
    Lazy::new(|| Page::ALL.into_iter().map(|page| (page.path(), page)).collect());

/// Outcome of looking a path up in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path names a page.
    Page(Page),
    /// Unknown path; the visitor is sent to the landing page.
    Fallback,
}

impl RouteMatch {
    /// The page the visitor ends up on before entry guards run.
    pub fn page(&self) -> Page {
        match self {
            RouteMatch::Page(page) => *page,
            RouteMatch::Fallback => Page::Landing,
        }
    }
}

/// Resolves a requested path.
///
/// Query strings and fragments are ignored, trailing slashes are dropped and
/// matching is case-insensitive.
pub fn resolve(path: &str) -> RouteMatch {
    let normalized = normalize(path);
    match ROUTES.get(normalized.as_str()) {
        Some(page) => RouteMatch::Page(*page),
        None => RouteMatch::Fallback,
    }
}

/// Canonical form of a path used for matching.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        return "/".to_string();
    }
    trimmed.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn every_page_resolves_from_its_path() {
        for page in Page::ALL {
            assert_eq!(resolve(page.path()), RouteMatch::Page(page));
        }
    }

    #[test]
    fn ignores_query_fragment_trailing_slash_and_case() {
        assert_eq!(resolve("/home/"), RouteMatch::Page(Page::Home));
        assert_eq!(resolve("/Results?tab=1"), RouteMatch::Page(Page::Results));
        assert_eq!(resolve("/login#form"), RouteMatch::Page(Page::Login));
        assert_eq!(resolve("//"), RouteMatch::Page(Page::Landing));
    }

    #[test]
    fn unknown_paths_fall_back_to_landing() {
        for path in ["/admin", "/home/extra", "home", "", "/results.json"] {
            let route = resolve(path);
            assert_eq!(route, RouteMatch::Fallback, "path {:?}", path);
            assert_eq!(route.page(), Page::Landing);
        }
    }

    proptest! {
        #[test]
        fn any_path_outside_the_table_lands_on_landing(path in "\\PC*") {
            let known = Page::ALL.iter().any(|p| p.path() == normalize(&path));
            let route = resolve(&path);
            if known {
                prop_assert!(matches!(route, RouteMatch::Page(_)));
            } else {
                prop_assert_eq!(route, RouteMatch::Fallback);
                prop_assert_eq!(route.page(), Page::Landing);
            }
        }
    }
}
