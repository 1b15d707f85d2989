use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Which half of a content collection a url points at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionView {
    Listing,
    Detail(String),
}

impl CollectionView {
    /// A missing or blank slug means the listing.
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug.map(str::trim) {
            Some(slug) if !slug.is_empty() => CollectionView::Detail(slug.to_string()),
            _ => CollectionView::Listing,
        }
    }
}

/// Where a CMS-provided href should take the user.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkTarget {
    Internal(Route),
    External(String),
}

pub fn resolve_link(href: &str) -> LinkTarget {
    if href.starts_with('/') && !href.starts_with("//") {
        let path = href.split(|c: char| c == '?' || c == '#').next().unwrap_or(href);
        match Route::recognize(path) {
            Some(Route::NotFound) | None => {}
            Some(route) => return LinkTarget::Internal(route),
        }
    }
    LinkTarget::External(href.to_string())
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Pushes `route` onto the browser history. The router notifies every
/// location listener (the `Switch` included) once the address has changed.
pub fn go_to(navigator: &Navigator, route: Route) {
    log::info!("Navigating to {}", route.to_path());
    navigator.push(&route);
    scroll_to_top();
}

/// Scrolls to the top whenever `key` changes, and once on mount.
#[hook]
pub fn use_scroll_to_top<K>(key: K)
where
    K: PartialEq + 'static,
{
    use_effect_with_deps(
        move |_| {
            scroll_to_top();
            || ()
        },
        key,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_slug_selects_listing() {
        assert_eq!(CollectionView::from_slug(None), CollectionView::Listing);
        assert_eq!(CollectionView::from_slug(Some("")), CollectionView::Listing);
        assert_eq!(CollectionView::from_slug(Some("  ")), CollectionView::Listing);
    }

    #[test]
    fn present_slug_selects_detail() {
        assert_eq!(
            CollectionView::from_slug(Some("loan-signing-checklist")),
            CollectionView::Detail("loan-signing-checklist".to_string())
        );
    }

    #[test]
    fn internal_paths_become_routes() {
        assert_eq!(resolve_link("/blog"), LinkTarget::Internal(Route::Blog));
        assert_eq!(
            resolve_link("/blog/apostille-basics?ref=footer"),
            LinkTarget::Internal(Route::BlogPost { slug: "apostille-basics".to_string() })
        );
        assert_eq!(
            resolve_link("/lp/real-estate"),
            LinkTarget::Internal(Route::Sales { slug: "real-estate".to_string() })
        );
    }

    #[test]
    fn everything_else_stays_external() {
        for href in ["https://example.com/blog", "//cdn.example.com", "mailto:hi@example.com", "/no/such/page"] {
            assert_eq!(resolve_link(href), LinkTarget::External(href.to_string()));
        }
    }
}
