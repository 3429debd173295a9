//! Maps the router's current path to the index of the active tab.
//!
//! Rules, first matching tab in sequence order wins:
//! - the home tab matches the root path `/`, or any path starting with the
//!   home route's base segment (nested home screens);
//! - any other tab matches when its identifier occurs anywhere in the path.
//!
//! The substring rule is intentionally loose: an identifier contained in a
//! foreign route will match it. Keep identifiers disjoint.

use contracts::TabDescriptor;

pub const ROOT_PATH: &str = "/";

/// The route designated as "home" and its base segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeRoute {
    route: String,
    base: String,
}

impl HomeRoute {
    pub fn new(route: impl Into<String>) -> Self {
        let route = route.into();
        let base = route.trim_end_matches('/').to_string();
        Self { route, base }
    }

    fn is_home_tab(&self, tab: &TabDescriptor) -> bool {
        tab.route_path == self.route
    }

    fn matches(&self, path: &str) -> bool {
        // An empty base ("/" as home) would prefix every path.
        path == ROOT_PATH || (!self.base.is_empty() && path.starts_with(&self.base))
    }
}

impl Default for HomeRoute {
    fn default() -> Self {
        Self::new(ROOT_PATH)
    }
}

/// Returns the index of the tab selected by `path`, `None` when nothing matches.
pub fn resolve_active_index(tabs: &[TabDescriptor], home: &HomeRoute, path: &str) -> Option<usize> {
    tabs.iter().position(|tab| {
        if home.is_home_tab(tab) {
            home.matches(path)
        } else {
            path.contains(tab.identifier.as_str())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("home", "/", "house.fill", "Home"),
            TabDescriptor::new("request", "request", "car.fill", "Request"),
            TabDescriptor::new("profile", "profile", "person.fill", "Profile"),
        ]
    }

    fn grouped_tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("(home)", "/(tabs)/(home)/", "house.fill", "Home"),
            TabDescriptor::new("request", "/(tabs)/request", "car.fill", "Request"),
            TabDescriptor::new("profile", "/(tabs)/profile", "person.fill", "Profile"),
        ]
    }

    #[test]
    fn test_root_selects_home() {
        assert_eq!(resolve_active_index(&tabs(), &HomeRoute::default(), "/"), Some(0));
        let home = HomeRoute::new("/(tabs)/(home)/");
        assert_eq!(resolve_active_index(&grouped_tabs(), &home, "/"), Some(0));
    }

    #[test]
    fn test_nested_home_routes_select_home() {
        let home = HomeRoute::new("/(tabs)/(home)/");
        assert_eq!(
            resolve_active_index(&grouped_tabs(), &home, "/(tabs)/(home)/details/42"),
            Some(0)
        );
        assert_eq!(
            resolve_active_index(&grouped_tabs(), &home, "/(tabs)/(home)"),
            Some(0)
        );
    }

    #[test]
    fn test_substring_match_for_other_tabs() {
        let home = HomeRoute::default();
        assert_eq!(resolve_active_index(&tabs(), &home, "/request"), Some(1));
        assert_eq!(resolve_active_index(&tabs(), &home, "/(tabs)/request"), Some(1));
        assert_eq!(resolve_active_index(&tabs(), &home, "/profile/edit"), Some(2));
    }

    #[test]
    fn test_root_home_does_not_swallow_other_paths() {
        let home = HomeRoute::default();
        assert_eq!(resolve_active_index(&tabs(), &home, "/request"), Some(1));
        assert_eq!(resolve_active_index(&tabs(), &home, "/settings"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let tabs = vec![
            TabDescriptor::new("home", "/", "house.fill", "Home"),
            TabDescriptor::new("request", "request", "car.fill", "Request"),
            TabDescriptor::new("request-history", "history", "clock", "History"),
        ];
        assert_eq!(
            resolve_active_index(&tabs, &HomeRoute::default(), "/request-history"),
            Some(1)
        );
    }

    #[test]
    fn test_unrelated_path_is_none() {
        assert_eq!(
            resolve_active_index(&tabs(), &HomeRoute::default(), "/unrelated/xyz"),
            None
        );
        assert_eq!(resolve_active_index(&[], &HomeRoute::default(), "/"), None);
    }

    #[test]
    fn test_home_base_segment() {
        let home = HomeRoute::new("/(tabs)/(home)/");
        assert!(home.matches("/(tabs)/(home)/index"));
        assert!(!home.matches("/(tabs)/request"));
    }
}
