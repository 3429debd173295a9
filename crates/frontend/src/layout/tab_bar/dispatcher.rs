use super::geometry::TabGeometry;
use contracts::TabDescriptor;
use log::debug;

/// Write side of the router as seen by the tab bar.
pub trait Navigator {
    /// Fire-and-forget navigation request.
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path)
    }
}

/// Turns tab presses into navigation requests.
///
/// It never touches the active index: the new tab becomes active only once the
/// router reports the new path and the resolver re-runs.
#[derive(Clone)]
pub struct TabPressDispatcher<N> {
    navigator: N,
    inert: bool,
}

impl<N: Navigator> TabPressDispatcher<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            inert: false,
        }
    }

    /// A dispatcher for a degenerate bar; presses are dropped.
    pub fn inert(navigator: N) -> Self {
        Self {
            navigator,
            inert: true,
        }
    }

    pub fn on_tab_pressed(&self, tab: &TabDescriptor) {
        if self.inert {
            debug!("Tab press ignored, bar is inert: {}", tab.route_path);
            return;
        }
        debug!("Tab pressed: {}", tab.route_path);
        self.navigator.navigate_to(&tab.route_path);
    }
}

/// Dispatcher for the bar's current layout: a bar without geometry (no tabs,
/// or no usable width) draws no indicator and drops presses.
pub fn dispatcher_for<N: Navigator>(
    navigator: N,
    geometry: Option<TabGeometry>,
) -> TabPressDispatcher<N> {
    match geometry {
        Some(_) => TabPressDispatcher::new(navigator),
        None => TabPressDispatcher::inert(navigator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_press_requests_route() {
        let calls = RefCell::new(Vec::new());
        let dispatcher = TabPressDispatcher::new(|path: &str| calls.borrow_mut().push(path.to_string()));

        dispatcher.on_tab_pressed(&TabDescriptor::new("profile", "profile", "person.fill", "Profile"));
        dispatcher.on_tab_pressed(&TabDescriptor::new("request", "/no/such/route", "car.fill", "Request"));

        assert_eq!(*calls.borrow(), vec!["profile".to_string(), "/no/such/route".to_string()]);
    }

    #[test]
    fn test_inert_dispatcher_drops_presses() {
        let calls = RefCell::new(Vec::new());
        let dispatcher = TabPressDispatcher::inert(|path: &str| calls.borrow_mut().push(path.to_string()));

        dispatcher.on_tab_pressed(&TabDescriptor::new("profile", "profile", "person.fill", "Profile"));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_degenerate_layout_is_inert() {
        let calls = RefCell::new(Vec::new());
        let record = |path: &str| calls.borrow_mut().push(path.to_string());
        let profile = TabDescriptor::new("profile", "profile", "person.fill", "Profile");

        for geometry in [
            TabGeometry::compute(0.0, 3),
            TabGeometry::compute(-12.0, 3),
            TabGeometry::compute(f64::NAN, 3),
            TabGeometry::compute(300.0, 0),
        ] {
            dispatcher_for(record, geometry).on_tab_pressed(&profile);
        }
        assert!(calls.borrow().is_empty());

        dispatcher_for(record, TabGeometry::compute(300.0, 3)).on_tab_pressed(&profile);
        assert_eq!(*calls.borrow(), vec!["profile".to_string()]);
    }
}
