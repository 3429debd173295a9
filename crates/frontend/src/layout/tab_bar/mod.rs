//! Floating tab bar
//!
//! - `resolver` - current path → active tab index
//! - `controller` - spring-driven indicator offset and its state machine
//! - `geometry` - tab slot widths and indicator placement
//! - `dispatcher` - tab press → navigation request
//! - `component` - the Leptos component wiring all of the above

pub mod component;
pub mod controller;
pub mod dispatcher;
pub mod geometry;
pub mod resolver;

pub use component::FloatingTabBar;
pub use controller::{IndicatorController, SelectorState};
pub use dispatcher::{dispatcher_for, Navigator, TabPressDispatcher};
pub use geometry::{IndicatorRect, TabGeometry};
pub use resolver::{resolve_active_index, HomeRoute};

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::{SpringConfig, TabDescriptor};
    use std::cell::RefCell;
    use std::time::Duration;

    const FRAME: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_navigation_scenario() {
        let tabs = vec![
            TabDescriptor::new("home", "/", "house.fill", "Home"),
            TabDescriptor::new("request", "request", "car.fill", "Request"),
            TabDescriptor::new("profile", "profile", "person.fill", "Profile"),
        ];
        let home = HomeRoute::default();
        let geometry = TabGeometry::compute(330.0, tabs.len()).unwrap();

        let mounted = resolve_active_index(&tabs, &home, "/");
        assert_eq!(mounted, Some(0));
        let mut controller = IndicatorController::new(mounted, SpringConfig::default());
        assert_eq!(controller.state(), SelectorState::Settled(0));

        let index = resolve_active_index(&tabs, &home, "/(tabs)/request");
        assert_eq!(index, Some(1));
        assert!(controller.set_active(index));
        for _ in 0..6 {
            controller.tick(FRAME);
        }
        let in_flight = controller.offset();
        assert!(in_flight > 0.0 && in_flight < 1.0);
        assert!(geometry.indicator(in_flight).x > 0.0);

        let index = resolve_active_index(&tabs, &home, "/unrelated/xyz");
        assert_eq!(index, None);
        controller.set_active(index);
        assert_eq!(controller.state(), SelectorState::Unmatched);
        for _ in 0..10 {
            controller.tick(FRAME);
        }
        assert_eq!(controller.offset(), in_flight);

        let requested = RefCell::new(Vec::new());
        let dispatcher =
            TabPressDispatcher::new(|path: &str| requested.borrow_mut().push(path.to_string()));
        dispatcher.on_tab_pressed(&tabs[2]);
        assert_eq!(*requested.borrow(), vec!["profile".to_string()]);
        assert_eq!(controller.state(), SelectorState::Unmatched);
        assert_eq!(controller.offset(), in_flight);
    }
}
