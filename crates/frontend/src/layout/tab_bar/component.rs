//! FloatingTabBar component: binds the pure tab-bar core to the router,
//! the window and the frame clock.
//!
//! Data flow:
//! ```text
//! router pathname ──► active_index (Memo) ──► IndicatorController ──► offset ──► indicator style
//!                                                   ▲
//!                                    FrameLoop ─────┘ (one tick per animation frame)
//! press ──► TabPressDispatcher ──► router navigate ──► (new pathname)
//! ```

use super::controller::IndicatorController;
use super::dispatcher::dispatcher_for;
use super::geometry::{default_container_width, TabGeometry};
use super::resolver::{resolve_active_index, HomeRoute};
use crate::shared::animation::FrameLoop;
use crate::shared::icons;
use contracts::FloatingTabBarConfig;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use log::{debug, warn};
use std::time::Duration;

/// Floating bottom tab bar with a spring-animated selection indicator.
///
/// The active tab is derived from the router's current path, never from
/// presses: a press only asks the router to navigate.
///
/// # Props
/// - `config`: tabs, spring, theme and layout defaults.
/// - `container_width`: reactive width override; otherwise the config's fixed
///   width, otherwise the window width minus the horizontal margin. A
///   non-positive width leaves the bar without an indicator and inert.
/// - `border_radius`, `bottom_margin`: overrides for the config values.
#[component]
pub fn FloatingTabBar(
    config: FloatingTabBarConfig,
    #[prop(optional, into)] container_width: MaybeProp<f64>,
    #[prop(optional)] border_radius: Option<f64>,
    #[prop(optional)] bottom_margin: Option<f64>,
) -> impl IntoView {
    let mut config = config;
    if let Some(radius) = border_radius {
        config.border_radius = radius;
    }
    if let Some(margin) = bottom_margin {
        config.bottom_margin = margin;
    }

    for problem in config.problems() {
        warn!("Floating tab bar config: {}", problem);
    }

    let tab_count = config.tabs.len();
    let pathname = use_location().pathname;

    let active_index = Memo::new({
        let tabs = config.tabs.clone();
        let home = HomeRoute::new(config.home_route.clone());
        move |_| pathname.with(|path| resolve_active_index(&tabs, &home, path))
    });

    let controller = StoredValue::new(IndicatorController::new(
        active_index.get_untracked(),
        config.spring.sanitized(),
    ));
    let offset = RwSignal::new(controller.with_value(|c| c.offset()));
    let frames = FrameLoop::new();

    let tick = move |dt: Duration| -> bool {
        let Some((value, more)) = controller.try_update_value(|c| (c.tick(dt), c.needs_frames()))
        else {
            return false;
        };
        // Some(_) means the signal is gone with the component.
        if offset.try_set(value).is_some() {
            return false;
        }
        more
    };

    Effect::new(move |_| {
        let index = active_index.get();
        debug!("Active tab index: {:?}", index);
        let Some(animate) = controller.try_update_value(|c| c.set_active(index)) else {
            return;
        };
        if animate {
            frames.start(tick);
        } else if let Some(value) = controller.try_with_value(|c| c.offset()) {
            offset.set(value);
        }
    });

    let window_width = RwSignal::new(measure_window_width());
    let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
        window_width.set(measure_window_width());
    });

    let fixed_width = config.container_width;
    let horizontal_margin = config.horizontal_margin;
    let width = Memo::new(move |_| {
        container_width.get().or(fixed_width).unwrap_or_else(|| {
            default_container_width(window_width.get(), horizontal_margin)
        })
    });
    let geometry = Memo::new(move |_| TabGeometry::compute(width.get(), tab_count));
    let indicator = Memo::new(move |_| geometry.get().map(|g| g.indicator(offset.get())));

    debug!("FloatingTabBar mounted with {} tabs", tab_count);
    on_cleanup(move || {
        resize_handle.remove();
        debug!("FloatingTabBar unmounted");
    });

    let navigate = use_navigate();
    let navigator = move |path: &str| navigate(path, NavigateOptions::default());

    let theme = config.theme.clone();
    let buttons = config
        .tabs
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, tab)| {
            let navigator = navigator.clone();
            let theme = theme.clone();
            let is_active = move || active_index.get() == Some(index);
            let color = move || theme.foreground(is_active()).to_string();
            let key = tab.identifier.clone();
            let icon = icons::icon(&tab.icon_ref);
            let label = tab.label.clone();

            view! {
                <button
                    type="button"
                    role="tab"
                    class="floating-tab-bar__tab"
                    class:floating-tab-bar__tab--active=is_active
                    aria-selected=move || is_active().to_string()
                    data-tab-key=key
                    style:flex="1"
                    style:display="flex"
                    style:flex-direction="column"
                    style:align-items="center"
                    style:justify-content="center"
                    style:gap="4px"
                    style:z-index="2"
                    style:background="none"
                    style:border="none"
                    style:color=color
                    on:click=move |_| {
                        dispatcher_for(navigator.clone(), geometry.get_untracked())
                            .on_tab_pressed(&tab)
                    }
                >
                    {icon}
                    <span
                        class="floating-tab-bar__label"
                        style:font-size="12px"
                        style:font-weight="600"
                    >
                        {label}
                    </span>
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class="floating-tab-bar"
            style:position="fixed"
            style:left="0"
            style:right="0"
            style:bottom=bottom_offset(config.bottom_margin)
            style:display="flex"
            style:justify-content="center"
            style:z-index="1000"
        >
            <div
                class="floating-tab-bar__container"
                data-tint=theme.tint.as_str()
                style:width=move || format!("{}px", width.get())
                style:border-radius=format!("{}px", config.border_radius)
                style:overflow="hidden"
                style:box-shadow="0px 4px 16px rgba(0, 0, 0, 0.15)"
                style:background-color=theme.tint.backdrop_color()
                style:backdrop-filter=backdrop_filter(config.blur_intensity)
            >
                <div
                    class="floating-tab-bar__row"
                    role="tablist"
                    style:display="flex"
                    style:position="relative"
                    style:height=format!("{}px", config.bar_height)
                >
                    <div
                        class="floating-tab-bar__indicator"
                        aria-hidden="true"
                        style:position="absolute"
                        style:top="0"
                        style:left="0"
                        style:height="100%"
                        style:z-index="1"
                        style:border-radius=format!("{}px", config.indicator_radius)
                        style:background-color=theme.primary.clone()
                        style:display=move || if indicator.get().is_some() { "block" } else { "none" }
                        style:width=move || {
                            indicator.get().map(|rect| format!("{}px", rect.width)).unwrap_or_default()
                        }
                        style:transform=move || {
                            indicator
                                .get()
                                .map(|rect| format!("translateX({}px)", rect.x))
                                .unwrap_or_default()
                        }
                    ></div>
                    {buttons}
                </div>
            </div>
        </div>
    }
}

fn measure_window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

/// Keeps the bar above the device's bottom safe area.
fn bottom_offset(bottom_margin: f64) -> String {
    format!("calc({}px + env(safe-area-inset-bottom, 0px))", bottom_margin)
}

/// Blur intensity is on a 0..=100 scale; 100 maps to a 25px blur.
fn backdrop_filter(intensity: f64) -> String {
    let radius = intensity.clamp(0.0, 100.0) / 4.0;
    format!("blur({}px) saturate(180%)", radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_filter_scale() {
        assert_eq!(backdrop_filter(80.0), "blur(20px) saturate(180%)");
        assert_eq!(backdrop_filter(400.0), "blur(25px) saturate(180%)");
        assert_eq!(backdrop_filter(-1.0), "blur(0px) saturate(180%)");
    }

    #[test]
    fn test_bottom_offset_includes_safe_area() {
        assert_eq!(
            bottom_offset(16.0),
            "calc(16px + env(safe-area-inset-bottom, 0px))"
        );
    }
}
