use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use super::theme::TabBarTheme;

/// One selectable destination of the floating tab bar.
///
/// The order of descriptors in [`FloatingTabBarConfig::tabs`] is the on-screen
/// left-to-right order and the index used for indicator math.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TabDescriptor {
    /// Unique key; also the substring looked up in the current path.
    pub identifier: String,
    /// Route used both for matching the home tab and as the navigation target.
    pub route_path: String,
    /// Symbolic icon name, resolved by the renderer.
    pub icon_ref: String,
    pub label: String,
}

impl TabDescriptor {
    pub fn new(
        identifier: impl Into<String>,
        route_path: impl Into<String>,
        icon_ref: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            route_path: route_path.into(),
            icon_ref: icon_ref.into(),
            label: label.into(),
        }
    }
}

/// Spring parameters for the sliding indicator.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Finite, non-negative damping with positive stiffness and mass.
    pub fn is_valid(&self) -> bool {
        self.damping.is_finite()
            && self.damping >= 0.0
            && self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.mass.is_finite()
            && self.mass > 0.0
    }

    /// `self` when valid, the default spring otherwise.
    pub fn sanitized(self) -> Self {
        if self.is_valid() {
            self
        } else {
            Self::default()
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 90.0,
            mass: 1.0,
        }
    }
}

/// Everything the host passes to mount a floating tab bar.
///
/// Only `tabs` is required when deserializing; every other field falls back to
/// the values of [`FloatingTabBarConfig::default`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FloatingTabBarConfig {
    pub tabs: Vec<TabDescriptor>,
    /// Route of the tab treated as "home" by the active-tab resolver.
    pub home_route: String,
    /// Fixed bar width. `None` means "window width minus `horizontal_margin`".
    pub container_width: Option<f64>,
    pub border_radius: f64,
    pub bottom_margin: f64,
    pub horizontal_margin: f64,
    pub bar_height: f64,
    pub indicator_radius: f64,
    pub blur_intensity: f64,
    pub spring: SpringConfig,
    pub theme: TabBarTheme,
}

impl Default for FloatingTabBarConfig {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            home_route: "/".to_string(),
            container_width: None,
            border_radius: 24.0,
            bottom_margin: 16.0,
            horizontal_margin: 32.0,
            bar_height: 64.0,
            indicator_radius: 20.0,
            blur_intensity: 80.0,
            spring: SpringConfig::default(),
            theme: TabBarTheme::default(),
        }
    }
}

impl FloatingTabBarConfig {
    pub fn with_tabs(tabs: Vec<TabDescriptor>) -> Self {
        Self {
            tabs,
            ..Self::default()
        }
    }

    /// Checks the configuration for degenerate values, reporting the first
    /// problem found.
    ///
    /// A failing configuration is still renderable: the bar draws no indicator
    /// and ignores presses. Callers are expected to log the error, not abort.
    pub fn validate(&self) -> Result<(), TabBarConfigError> {
        match self.problems().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every problem in the configuration, in field order.
    pub fn problems(&self) -> Vec<TabBarConfigError> {
        let mut problems = Vec::new();
        if self.tabs.is_empty() {
            problems.push(TabBarConfigError::NoTabs);
        }
        if let Some(width) = self.container_width {
            if !(width.is_finite() && width > 0.0) {
                problems.push(TabBarConfigError::InvalidContainerWidth(width));
            }
        }
        let mut seen = HashSet::new();
        for tab in &self.tabs {
            if !seen.insert(tab.identifier.as_str()) {
                problems.push(TabBarConfigError::DuplicateIdentifier(
                    tab.identifier.clone(),
                ));
            }
        }
        if !self.spring.is_valid() {
            problems.push(TabBarConfigError::InvalidSpring {
                damping: self.spring.damping,
                stiffness: self.spring.stiffness,
            });
        }
        problems
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TabBarConfigError {
    #[error("tab bar has no tabs")]
    NoTabs,
    #[error("container width must be a positive number, got {0}")]
    InvalidContainerWidth(f64),
    #[error("duplicate tab identifier '{0}'")]
    DuplicateIdentifier(String),
    #[error("invalid spring parameters: damping={damping}, stiffness={stiffness}")]
    InvalidSpring { damping: f64, stiffness: f64 },
}
