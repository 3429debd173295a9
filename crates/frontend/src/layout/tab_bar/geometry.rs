/// Horizontal layout of the bar: equal-width tab slots across the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabGeometry {
    tab_width: f64,
}

/// Pixel placement of the sliding indicator inside the bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorRect {
    pub x: f64,
    pub width: f64,
}

impl TabGeometry {
    /// `None` for a degenerate bar (no tabs, or no usable width); such a bar
    /// renders without an indicator.
    pub fn compute(container_width: f64, tab_count: usize) -> Option<Self> {
        if tab_count == 0 || !container_width.is_finite() || container_width <= 0.0 {
            return None;
        }
        Some(Self {
            tab_width: container_width / tab_count as f64,
        })
    }

    /// `offset` is in index space and may be fractional mid-transition.
    pub fn indicator(&self, offset: f64) -> IndicatorRect {
        IndicatorRect {
            x: offset * self.tab_width,
            width: self.tab_width,
        }
    }
}

/// Width used when the host does not pin one: the measured window width minus
/// the side margins, never negative.
pub fn default_container_width(window_width: f64, horizontal_margin: f64) -> f64 {
    (window_width - horizontal_margin).max(0.0)
}
