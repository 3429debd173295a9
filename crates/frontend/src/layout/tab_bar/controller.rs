//! Indicator animation state machine.
//!
//! ```text
//! Settled(i) --new index j != i--> Transitioning(i, j)
//! Transitioning(_, j) --spring at rest--> Settled(j)
//! Transitioning(_, j) --new index k--> Transitioning(j, k)   (re-target, velocity kept)
//! any --no match--> Unmatched                                (offset frozen in place)
//! Unmatched --index j--> Transitioning(offset, j) / Settled(j)
//! ```
//!
//! The offset lives in index space: tab `i` sits at `i as f64`. Pixel placement
//! is the geometry's job.

use crate::shared::animation::Spring;
use contracts::SpringConfig;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SelectorState {
    Settled(usize),
    Transitioning { from: f64, to: usize, velocity: f64 },
    Unmatched,
}

impl SelectorState {
    pub fn active_index(&self) -> Option<usize> {
        match *self {
            SelectorState::Settled(index) => Some(index),
            SelectorState::Transitioning { to, .. } => Some(to),
            SelectorState::Unmatched => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct IndicatorController {
    spring: Spring,
    state: SelectorState,
}

impl IndicatorController {
    /// The offset starts on the initially active tab, or on tab 0 when the
    /// mount path matches nothing.
    pub fn new(initial: Option<usize>, config: SpringConfig) -> Self {
        let start = initial.unwrap_or(0) as f64;
        Self {
            spring: Spring::at_rest(start, config),
            state: initial.map_or(SelectorState::Unmatched, SelectorState::Settled),
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn offset(&self) -> f64 {
        self.spring.position()
    }

    pub fn needs_frames(&self) -> bool {
        matches!(self.state, SelectorState::Transitioning { .. })
    }

    /// Feeds a freshly resolved active index. Returns `true` when frames are
    /// needed to animate toward it.
    pub fn set_active(&mut self, index: Option<usize>) -> bool {
        let Some(to) = index else {
            self.spring.freeze();
            self.state = SelectorState::Unmatched;
            return false;
        };

        let from = match self.state {
            SelectorState::Settled(current) if current == to => return false,
            SelectorState::Transitioning { to: current, .. } if current == to => return true,
            SelectorState::Settled(current) => current as f64,
            SelectorState::Transitioning { to: current, .. } => current as f64,
            SelectorState::Unmatched => self.spring.position(),
        };

        self.spring.set_target(to as f64);
        if self.spring.is_settled() {
            self.spring.snap_to(to as f64);
            self.state = SelectorState::Settled(to);
            return false;
        }
        self.state = SelectorState::Transitioning {
            from,
            to,
            velocity: self.spring.velocity(),
        };
        true
    }

    /// Advances one frame and returns the offset to render.
    pub fn tick(&mut self, dt: Duration) -> f64 {
        if let SelectorState::Transitioning { from, to, .. } = self.state {
            self.spring.step(dt);
            self.state = if self.spring.is_settled() {
                SelectorState::Settled(to)
            } else {
                SelectorState::Transitioning {
                    from,
                    to,
                    velocity: self.spring.velocity(),
                }
            };
        }
        self.spring.position()
    }
}
