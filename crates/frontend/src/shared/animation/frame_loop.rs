//! Per-frame driver on top of `requestAnimationFrame`.

use leptos::prelude::*;
use log::debug;
use std::time::Duration;

/// Runs a tick callback once per animation frame until it reports that it is
/// done, or until the owning component is disposed.
///
/// At most one loop is active per `FrameLoop`; `start` on a running loop is a
/// no-op, the already scheduled frames pick up whatever state changed.
#[derive(Clone, Copy)]
pub struct FrameLoop {
    running: StoredValue<bool>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: StoredValue::new(false),
        }
    }

    /// `tick` receives the time since the previous frame and returns `true`
    /// while more frames are needed.
    pub fn start<F>(self, tick: F)
    where
        F: Fn(Duration) -> bool + Copy + 'static,
    {
        // Disposed owners report "running" so nothing gets scheduled.
        if self.running.try_get_value().unwrap_or(true) {
            return;
        }
        self.running.set_value(true);
        debug!("frame loop started");
        self.schedule(tick, now_ms());
    }

    fn schedule<F>(self, tick: F, last_frame_ms: f64)
    where
        F: Fn(Duration) -> bool + Copy + 'static,
    {
        request_animation_frame(move || {
            if self.running.try_get_value() != Some(true) {
                return;
            }
            let now = now_ms();
            let dt = Duration::from_secs_f64(((now - last_frame_ms) / 1000.0).max(0.0));
            if tick(dt) {
                self.schedule(tick, now);
            } else {
                let _ = self.running.try_set_value(false);
                debug!("frame loop stopped");
            }
        });
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}
