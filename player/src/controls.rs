use std::time::{Duration, Instant};

/// Idle delay before controls fade out during playback.
pub const HIDE_DELAY: Duration = Duration::from_millis(2000);

/// Auto-hide state for the on-screen controls.
///
/// Instead of owning a timer, this tracks a hide deadline and lets the
/// host drive it with its own monotonic clock: pointer movement arms
/// (or re-arms) the deadline, [`tick`](Self::tick) fires it. Dropping
/// the controller drops the deadline with it, so nothing can fire
/// after teardown.
#[derive(Debug, Clone)]
pub struct ControlsVisibility {
    visible: bool,
    hide_at: Option<Instant>,
}

impl Default for ControlsVisibility {
    fn default() -> Self {
        ControlsVisibility {
            visible: true,
            hide_at: None,
        }
    }
}

impl ControlsVisibility {
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Pointer moved over the player: show controls immediately and,
    /// only while playing, schedule the hide. A fresh movement always
    /// restarts the full delay.
    pub fn pointer_moved(&mut self, now: Instant, playing: bool) {
        self.visible = true;
        self.hide_at = if playing { Some(now + HIDE_DELAY) } else { None };
    }

    /// Pointer left the player bounds: hide right away while playing,
    /// no effect while paused.
    pub fn pointer_left(&mut self, playing: bool) {
        if playing {
            self.visible = false;
            self.hide_at = None;
        }
    }

    /// Advance the clock; returns true if the controls just hid.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.visible = false;
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }

    /// Playback paused: controls stay up indefinitely.
    pub fn playback_paused(&mut self) {
        self.visible = true;
        self.hide_at = None;
    }

    /// New source attached: cancel any pending hide and show controls.
    pub fn reset(&mut self) {
        *self = ControlsVisibility::default();
    }
}
