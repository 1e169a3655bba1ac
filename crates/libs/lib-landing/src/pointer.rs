//! Pointer tracking
//!
//! Raw client coordinates from pointer-move events, passed straight through to
//! the background scene. No throttling, smoothing or transformation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scene offset for a parallax effect, in `[-strength, strength]` on each axis.
    ///
    /// The viewport centre maps to `(0.0, 0.0)`. A degenerate viewport yields no offset.
    pub fn parallax(&self, viewport_w: f64, viewport_h: f64, strength: f64) -> (f64, f64) {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return (0.0, 0.0);
        }
        let nx = (self.x / viewport_w * 2.0 - 1.0).clamp(-1.0, 1.0);
        let ny = (self.y / viewport_h * 2.0 - 1.0).clamp(-1.0, 1.0);
        (nx * strength, ny * strength)
    }
}

/// Latest pointer position while a subscription is attached.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    latest: PointerPosition,
    attached: bool,
    events: u64,
}

impl PointerTracker {
    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record a move event. Ignored while detached.
    pub fn record(&mut self, x: f64, y: f64) -> bool {
        if !self.attached {
            return false;
        }
        self.latest = PointerPosition { x, y };
        self.events += 1;
        true
    }

    pub fn latest(&self) -> PointerPosition {
        self.latest
    }

    pub fn events(&self) -> u64 {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_event_wins_exactly() {
        let mut tracker = PointerTracker::default();
        tracker.attach();
        let events = [(1.0, 2.0), (350.5, 12.25), (-4.0, 9999.0), (640.0, 360.0)];
        for (x, y) in events {
            tracker.record(x, y);
        }
        assert_eq!(tracker.latest(), PointerPosition::new(640.0, 360.0));
        assert_eq!(tracker.events(), 4);
    }

    #[test]
    fn test_detached_ignores_events() {
        let mut tracker = PointerTracker::default();
        assert!(!tracker.record(5.0, 5.0));
        tracker.attach();
        assert!(tracker.record(10.0, 20.0));
        tracker.detach();
        assert!(!tracker.record(30.0, 40.0));
        assert_eq!(tracker.latest(), PointerPosition::new(10.0, 20.0));
    }

    #[test]
    fn test_reattach_cycles() {
        let mut tracker = PointerTracker::default();
        for i in 0..5 {
            tracker.attach();
            tracker.record(i as f64, i as f64);
            tracker.detach();
        }
        assert!(!tracker.is_attached());
        assert_eq!(tracker.events(), 5);
    }

    #[test]
    fn test_parallax() {
        let centre = PointerPosition::new(500.0, 250.0);
        assert_eq!(centre.parallax(1000.0, 500.0, 10.0), (0.0, 0.0));

        let corner = PointerPosition::new(0.0, 500.0);
        assert_eq!(corner.parallax(1000.0, 500.0, 10.0), (-10.0, 10.0));

        let outside = PointerPosition::new(5000.0, -10.0);
        assert_eq!(outside.parallax(1000.0, 500.0, 2.0), (2.0, -2.0));

        assert_eq!(corner.parallax(0.0, 500.0, 10.0), (0.0, 0.0));
    }
}
