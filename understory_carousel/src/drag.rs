// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal drag tracking for swipe navigation.
//!
//! [`DragTracker`] remembers where a drag started and how far it has moved.
//! When the drag ends, [`DragTracker::resolve`] decides whether the offset
//! crossed the swipe threshold:
//!
//! ```
//! use understory_carousel::{Direction, DragTracker};
//!
//! let mut drag = DragTracker::new();
//! drag.start(100.0);
//! assert_eq!(drag.update(20.0), Some(-80.0));
//!
//! // A quarter of a 100px carousel is 25px; -80px swipes to the next slide.
//! assert_eq!(drag.resolve(100.0), Some(Direction::Next));
//! ```

use crate::Direction;

/// Fraction of the carousel width a drag must exceed to change slides.
pub const SWIPE_THRESHOLD_RATIO: f64 = 0.25;

/// Tracks a single in-progress drag along the carousel axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    start: Option<f64>,
    offset: f64,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            start: None,
            offset: 0.0,
        }
    }

    /// Begins a drag at coordinate `x`, resetting the offset.
    pub fn start(&mut self, x: f64) {
        self.start = Some(x);
        self.offset = 0.0;
    }

    /// Updates the drag with the pointer at `x`.
    ///
    /// Returns the new offset, or `None` if no drag is active.
    pub fn update(&mut self, x: f64) -> Option<f64> {
        let start = self.start?;
        self.offset = x - start;
        Some(self.offset)
    }

    /// Direction the drag would move the carousel if released now.
    ///
    /// Offsets strictly beyond `SWIPE_THRESHOLD_RATIO * carousel_width` move
    /// to the previous slide (positive) or the next slide (negative). An
    /// offset exactly at the threshold does not.
    #[must_use]
    pub fn resolve(&self, carousel_width: f64) -> Option<Direction> {
        if self.start.is_none() {
            return None;
        }
        let threshold = carousel_width * SWIPE_THRESHOLD_RATIO;
        if self.offset > threshold {
            Some(Direction::Prev)
        } else if self.offset < -threshold {
            Some(Direction::Next)
        } else {
            None
        }
    }

    /// The neighbor the current offset reveals.
    ///
    /// Dragging right (positive) reveals the previous slide; anything else
    /// reveals the next one.
    #[must_use]
    pub fn revealing(&self) -> Option<Direction> {
        self.start?;
        Some(if self.offset > 0.0 {
            Direction::Prev
        } else {
            Direction::Next
        })
    }

    /// Ends the drag. Returns `true` if a drag was active.
    pub fn finish(&mut self) -> bool {
        self.start.take().is_some()
    }

    /// Zeroes the offset without ending the drag.
    pub fn reset_offset(&mut self) {
        self.offset = 0.0;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Coordinate where the active drag started.
    #[must_use]
    pub const fn start_position(&self) -> Option<f64> {
        self.start
    }

    /// Signed distance moved since the drag started.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::DragTracker;
    use crate::Direction;

    #[test]
    fn update_without_start_is_ignored() {
        let mut drag = DragTracker::new();
        assert_eq!(drag.update(50.0), None);
        assert_eq!(drag.offset(), 0.0);
        assert_eq!(drag.resolve(100.0), None);
        assert!(!drag.finish());
    }

    #[test]
    fn negative_offset_reveals_next() {
        let mut drag = DragTracker::new();
        drag.start(100.0);
        assert_eq!(drag.update(60.0), Some(-40.0));
        assert_eq!(drag.revealing(), Some(Direction::Next));

        drag.update(130.0);
        assert_eq!(drag.revealing(), Some(Direction::Prev));
    }

    #[test]
    fn threshold_is_strict() {
        let mut drag = DragTracker::new();
        drag.start(100.0);

        drag.update(75.0);
        assert_eq!(drag.resolve(100.0), None, "exactly -25 on a 100px carousel stays");
        drag.update(74.0);
        assert_eq!(drag.resolve(100.0), Some(Direction::Next));

        drag.update(125.0);
        assert_eq!(drag.resolve(100.0), None, "exactly +25 stays");
        drag.update(126.0);
        assert_eq!(drag.resolve(100.0), Some(Direction::Prev));
    }

    #[test]
    fn restart_clears_previous_offset() {
        let mut drag = DragTracker::new();
        drag.start(0.0);
        drag.update(-90.0);
        drag.start(10.0);
        assert_eq!(drag.offset(), 0.0);
        assert_eq!(drag.start_position(), Some(10.0));
        assert!(drag.finish());
        assert!(!drag.is_active());
    }
}
