// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: directions, slide roles, and transition phases.

/// Direction of slide motion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move forward; the incoming slide enters from the trailing edge.
    Next,
    /// Move backward; the incoming slide enters from the leading edge.
    Prev,
}

impl Direction {
    /// The direction implied by moving from `from` to `to`.
    #[must_use]
    pub const fn between(from: usize, to: usize) -> Self {
        if to > from { Self::Next } else { Self::Prev }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// Role a slide currently plays in the rendered carousel.
///
/// Slides without a role are not rendered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// The slide in view.
    Current,
    /// Positioned one carousel width after the current slide.
    Next,
    /// Positioned one carousel width before the current slide.
    Prev,
}

/// Where the transition state machine is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing is moving.
    Idle,
    /// A neighbor slide is staged and the index change is about to be committed.
    Staging(Direction),
    /// The index has changed and the slides are animating in `Direction`.
    Transitioning(Direction),
}

impl Phase {
    /// Returns `true` unless the phase is [`Phase::Idle`].
    #[must_use]
    pub const fn is_in_flight(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::{Direction, Phase};

    #[test]
    fn direction_between_indices() {
        assert_eq!(Direction::between(0, 3), Direction::Next);
        assert_eq!(Direction::between(3, 0), Direction::Prev);
        assert_eq!(Direction::Next.reverse(), Direction::Prev);
    }

    #[test]
    fn only_idle_is_settled() {
        assert!(!Phase::Idle.is_in_flight());
        assert!(Phase::Staging(Direction::Next).is_in_flight());
        assert!(Phase::Transitioning(Direction::Prev).is_in_flight());
    }
}
