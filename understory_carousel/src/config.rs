// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration supplied by the host.

use core::num::NonZeroUsize;

/// Default gap between items, in pixels.
pub const DEFAULT_ITEM_MARGIN: f64 = 16.0;

/// Default slide animation length, in milliseconds.
pub const DEFAULT_TRANSITION_DURATION: u64 = 600;

/// Default gap between staging a neighbor and committing the index change, in milliseconds.
pub const DEFAULT_COMMIT_DELAY: u64 = 1;

/// Default bound on navigation requests queued during a transition.
pub const DEFAULT_MAX_PENDING_MOVES: usize = 16;

bitflags::bitflags! {
    /// Built-in navigation affordances the host should render.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Affordances: u8 {
        /// Previous/next arrow buttons.
        const ARROWS = 0b0000_0001;
        /// One dot per slide, the active one highlighted.
        const DOTS   = 0b0000_0010;
    }
}

impl Default for Affordances {
    fn default() -> Self {
        Self::ARROWS | Self::DOTS
    }
}

/// How [`Carousel::goto_slide`](crate::Carousel::goto_slide) reaches its target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwapMode {
    /// Change the index immediately, without animation.
    Jump,
    /// Animate through a staged transition.
    #[default]
    Move,
}

/// Configuration for a [`Carousel`](crate::Carousel).
///
/// Width overrides take precedence over measured widths. Fields that are
/// `None` fall back to measurement (widths) or computation (`items_per_slide`).
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Number of items to paginate. The host owns the items themselves.
    pub item_count: usize,
    /// Externally driven slide index. A change triggers navigation.
    pub target_index: Option<usize>,
    /// Navigation affordances to render.
    pub affordances: Affordances,
    /// Autoplay interval in milliseconds. `None` or zero disables autoplay.
    pub autoplay_interval: Option<u64>,
    /// Fixed carousel width in pixels.
    pub carousel_width: Option<f64>,
    /// Fixed item width in pixels.
    pub item_width: Option<f64>,
    /// Gap between items in pixels.
    pub item_margin: f64,
    /// Fixed number of items per slide.
    pub items_per_slide: Option<NonZeroUsize>,
    /// Jump or animate when navigating to an arbitrary slide.
    pub swap: SwapMode,
    /// Length of the slide animation in milliseconds.
    pub transition_duration: u64,
    /// Delay between staging and committing, in milliseconds.
    pub commit_delay: u64,
    /// Maximum number of navigation requests buffered during a transition.
    pub max_pending_moves: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            target_index: None,
            affordances: Affordances::default(),
            autoplay_interval: None,
            carousel_width: None,
            item_width: None,
            item_margin: DEFAULT_ITEM_MARGIN,
            items_per_slide: None,
            swap: SwapMode::default(),
            transition_duration: DEFAULT_TRANSITION_DURATION,
            commit_delay: DEFAULT_COMMIT_DELAY,
            max_pending_moves: DEFAULT_MAX_PENDING_MOVES,
        }
    }
}

impl CarouselConfig {
    /// Creates a configuration for `item_count` items with default settings.
    #[must_use]
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            ..Self::default()
        }
    }

    /// Sets the externally driven slide index.
    #[must_use]
    pub fn with_target_index(mut self, index: usize) -> Self {
        self.target_index = Some(index);
        self
    }

    /// Sets the autoplay interval in milliseconds.
    #[must_use]
    pub fn with_autoplay(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval = Some(interval_ms);
        self
    }

    /// Fixes the carousel and item widths instead of measuring them.
    #[must_use]
    pub fn with_widths(mut self, carousel_width: f64, item_width: f64) -> Self {
        self.carousel_width = Some(carousel_width);
        self.item_width = Some(item_width);
        self
    }

    /// Sets the gap between items.
    #[must_use]
    pub fn with_item_margin(mut self, item_margin: f64) -> Self {
        self.item_margin = item_margin;
        self
    }

    /// Fixes the number of items per slide.
    #[must_use]
    pub fn with_items_per_slide(mut self, items_per_slide: NonZeroUsize) -> Self {
        self.items_per_slide = Some(items_per_slide);
        self
    }

    /// Sets the swap mode.
    #[must_use]
    pub fn with_swap(mut self, swap: SwapMode) -> Self {
        self.swap = swap;
        self
    }

    /// Sets the navigation affordances.
    #[must_use]
    pub fn with_affordances(mut self, affordances: Affordances) -> Self {
        self.affordances = affordances;
        self
    }

    /// The autoplay interval, if autoplay is enabled.
    #[must_use]
    pub fn autoplay(&self) -> Option<u64> {
        self.autoplay_interval.filter(|&ms| ms > 0)
    }

    /// The configured item margin, with negative and non-finite values treated as zero.
    #[must_use]
    pub fn item_margin(&self) -> f64 {
        sanitize_width(self.item_margin)
    }
}

/// Clamp a pixel width to a finite, non-negative value.
pub(crate) fn sanitize_width(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Affordances, CarouselConfig, SwapMode};

    #[test]
    fn defaults_match_the_widget() {
        let config = CarouselConfig::default();
        assert_eq!(config.item_margin, 16.0);
        assert_eq!(config.transition_duration, 600);
        assert_eq!(config.swap, SwapMode::Move);
        assert_eq!(config.affordances, Affordances::ARROWS | Affordances::DOTS);
        assert_eq!(config.autoplay(), None);
    }

    #[test]
    fn zero_autoplay_is_disabled() {
        assert_eq!(CarouselConfig::new(3).with_autoplay(0).autoplay(), None);
        assert_eq!(CarouselConfig::new(3).with_autoplay(250).autoplay(), Some(250));
    }

    #[test]
    fn bad_margins_are_clamped() {
        assert_eq!(CarouselConfig::new(1).with_item_margin(-4.0).item_margin(), 0.0);
        assert_eq!(CarouselConfig::new(1).with_item_margin(f64::NAN).item_margin(), 0.0);
        assert_eq!(CarouselConfig::new(1).with_item_margin(8.0).item_margin(), 8.0);
    }
}
