// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout measurements and slide positioning.

use core::num::NonZeroUsize;

use crate::config::sanitize_width;
use crate::{CarouselConfig, SlideRole, items_per_slide_for};

/// Resolved layout of the carousel, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Width of the carousel viewport.
    pub carousel_width: f64,
    /// Width of a single item.
    pub item_width: f64,
    /// Gap between adjacent items.
    pub item_margin: f64,
    /// Items grouped into one slide.
    pub items_per_slide: NonZeroUsize,
}

impl Layout {
    /// Layout used before anything has been measured.
    ///
    /// Unknown widths start at one pixel so that the first layout pass always
    /// has a non-degenerate ratio to work with.
    #[must_use]
    pub fn initial(config: &CarouselConfig) -> Self {
        Self {
            carousel_width: config.carousel_width.map_or(1.0, sanitize_width),
            item_width: config.item_width.map_or(1.0, sanitize_width),
            item_margin: config.item_margin(),
            items_per_slide: config.items_per_slide.unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Recomputes the layout from configuration overrides and fresh measurements.
    ///
    /// Overrides win over measurements; measurements win over the previous
    /// values. A configured `items_per_slide` is used verbatim, otherwise it
    /// is derived from the widths.
    #[must_use]
    pub fn resolve(
        &self,
        config: &CarouselConfig,
        measured_container: Option<f64>,
        measured_item: Option<f64>,
    ) -> Self {
        let carousel_width = sanitize_width(
            config
                .carousel_width
                .or(measured_container)
                .unwrap_or(self.carousel_width),
        );
        let item_width = sanitize_width(
            config
                .item_width
                .or(measured_item)
                .unwrap_or(self.item_width),
        );
        let item_margin = config.item_margin();
        let items_per_slide = config
            .items_per_slide
            .unwrap_or_else(|| items_per_slide_for(carousel_width, item_width, item_margin));
        Self {
            carousel_width,
            item_width,
            item_margin,
            items_per_slide,
        }
    }

    /// Distance between the origins of adjacent slides.
    ///
    /// Single-item slides butt against each other; multi-item slides keep one
    /// item margin between them.
    #[must_use]
    pub fn slide_pitch(&self) -> f64 {
        if self.items_per_slide.get() == 1 {
            self.carousel_width
        } else {
            self.carousel_width + self.item_margin
        }
    }

    /// Resting horizontal position of a slide with the given role.
    #[must_use]
    pub fn base_offset(&self, role: SlideRole) -> f64 {
        match role {
            SlideRole::Current => 0.0,
            SlideRole::Next => self.slide_pitch(),
            SlideRole::Prev => -self.slide_pitch(),
        }
    }

    /// Leading margin of the item at `index_in_slide`. The first item has none.
    #[must_use]
    pub fn item_margin_before(&self, index_in_slide: usize) -> f64 {
        if index_in_slide == 0 {
            0.0
        } else {
            self.item_margin
        }
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use super::Layout;
    use crate::{CarouselConfig, SlideRole};

    #[test]
    fn measurements_fill_in_missing_overrides() {
        let config = CarouselConfig::new(10);
        let layout = Layout::initial(&config).resolve(&config, Some(500.0), Some(150.0));
        assert_eq!(layout.carousel_width, 500.0);
        assert_eq!(layout.item_width, 150.0);
        assert_eq!(layout.items_per_slide.get(), 3);
    }

    #[test]
    fn overrides_win_over_measurements() {
        let config = CarouselConfig::new(10).with_widths(320.0, 100.0);
        let layout = Layout::initial(&config).resolve(&config, Some(999.0), Some(1.0));
        assert_eq!(layout.carousel_width, 320.0);
        assert_eq!(layout.item_width, 100.0);
        // (320 + 16) / (100 + 16) = 2.9
        assert_eq!(layout.items_per_slide.get(), 2);

        let fixed = config.with_items_per_slide(NonZeroUsize::new(5).unwrap());
        let layout = Layout::initial(&fixed).resolve(&fixed, None, None);
        assert_eq!(layout.items_per_slide.get(), 5);
    }

    #[test]
    fn missing_measurements_keep_previous_values() {
        let config = CarouselConfig::new(4);
        let first = Layout::initial(&config).resolve(&config, Some(400.0), Some(400.0));
        let second = first.resolve(&config, None, None);
        assert_eq!(second, first);
    }

    #[test]
    fn slide_positions_depend_on_items_per_slide() {
        let config = CarouselConfig::new(4).with_widths(300.0, 300.0);
        let single = Layout::initial(&config).resolve(&config, None, None);
        assert_eq!(single.items_per_slide.get(), 1);
        assert_eq!(single.base_offset(SlideRole::Next), 300.0);
        assert_eq!(single.base_offset(SlideRole::Prev), -300.0);

        let multi = config.with_items_per_slide(NonZeroUsize::new(2).unwrap());
        let multi = Layout::initial(&multi).resolve(&multi, None, None);
        assert_eq!(multi.base_offset(SlideRole::Next), 316.0);
        assert_eq!(multi.base_offset(SlideRole::Current), 0.0);
        assert_eq!(multi.item_margin_before(0), 0.0);
        assert_eq!(multi.item_margin_before(1), 16.0);
    }
}
