// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping a flat strip of items into slides.
//!
//! A [`Paging`] maps item indices `0..item_count` onto slide indices. Every
//! slide holds `items_per_slide` consecutive items; the last slide holds the
//! remainder. Hosts keep the actual item data and use [`Paging::slide_range`]
//! or [`paginate`] to find the items of a slide.
//!
//! Slide navigation wraps circularly, see [`next_index`] and [`prev_index`].

use core::num::NonZeroUsize;
use core::ops::Range;
use core::slice::Chunks;

/// Splits `items` into consecutive slides of `per_slide` items.
///
/// The last slide may be shorter. Concatenating the slides reproduces `items`.
///
/// ```
/// use core::num::NonZeroUsize;
/// use understory_carousel::paginate;
///
/// let items = ["a", "b", "c", "d", "e"];
/// let slides: Vec<&[&str]> = paginate(&items, NonZeroUsize::new(2).unwrap()).collect();
/// assert_eq!(slides, [&["a", "b"][..], &["c", "d"][..], &["e"][..]]);
/// ```
pub fn paginate<T>(items: &[T], per_slide: NonZeroUsize) -> Chunks<'_, T> {
    items.chunks(per_slide.get())
}

/// Index of the slide after `index`, wrapping to `0` after the last slide.
///
/// Returns `None` when there are no slides.
#[must_use]
pub const fn next_index(index: usize, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some((index % total + 1) % total)
}

/// Index of the slide before `index`, wrapping to the last slide before `0`.
///
/// Returns `None` when there are no slides.
#[must_use]
pub const fn prev_index(index: usize, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    Some((index % total + total - 1) % total)
}

/// Number of items that fit in one slide of the given layout.
///
/// This is `floor((carousel_width + item_margin) / (item_width + item_margin))`,
/// clamped to at least one. Degenerate inputs (non-finite values or a
/// non-positive item pitch) also yield one.
#[must_use]
pub fn items_per_slide_for(carousel_width: f64, item_width: f64, item_margin: f64) -> NonZeroUsize {
    let pitch = item_width + item_margin;
    let span = carousel_width + item_margin;
    if !span.is_finite() || !pitch.is_finite() || pitch <= 0.0 {
        return NonZeroUsize::MIN;
    }
    let ratio = span / pitch;
    if ratio < 1.0 {
        return NonZeroUsize::MIN;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Ratio is finite and at least one; truncation is the floor we want"
    )]
    let count = ratio as usize;
    NonZeroUsize::new(count).unwrap_or(NonZeroUsize::MIN)
}

/// Maps a flat list of items onto slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    item_count: usize,
    items_per_slide: NonZeroUsize,
}

impl Paging {
    /// Creates a new [`Paging`] over `item_count` items.
    #[must_use]
    pub const fn new(item_count: usize, items_per_slide: NonZeroUsize) -> Self {
        Self {
            item_count,
            items_per_slide,
        }
    }

    /// Returns the total number of items.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Sets the total number of items.
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    /// Returns the number of items per slide.
    #[must_use]
    pub const fn items_per_slide(&self) -> usize {
        self.items_per_slide.get()
    }

    /// Sets the number of items per slide.
    pub fn set_items_per_slide(&mut self, items_per_slide: NonZeroUsize) {
        self.items_per_slide = items_per_slide;
    }

    /// Returns the number of slides, `ceil(item_count / items_per_slide)`.
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.item_count.div_ceil(self.items_per_slide.get())
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Returns the slide containing `item`, or `None` if `item` is out of range.
    #[must_use]
    pub const fn slide_of_item(&self, item: usize) -> Option<usize> {
        if item >= self.item_count {
            return None;
        }
        Some(item / self.items_per_slide.get())
    }

    /// Returns the zero-based position of `item` within its slide.
    #[must_use]
    pub const fn item_in_slide(&self, item: usize) -> usize {
        item % self.items_per_slide.get()
    }

    /// Returns the item indices that make up `slide`.
    #[must_use]
    pub fn slide_range(&self, slide: usize) -> Option<Range<usize>> {
        if slide >= self.slide_count() {
            return None;
        }
        let start = slide * self.items_per_slide.get();
        let end = (start + self.items_per_slide.get()).min(self.item_count);
        Some(start..end)
    }

    /// Iterates the item ranges of all slides in order.
    pub fn slides(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        (0..self.slide_count()).filter_map(|slide| self.slide_range(slide))
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(0, NonZeroUsize::MIN)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::{Paging, items_per_slide_for, next_index, paginate, prev_index};

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn wrap_round_trips_for_every_index() {
        for total in 1..8 {
            for i in 0..total {
                let prev = prev_index(i, total).unwrap();
                let next = next_index(i, total).unwrap();
                assert_eq!(next_index(prev, total), Some(i));
                assert_eq!(prev_index(next, total), Some(i));
            }
        }
        assert_eq!(next_index(4, 5), Some(0));
        assert_eq!(prev_index(0, 5), Some(4));
        assert_eq!(next_index(usize::MAX, 3), Some((usize::MAX % 3 + 1) % 3));
        assert_eq!(prev_index(usize::MAX, 3), Some((usize::MAX % 3 + 2) % 3));
        assert_eq!(next_index(0, 0), None);
        assert_eq!(prev_index(0, 0), None);
    }

    #[test]
    fn paginate_reproduces_items_in_order() {
        let items: Vec<u32> = (0..11).collect();
        for n in 1..13 {
            let slides: Vec<&[u32]> = paginate(&items, nz(n)).collect();
            assert_eq!(slides.len(), items.len().div_ceil(n));
            let (last, full) = slides.split_last().unwrap();
            assert!(full.iter().all(|s| s.len() == n));
            assert!(!last.is_empty() && last.len() <= n);
            let flat: Vec<u32> = slides.concat();
            assert_eq!(flat, items);
        }
    }

    #[test]
    fn paging_maps_items_to_slides() {
        let paging = Paging::new(10, nz(4));
        assert_eq!(paging.slide_count(), 3);
        assert_eq!(paging.slide_of_item(3), Some(0));
        assert_eq!(paging.slide_of_item(4), Some(1));
        assert_eq!(paging.slide_of_item(10), None);
        assert_eq!(paging.item_in_slide(7), 3);
        assert_eq!(paging.slide_range(2), Some(8..10));
        assert_eq!(paging.slide_range(3), None);
        let ranges: Vec<_> = paging.slides().collect();
        assert_eq!(ranges, [0..4, 4..8, 8..10]);
    }

    #[test]
    fn empty_paging_has_no_slides() {
        let paging = Paging::default();
        assert!(paging.is_empty());
        assert_eq!(paging.slide_count(), 0);
        assert_eq!(paging.slide_range(0), None);
    }

    #[test]
    fn items_per_slide_from_widths() {
        // (500 + 16) / (150 + 16) = 3.1 -> 3
        assert_eq!(items_per_slide_for(500.0, 150.0, 16.0).get(), 3);
        // (484 + 16) / (150 + 16) = 3.01
        assert_eq!(items_per_slide_for(484.0, 150.0, 16.0).get(), 3);
        // Item wider than the carousel still gets one per slide.
        assert_eq!(items_per_slide_for(100.0, 300.0, 16.0).get(), 1);
        // Degenerate inputs clamp to one.
        assert_eq!(items_per_slide_for(100.0, 0.0, 0.0).get(), 1);
        assert_eq!(items_per_slide_for(f64::NAN, 10.0, 0.0).get(), 1);
        assert_eq!(items_per_slide_for(f64::INFINITY, 10.0, 0.0).get(), 1);
    }
}
