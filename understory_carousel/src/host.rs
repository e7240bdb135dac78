// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability a host toolkit lends to the carousel.
//!
//! The carousel never touches a window, a document, or a clock directly.
//! Every operation with side effects takes a `&mut impl CarouselHost`, and
//! the host reports back through [`Carousel`](crate::Carousel) methods:
//!
//! - timers scheduled with [`CarouselHost::set_timer`] come back through
//!   [`Carousel::on_timer`](crate::Carousel::on_timer) with the same handle,
//! - [`Listener::Load`] comes back through [`Carousel::on_load`](crate::Carousel::on_load),
//! - [`Listener::Resize`] comes back through [`Carousel::on_resize`](crate::Carousel::on_resize).
//!
//! A host that fires a timer after clearing it, or after the carousel was
//! deactivated, is harmless: the carousel ignores handles it does not own.

use crate::Direction;

/// Opaque timer identifier chosen by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// What a timer is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Short delay between staging a neighbor slide and committing the index change.
    ///
    /// The gap lets the staged slide be painted at its off-screen position so
    /// that the following index change animates instead of snapping.
    Commit,
    /// Fires when the slide animation is expected to have finished.
    TransitionEnd,
    /// Repeating autoplay tick.
    Autoplay,
}

/// Host notifications the carousel subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// The viewport was resized.
    Resize,
    /// The rendering surface finished loading.
    Load,
}

/// Parts of the rendered carousel the host can measure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The carousel container.
    Container,
    /// A representative item.
    Item,
}

/// How a drag gesture ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragEnd {
    /// The pointer or touch was released.
    Release,
    /// The gesture was canceled by the platform.
    Cancel,
}

/// Environment services used by [`Carousel`](crate::Carousel).
pub trait CarouselHost {
    /// Whether the rendering surface is ready to be measured.
    fn is_ready(&self) -> bool;

    /// Width in pixels of a rendered part, or `None` if it is not attached yet.
    fn measure(&mut self, part: Part) -> Option<f64>;

    /// Schedule a timer that fires after `delay_ms` milliseconds.
    ///
    /// Repeating timers fire every `delay_ms` until cleared.
    fn set_timer(&mut self, kind: TimerKind, delay_ms: u64, repeat: bool) -> TimerHandle;

    /// Cancel a timer. Clearing an unknown or already-fired handle must be a no-op.
    fn clear_timer(&mut self, handle: TimerHandle);

    /// Start delivering a host notification.
    fn listen(&mut self, listener: Listener);

    /// Stop delivering a host notification.
    fn unlisten(&mut self, listener: Listener);

    /// The current slide index changed.
    fn index_changed(&mut self, index: usize) {
        let _ = index;
    }

    /// A drag gesture moved the carousel in `direction`.
    fn swiped(&mut self, end: DragEnd, direction: Direction) {
        let _ = (end, direction);
    }
}
