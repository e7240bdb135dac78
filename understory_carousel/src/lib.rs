// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a headless sliding carousel controller.
//!
//! This crate holds the logic of a paginated carousel without knowing
//! anything about widgets, a document, or a clock:
//!
//! - [`Paging`] and [`paginate`] group a flat list of items into slides.
//! - [`Carousel`] runs the transition state machine
//!   ([`Phase::Idle`] → [`Phase::Staging`] → [`Phase::Transitioning`] → idle),
//!   queues navigation requested mid-transition, tracks drags through
//!   [`DragTracker`], and drives autoplay.
//! - [`CarouselHost`] is the capability the host lends for timers, listeners,
//!   measurement, and index/swipe notifications.
//! - [`Layout`] resolves widths into items per slide and slide positions.
//!
//! Host frameworks are responsible for:
//!
//! - Owning the items and rendering the slides named by
//!   [`Carousel::visible_slides`] at [`Carousel::slide_offset`], animating
//!   offset changes over [`CarouselConfig::transition_duration`].
//! - Running timers and calling [`Carousel::on_timer`] when they expire.
//! - Forwarding pointer, hover, resize and load events.
//!
//! ## Transitions
//!
//! A move never changes the index synchronously. First the incoming slide is
//! *staged*: it becomes the next or previous slide and is painted one
//! carousel width away. After [`CarouselConfig::commit_delay`] the index
//! changes and both slides animate across; after the transition duration
//! the carousel settles. Requests arriving in between are buffered and
//! replayed in order.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::{
//!     Carousel, CarouselConfig, CarouselHost, Listener, Part, Phase, TimerHandle, TimerKind,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     issued: u64,
//!     timers: Vec<(TimerHandle, TimerKind)>,
//! }
//!
//! impl CarouselHost for Host {
//!     fn is_ready(&self) -> bool { true }
//!     fn measure(&mut self, _part: Part) -> Option<f64> { Some(300.0) }
//!     fn set_timer(&mut self, kind: TimerKind, _delay_ms: u64, _repeat: bool) -> TimerHandle {
//!         self.issued += 1;
//!         let handle = TimerHandle(self.issued);
//!         self.timers.push((handle, kind));
//!         handle
//!     }
//!     fn clear_timer(&mut self, handle: TimerHandle) {
//!         self.timers.retain(|(h, _)| *h != handle);
//!     }
//!     fn listen(&mut self, _listener: Listener) {}
//!     fn unlisten(&mut self, _listener: Listener) {}
//! }
//!
//! let mut host = Host::default();
//! let mut carousel = Carousel::new(CarouselConfig::new(4));
//! carousel.activate(&mut host);
//! assert_eq!(carousel.slide_count(), 4);
//!
//! carousel.next(&mut host);
//! assert_eq!(carousel.next_index(), Some(1));
//!
//! // The host fires the commit timer...
//! let (commit, _) = host.timers.remove(0);
//! carousel.on_timer(&mut host, commit);
//! assert_eq!(carousel.current_index(), 1);
//!
//! // ...and later the transition timer.
//! let (end, _) = host.timers.remove(0);
//! carousel.on_timer(&mut host, end);
//! assert_eq!(carousel.phase(), Phase::Idle);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `tracing`.
//! - `libm`: enables `no_std` builds that rely on `libm` for `kurbo`'s floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod carousel;
mod config;
mod drag;
mod host;
mod layout;
mod paging;
mod types;

pub use carousel::{Carousel, PendingMove};
pub use config::{
    Affordances, CarouselConfig, DEFAULT_COMMIT_DELAY, DEFAULT_ITEM_MARGIN,
    DEFAULT_MAX_PENDING_MOVES, DEFAULT_TRANSITION_DURATION, SwapMode,
};
pub use drag::{DragTracker, SWIPE_THRESHOLD_RATIO};
pub use host::{CarouselHost, DragEnd, Listener, Part, TimerHandle, TimerKind};
pub use layout::Layout;
pub use paging::{Paging, items_per_slide_for, next_index, paginate, prev_index};
pub use types::{Direction, Phase, SlideRole};
