// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: slide state, transitions, drag and autoplay.

use alloc::collections::VecDeque;
use core::ops::Range;

use kurbo::Affine;
use smallvec::SmallVec;

use crate::host::{CarouselHost, DragEnd, Listener, Part, TimerHandle, TimerKind};
use crate::{
    Affordances, CarouselConfig, Direction, DragTracker, Layout, Paging, Phase, SlideRole,
    SwapMode, next_index, prev_index,
};

/// A navigation request deferred until the in-flight transition settles.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    /// Direction of the requested move.
    pub direction: Direction,
    /// Explicit destination, or `None` for one step in `direction`.
    pub target: Option<usize>,
}

/// Index change scheduled by the staging step.
#[derive(Copy, Clone, Debug)]
struct Commit {
    index: usize,
    next: Option<usize>,
    prev: Option<usize>,
    direction: Direction,
}

/// Timers owned by the controller. A handle is present iff its timer is pending.
#[derive(Copy, Clone, Debug, Default)]
struct Timers {
    commit: Option<TimerHandle>,
    transition: Option<TimerHandle>,
    autoplay: Option<TimerHandle>,
}

/// Headless carousel controller.
///
/// The controller owns slide indices, drag state, the transition buffer and
/// the handles of the timers it asked the host for. It never renders; hosts
/// read [`Carousel::visible_slides`] and [`Carousel::slide_offset`] after each
/// call and draw accordingly.
///
/// Navigation is asynchronous. [`Carousel::move_slide`] stages the incoming
/// slide at its off-screen position and returns; the index changes when the
/// commit timer fires, and the carousel returns to [`Phase::Idle`] when the
/// transition timer fires. Requests made in between are queued.
///
/// Until [`Carousel::activate`] and after [`Carousel::deactivate`], input and
/// timers are ignored.
#[derive(Debug)]
pub struct Carousel {
    config: CarouselConfig,
    layout: Layout,
    paging: Paging,

    current_index: usize,
    next_index: Option<usize>,
    prev_index: Option<usize>,
    moving_to: Option<Direction>,
    drag: DragTracker,

    pending_commit: Option<Commit>,
    pending: VecDeque<PendingMove>,
    timers: Timers,

    active: bool,
    mounted: bool,
    awaiting_load: bool,
    hovered: bool,
}

impl Carousel {
    /// Creates an inactive carousel.
    ///
    /// Slides are grouped with the configured `items_per_slide`, or one item
    /// per slide until the first layout pass. A `target_index` outside the
    /// initial slides is ignored.
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let layout = Layout::initial(&config);
        let paging = Paging::new(config.item_count, layout.items_per_slide);
        let current_index = config
            .target_index
            .filter(|&i| i < paging.slide_count())
            .unwrap_or(0);
        Self {
            config,
            layout,
            paging,
            current_index,
            next_index: None,
            prev_index: None,
            moving_to: None,
            drag: DragTracker::new(),
            pending_commit: None,
            pending: VecDeque::new(),
            timers: Timers::default(),
            active: false,
            mounted: false,
            awaiting_load: false,
            hovered: false,
        }
    }

    /// Attaches the carousel to `host`.
    ///
    /// Lays out immediately if the host is ready, otherwise waits for
    /// [`Listener::Load`]. Subscribes to resizes and starts autoplay.
    /// Returns `false` if the carousel was already active.
    pub fn activate(&mut self, host: &mut impl CarouselHost) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        if host.is_ready() {
            self.mounted = true;
            self.recalculate_layout(host);
        } else {
            self.awaiting_load = true;
            host.listen(Listener::Load);
        }
        self.set_autoplay(host);
        host.listen(Listener::Resize);
        tracing::debug!(slides = self.slide_count(), mounted = self.mounted, "carousel activated");
        true
    }

    /// Detaches the carousel from `host`.
    ///
    /// Cancels every pending timer, removes every listener and drops queued
    /// navigation. Slide indices are kept. Returns `false` if the carousel
    /// was not active.
    pub fn deactivate(&mut self, host: &mut impl CarouselHost) -> bool {
        if !self.active {
            return false;
        }
        self.active = false;
        self.mounted = false;
        self.hovered = false;

        for handle in [
            self.timers.commit.take(),
            self.timers.transition.take(),
            self.timers.autoplay.take(),
        ]
        .into_iter()
        .flatten()
        {
            host.clear_timer(handle);
        }
        self.pending_commit = None;
        self.pending.clear();
        self.drag.finish();
        self.reset_to_idle();

        host.unlisten(Listener::Resize);
        if self.awaiting_load {
            self.awaiting_load = false;
            host.unlisten(Listener::Load);
        }
        tracing::debug!(index = self.current_index, "carousel deactivated");
        true
    }

    /// Handles [`Listener::Load`]: the surface can now be measured.
    pub fn on_load(&mut self, host: &mut impl CarouselHost) -> bool {
        if !self.active || !self.awaiting_load {
            return false;
        }
        self.awaiting_load = false;
        host.unlisten(Listener::Load);
        self.mounted = true;
        self.recalculate_layout(host)
    }

    /// Handles [`Listener::Resize`].
    pub fn on_resize(&mut self, host: &mut impl CarouselHost) -> bool {
        if !self.active || !self.mounted {
            return false;
        }
        self.recalculate_layout(host)
    }

    /// Replaces the configuration.
    ///
    /// Re-runs layout, navigates if `target_index` changed, and re-arms
    /// autoplay when nothing is moving. An in-flight transition and its
    /// queue are left alone.
    pub fn set_config(&mut self, host: &mut impl CarouselHost, config: CarouselConfig) {
        let previous_target = self.config.target_index;
        self.config = config;

        if !self.recalculate_layout(host) {
            let layout = self.layout.resolve(&self.config, None, None);
            self.apply_layout(layout);
        }

        if let Some(target) = self.config.target_index
            && previous_target != Some(target)
        {
            self.goto_slide(host, target);
        }

        if self.active && !self.is_in_flight() && !self.drag.is_active() {
            self.set_autoplay(host);
        }
    }

    /// Measures the host and regroups items into slides.
    ///
    /// Does nothing unless the carousel is mounted and its width is known,
    /// either from configuration or from measuring [`Part::Container`].
    /// Never disturbs an in-flight transition; indices that no longer exist
    /// are clamped.
    pub fn recalculate_layout(&mut self, host: &mut impl CarouselHost) -> bool {
        if !self.active || !self.mounted {
            return false;
        }
        let container = host.measure(Part::Container);
        if container.is_none() && self.config.carousel_width.is_none() {
            tracing::trace!("container not attached; skipping layout");
            return false;
        }
        let item = host.measure(Part::Item);
        let layout = self.layout.resolve(&self.config, container, item);
        self.apply_layout(layout);
        true
    }

    fn apply_layout(&mut self, layout: Layout) {
        let changed = layout != self.layout || self.paging.item_count() != self.config.item_count;
        self.layout = layout;
        self.paging.set_item_count(self.config.item_count);
        self.paging.set_items_per_slide(layout.items_per_slide);

        let count = self.paging.slide_count();
        if count == 0 {
            self.current_index = 0;
            self.next_index = None;
            self.prev_index = None;
        } else {
            self.current_index = self.current_index.min(count - 1);
            let current = self.current_index;
            let valid = |i: &usize| *i < count && *i != current;
            self.next_index = self.next_index.filter(valid);
            self.prev_index = self.prev_index.filter(valid);
        }
        debug_assert!(
            self.next_index.is_none() || self.prev_index.is_none(),
            "at most one neighbor is staged"
        );
        debug_assert!(count == 0 || self.current_index < count);

        if changed {
            tracing::debug!(
                width = layout.carousel_width,
                items_per_slide = layout.items_per_slide.get(),
                slides = count,
                "carousel layout updated"
            );
        }
    }

    /// Moves one slide forward.
    pub fn next(&mut self, host: &mut impl CarouselHost) -> bool {
        self.move_slide(host, Direction::Next, None)
    }

    /// Moves one slide backward.
    pub fn prev(&mut self, host: &mut impl CarouselHost) -> bool {
        self.move_slide(host, Direction::Prev, None)
    }

    /// Navigates to `target`.
    ///
    /// Ignored if `target` is out of range or already current. In
    /// [`SwapMode::Jump`] the index changes immediately (and the call is
    /// ignored while a transition is in flight); in [`SwapMode::Move`] the
    /// carousel animates toward `target`, forward if it lies after the
    /// current slide and backward otherwise.
    pub fn goto_slide(&mut self, host: &mut impl CarouselHost, target: usize) -> bool {
        if !self.active {
            return false;
        }
        if target >= self.slide_count() || target == self.current_index {
            tracing::trace!(target, current = self.current_index, "ignoring goto");
            return false;
        }
        match self.config.swap {
            SwapMode::Jump => self.jump_to(host, target),
            SwapMode::Move => {
                let direction = Direction::between(self.current_index, target);
                self.move_slide(host, direction, Some(target))
            }
        }
    }

    fn jump_to(&mut self, host: &mut impl CarouselHost, target: usize) -> bool {
        if self.is_in_flight() {
            return false;
        }
        self.current_index = target;
        self.reset_to_idle();
        tracing::debug!(index = target, "jumped to slide");
        host.index_changed(target);
        true
    }

    /// Starts an animated move in `direction`.
    ///
    /// With `target` set, moves straight to that slide; otherwise moves one
    /// step, wrapping at either end. While another transition is in flight
    /// the request is queued and replayed in order once it settles.
    ///
    /// Returns `true` if a transition started or the request was queued.
    pub fn move_slide(
        &mut self,
        host: &mut impl CarouselHost,
        direction: Direction,
        target: Option<usize>,
    ) -> bool {
        if !self.active {
            return false;
        }
        if self.is_in_flight() {
            return self.buffer(PendingMove { direction, target });
        }

        let count = self.slide_count();
        let current = self.current_index;
        let stepped = match direction {
            Direction::Next => next_index(current, count),
            Direction::Prev => prev_index(current, count),
        };
        let Some(index) = target.or(stepped) else {
            return false;
        };
        if index >= count || index == current {
            return false;
        }

        // A drag may already have placed this slide; keep its position.
        match direction {
            Direction::Next if self.next_index != Some(index) => {
                self.next_index = Some(index);
                self.prev_index = None;
            }
            Direction::Prev if self.prev_index != Some(index) => {
                self.prev_index = Some(index);
                self.next_index = None;
            }
            _ => {}
        }

        self.stop_autoplay(host);

        let (next, prev) = match direction {
            Direction::Next => (None, Some(current)),
            Direction::Prev => (Some(current), None),
        };
        self.pending_commit = Some(Commit {
            index,
            next,
            prev,
            direction,
        });
        self.timers.commit = Some(host.set_timer(TimerKind::Commit, self.config.commit_delay, false));
        tracing::trace!(from = current, to = index, ?direction, "staged slide");
        true
    }

    fn buffer(&mut self, request: PendingMove) -> bool {
        if self.pending.len() >= self.config.max_pending_moves {
            tracing::trace!(?request, "transition buffer full; dropping request");
            return false;
        }
        tracing::trace!(?request, queued = self.pending.len() + 1, "buffered move");
        self.pending.push_back(request);
        true
    }

    /// Delivers an expired timer.
    ///
    /// Returns `false` for handles this carousel does not own, which covers
    /// timers that were cleared, superseded, or outlived [`Carousel::deactivate`].
    pub fn on_timer(&mut self, host: &mut impl CarouselHost, handle: TimerHandle) -> bool {
        if !self.active {
            return false;
        }
        if self.timers.commit == Some(handle) {
            self.timers.commit = None;
            self.commit(host);
        } else if self.timers.transition == Some(handle) {
            self.timers.transition = None;
            self.on_transition_end(host);
        } else if self.timers.autoplay == Some(handle) {
            self.move_slide(host, Direction::Next, None);
        } else {
            tracing::trace!(?handle, "ignoring stale timer");
            return false;
        }
        true
    }

    fn commit(&mut self, host: &mut impl CarouselHost) {
        let Some(commit) = self.pending_commit.take() else {
            return;
        };
        let count = self.slide_count();
        if count == 0 {
            // Every slide vanished while staging.
            self.reset_to_idle();
            self.settle(host);
            return;
        }

        let index = commit.index.min(count - 1);
        if index == self.current_index {
            // The target was clamped away by a layout pass while staging.
            tracing::trace!(index, "staged slide no longer exists");
            self.reset_to_idle();
            self.settle(host);
            return;
        }
        let valid = |i: &usize| *i < count && *i != index;
        self.current_index = index;
        self.next_index = commit.next.filter(valid);
        self.prev_index = commit.prev.filter(valid);
        self.moving_to = Some(commit.direction);
        self.drag.reset_offset();
        debug_assert!(
            self.next_index.is_none() || self.prev_index.is_none(),
            "a committed slide has at most one neighbor on screen"
        );

        tracing::debug!(index, direction = ?commit.direction, "slide committed");
        host.index_changed(index);

        self.timers.transition = Some(host.set_timer(
            TimerKind::TransitionEnd,
            self.config.transition_duration,
            false,
        ));
    }

    fn on_transition_end(&mut self, host: &mut impl CarouselHost) {
        if self.moving_to.is_some() {
            self.reset_to_idle();
        }
        tracing::trace!(index = self.current_index, "transition finished");
        self.settle(host);
    }

    /// Replays queued requests until one starts a transition, else resumes autoplay.
    fn settle(&mut self, host: &mut impl CarouselHost) {
        while let Some(request) = self.pending.pop_front() {
            match request.target {
                Some(target) => self.goto_slide(host, target),
                None => self.move_slide(host, request.direction, None),
            };
            if self.is_in_flight() {
                return;
            }
        }
        self.set_autoplay(host);
    }

    fn reset_to_idle(&mut self) {
        self.moving_to = None;
        self.next_index = None;
        self.prev_index = None;
        self.drag.reset_offset();
    }

    fn stage_neighbor(&mut self, direction: Direction) {
        let count = self.slide_count();
        match direction {
            Direction::Next => {
                self.next_index = next_index(self.current_index, count);
                self.prev_index = None;
            }
            Direction::Prev => {
                self.prev_index = prev_index(self.current_index, count);
                self.next_index = None;
            }
        }
    }

    /// Starts a drag at horizontal coordinate `x`. Pauses autoplay.
    pub fn on_drag_start(&mut self, host: &mut impl CarouselHost, x: f64) -> bool {
        if !self.active {
            return false;
        }
        self.drag.start(x);
        self.stop_autoplay(host);
        true
    }

    /// Follows the pointer during a drag.
    ///
    /// Reveals the neighbor on the side being dragged into view. Ignored
    /// without an active drag, or while a transition is in flight.
    pub fn on_drag_move(&mut self, x: f64) -> bool {
        if !self.active || self.is_in_flight() {
            return false;
        }
        if self.drag.update(x).is_none() {
            return false;
        }
        if self.slide_count() > 1
            && let Some(direction) = self.drag.revealing()
        {
            self.stage_neighbor(direction);
        }
        true
    }

    /// Ends a drag.
    ///
    /// Dragging more than a quarter of the carousel width moves to the
    /// revealed slide and reports the swipe through
    /// [`CarouselHost::swiped`]; shorter drags snap back. A swipe released
    /// while a transition is in flight is queued like any other move. Autoplay resumes
    /// unless the pointer hovers the carousel or a transition is running.
    pub fn on_drag_end(&mut self, host: &mut impl CarouselHost, end: DragEnd) -> bool {
        if !self.active || !self.drag.is_active() {
            return false;
        }
        let resolved = self.drag.resolve(self.layout.carousel_width);
        self.drag.finish();

        match resolved {
            Some(direction) if self.move_slide(host, direction, None) => {
                tracing::debug!(?direction, ?end, "swipe");
                host.swiped(end, direction);
            }
            _ => {
                self.drag.reset_offset();
                if !self.is_in_flight() {
                    self.next_index = None;
                    self.prev_index = None;
                }
            }
        }

        if !self.is_in_flight() {
            self.set_autoplay(host);
        }
        true
    }

    /// Tracks whether the pointer is over the carousel. Hovering pauses autoplay.
    pub fn on_hover(&mut self, host: &mut impl CarouselHost, hovered: bool) {
        if !self.active {
            return;
        }
        self.hovered = hovered;
        if hovered {
            self.stop_autoplay(host);
        } else if !self.is_in_flight() {
            self.set_autoplay(host);
        }
    }

    fn set_autoplay(&mut self, host: &mut impl CarouselHost) {
        self.stop_autoplay(host);
        if !self.active || self.hovered || self.drag.is_active() {
            return;
        }
        if let Some(interval) = self.config.autoplay() {
            self.timers.autoplay = Some(host.set_timer(TimerKind::Autoplay, interval, true));
        }
    }

    fn stop_autoplay(&mut self, host: &mut impl CarouselHost) {
        if let Some(handle) = self.timers.autoplay.take() {
            host.clear_timer(handle);
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The current layout.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The current item-to-slide mapping.
    #[must_use]
    pub fn paging(&self) -> &Paging {
        &self.paging
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.paging.slide_count()
    }

    /// Index of the slide in view.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Slide placed after the current one, if any.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        self.next_index
    }

    /// Slide placed before the current one, if any.
    #[must_use]
    pub fn prev_index(&self) -> Option<usize> {
        self.prev_index
    }

    /// Direction of the running animation, if any.
    #[must_use]
    pub fn moving_to(&self) -> Option<Direction> {
        self.moving_to
    }

    /// The transition phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.pending_commit, self.moving_to) {
            (Some(commit), _) => Phase::Staging(commit.direction),
            (None, Some(direction)) => Phase::Transitioning(direction),
            (None, None) => Phase::Idle,
        }
    }

    /// Returns `true` while a committed transition animates.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.moving_to.is_some()
    }

    /// Returns `true` from staging until the transition settles.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.phase().is_in_flight()
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Live drag offset in pixels.
    #[must_use]
    pub fn drag_offset(&self) -> f64 {
        self.drag.offset()
    }

    /// Returns `true` between [`Carousel::activate`] and [`Carousel::deactivate`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` once the host surface has been laid out.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns `true` while autoplay has a pending tick.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.timers.autoplay.is_some()
    }

    /// Requests waiting for the current transition to settle, oldest first.
    pub fn pending_moves(&self) -> impl ExactSizeIterator<Item = &PendingMove> {
        self.pending.iter()
    }

    /// Role of `slide`, or `None` if it should not be rendered.
    #[must_use]
    pub fn slide_role(&self, slide: usize) -> Option<SlideRole> {
        if slide >= self.slide_count() {
            None
        } else if slide == self.current_index {
            Some(SlideRole::Current)
        } else if Some(slide) == self.next_index {
            Some(SlideRole::Next)
        } else if Some(slide) == self.prev_index {
            Some(SlideRole::Prev)
        } else {
            None
        }
    }

    /// Slides that need rendering, with their roles, in index order.
    #[must_use]
    pub fn visible_slides(&self) -> SmallVec<[(usize, SlideRole); 3]> {
        let mut slides: SmallVec<[(usize, SlideRole); 3]> = SmallVec::new();
        if self.slide_count() == 0 {
            return slides;
        }
        slides.push((self.current_index, SlideRole::Current));
        if let Some(next) = self.next_index {
            slides.push((next, SlideRole::Next));
        }
        if let Some(prev) = self.prev_index {
            slides.push((prev, SlideRole::Prev));
        }
        slides.sort_unstable_by_key(|&(index, _)| index);
        slides
    }

    /// Horizontal translation of `slide` in pixels, including the drag offset.
    #[must_use]
    pub fn slide_offset(&self, slide: usize) -> Option<f64> {
        let role = self.slide_role(slide)?;
        Some(self.layout.base_offset(role) + self.drag.offset())
    }

    /// [`Carousel::slide_offset`] as a transform.
    #[must_use]
    pub fn slide_transform(&self, slide: usize) -> Option<Affine> {
        self.slide_offset(slide)
            .map(|offset| Affine::translate((offset, 0.0)))
    }

    /// Item indices shown on `slide`.
    #[must_use]
    pub fn slide_items(&self, slide: usize) -> Option<Range<usize>> {
        self.paging.slide_range(slide)
    }

    /// Whether to render previous/next arrows.
    #[must_use]
    pub fn show_arrows(&self) -> bool {
        self.config.affordances.contains(Affordances::ARROWS) && self.slide_count() > 1
    }

    /// Whether to render navigation dots.
    #[must_use]
    pub fn show_dots(&self) -> bool {
        self.config.affordances.contains(Affordances::DOTS) && self.slide_count() > 1
    }

    /// One entry per slide: its index and whether it is current.
    pub fn dots(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.slide_count()).map(|slide| (slide, slide == self.current_index))
    }
}
