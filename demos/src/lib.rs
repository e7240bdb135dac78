// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the carousel demos.
//!
//! [`SimHost`] implements [`CarouselHost`] on top of a virtual millisecond
//! clock so the demos can replay a scripted timeline deterministically.

use understory_carousel::{
    Carousel, CarouselHost, Direction, DragEnd, Listener, Part, TimerHandle, TimerKind,
};

#[derive(Debug)]
struct Timer {
    handle: TimerHandle,
    kind: TimerKind,
    due: u64,
    every: Option<u64>,
}

/// A host with a virtual clock and fixed measurements.
#[derive(Debug)]
pub struct SimHost {
    now: u64,
    issued: u64,
    container_width: f64,
    item_width: f64,
    timers: Vec<Timer>,
    listeners: Vec<Listener>,
}

impl SimHost {
    /// Creates a ready host whose container and items have the given widths.
    pub fn new(container_width: f64, item_width: f64) -> Self {
        Self {
            now: 0,
            issued: 0,
            container_width,
            item_width,
            timers: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Changes the container width and delivers a resize if the carousel listens for one.
    pub fn resize(&mut self, carousel: &mut Carousel, container_width: f64) {
        self.container_width = container_width;
        if self.listeners.contains(&Listener::Resize) {
            carousel.on_resize(self);
        }
    }

    /// Advances the clock by `ms`, firing due timers in order.
    pub fn advance(&mut self, carousel: &mut Carousel, ms: u64) {
        let end = self.now + ms;
        loop {
            let due = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= end)
                .min_by_key(|(_, t)| (t.due, t.handle))
                .map(|(pos, _)| pos);
            let Some(pos) = due else {
                break;
            };
            let timer = &mut self.timers[pos];
            let handle = timer.handle;
            self.now = timer.due;
            tracing::trace!(at = self.now, kind = ?timer.kind, "timer fired");
            let every = timer.every;
            match every {
                Some(every) => timer.due += every,
                None => {
                    self.timers.remove(pos);
                }
            }
            carousel.on_timer(self, handle);
        }
        self.now = end;
    }

    /// Number of timers still pending.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

impl CarouselHost for SimHost {
    fn is_ready(&self) -> bool {
        true
    }

    fn measure(&mut self, part: Part) -> Option<f64> {
        Some(match part {
            Part::Container => self.container_width,
            Part::Item => self.item_width,
        })
    }

    fn set_timer(&mut self, kind: TimerKind, delay_ms: u64, repeat: bool) -> TimerHandle {
        self.issued += 1;
        let handle = TimerHandle(self.issued);
        self.timers.push(Timer {
            handle,
            kind,
            due: self.now + delay_ms,
            every: repeat.then_some(delay_ms),
        });
        handle
    }

    fn clear_timer(&mut self, handle: TimerHandle) {
        self.timers.retain(|t| t.handle != handle);
    }

    fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn unlisten(&mut self, listener: Listener) {
        self.listeners.retain(|l| *l != listener);
    }

    fn index_changed(&mut self, index: usize) {
        tracing::info!(at = self.now, index, "index changed");
    }

    fn swiped(&mut self, end: DragEnd, direction: Direction) {
        tracing::info!(at = self.now, ?end, ?direction, "swiped");
    }
}
