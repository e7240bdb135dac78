// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted carousel session on a virtual clock.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_carousel_demos --example carousel_timeline`

use tracing_subscriber::EnvFilter;
use understory_carousel::{Carousel, CarouselConfig, DragEnd};
use understory_carousel_demos::SimHost;

fn describe(carousel: &Carousel) -> String {
    let slides: Vec<String> = carousel
        .visible_slides()
        .iter()
        .map(|&(slide, role)| {
            let items = carousel.slide_items(slide).unwrap_or_default();
            let offset = carousel.slide_offset(slide).unwrap_or_default();
            format!("{slide}:{role:?} items {items:?} at {offset:+.0}px")
        })
        .collect();
    format!("{:?} [{}]", carousel.phase(), slides.join(", "))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Twelve 150px items on a 500px carousel: three items per slide.
    let mut host = SimHost::new(500.0, 150.0);
    let mut carousel = Carousel::new(CarouselConfig::new(12).with_autoplay(2_000));
    carousel.activate(&mut host);
    println!("{:>5}ms  activated   {}", host.now(), describe(&carousel));

    host.advance(&mut carousel, 2_001);
    println!("{:>5}ms  autoplay    {}", host.now(), describe(&carousel));

    // Two quick dot clicks while the autoplay move is still animating.
    carousel.goto_slide(&mut host, 3);
    carousel.goto_slide(&mut host, 0);
    println!(
        "{:>5}ms  queued {}    {}",
        host.now(),
        carousel.pending_moves().len(),
        describe(&carousel)
    );
    host.advance(&mut carousel, 3_000);
    println!("{:>5}ms  drained     {}", host.now(), describe(&carousel));

    // A swipe to the left, held mid-drag, then released.
    carousel.on_hover(&mut host, true);
    carousel.on_drag_start(&mut host, 400.0);
    carousel.on_drag_move(250.0);
    println!("{:>5}ms  dragging    {}", host.now(), describe(&carousel));
    carousel.on_drag_end(&mut host, DragEnd::Release);
    host.advance(&mut carousel, 1);
    println!("{:>5}ms  swiped      {}", host.now(), describe(&carousel));
    host.advance(&mut carousel, 1_000);

    // Narrow the viewport: one item per slide from now on.
    host.resize(&mut carousel, 150.0);
    println!(
        "{:>5}ms  resized     {} slides {}",
        host.now(),
        carousel.slide_count(),
        describe(&carousel)
    );

    carousel.deactivate(&mut host);
    println!(
        "{:>5}ms  deactivated, {} timers pending",
        host.now(),
        host.pending_timers()
    );
}
