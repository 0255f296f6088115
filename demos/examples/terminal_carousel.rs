// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted carousel run on a simulated clock.
//!
//! This example drives the engine the way a host event loop would: advance a
//! millisecond clock, call `tick`, inject gestures at scripted times, and
//! print the projection after each step. The whole run is deterministic.
//!
//! Run:
//! - `cargo run -p zoetrope_demos --example terminal_carousel`

use kurbo::Point;
use zoetrope_cards::EmojiSource;
use zoetrope_engine::{CarouselConfig, CarouselEngine, PointerKind};

fn print_strip(engine: &CarouselEngine, now: u64) {
    let mut line = String::new();
    for position in engine.visible_positions() {
        let slot = engine.slot(position).unwrap();
        let mark = if slot.is_flipped {
            '~'
        } else if slot.is_flipping_back {
            '<'
        } else {
            ' '
        };
        line.push_str(&format!("[{mark}{} #{position}]", slot.face.symbol));
    }
    println!(
        "t={now:>5}  idx={:>2}  offset={:>8.1}  {line}",
        engine.current_index(),
        engine.offset()
    );
}

fn main() {
    let mut engine = CarouselEngine::new(CarouselConfig::default(), EmojiSource::new(), 42);

    // The host's first layout pass reports a desktop viewport, three visible.
    engine.set_viewport(Some(false), Some(3), 0);
    println!(
        "window of {} slots over a {}-pair buffer",
        engine.window_size(),
        engine.buffer_len()
    );

    // Let auto-scroll drive the first cycles.
    let mut now = 0;
    while now <= 3_000 {
        engine.tick(now);
        print_strip(&engine, now);
        now += 500;
    }

    // A gesture is about to arrive; automation stays off from here on.
    engine.stop_auto_scroll();
    while now <= 4_500 {
        engine.tick(now);
        print_strip(&engine, now);
        now += 500;
    }

    // Drag right past the commit threshold: earlier cards come back into view.
    engine.on_drag_start(Point::new(400.0, 0.0), PointerKind::Pointer, now);
    engine.on_drag_move(Point::new(460.0, 0.0));
    engine.on_drag_end(now);
    println!("drag committed: {:?}", engine.last_direction());
    for step in 1..=4 {
        let t = now + step * 500;
        engine.tick(t);
        print_strip(&engine, t);
    }

    println!(
        "auto-scroll suspended: {} (a viewport reset re-arms it)",
        engine.auto_scroll_suspended()
    );
}
