// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoetrope Engine: a deterministic, renderer-agnostic flip-card carousel.
//!
//! ## Overview
//!
//! This crate is the state machine behind an infinitely looping, draggable
//! card strip. It owns the logical position, the pixel offset, the flip
//! bookkeeping, and the timing of every animation phase, but draws nothing:
//! a host feeds it input events and a clock, then projects its read-only
//! surface into whatever it renders with.
//!
//! The strip is a fixed window of `W` slots built from several copies of a
//! base card set, served modulo the content buffer's length by
//! [`zoetrope_cards::CardBuffer`]. Every discrete move is one *slide cycle*
//! with three strictly ordered phases:
//!
//! 1. [`FlippingOut`](Phase::FlippingOut): the visible cards turn to their
//!    back faces.
//! 2. [`Repositioning`](Phase::Repositioning): the strip moves to the target
//!    index. Targets outside `[0, W)` wrap here with an un-animated jump, so
//!    the loop never visibly rewinds. The buffer also grows here when the
//!    target runs into the preload headroom.
//! 3. [`FlippingIn`](Phase::FlippingIn): the cards now in view turn back to
//!    their front faces, and the engine goes idle.
//!
//! While a cycle is in flight every further command is rejected, not queued.
//!
//! ## Time
//!
//! The engine never sleeps and owns no timers. Hosts pass `now` (milliseconds,
//! any monotonic origin) into each command and call
//! [`tick`](CarouselEngine::tick) from their event loop; elapsed deadlines
//! (animation phases, the auto-scroll cadence, the transition re-enable after
//! a snap jump, the directional-indicator timeout) all fire inside `tick`.
//! This makes tests, and entire runs, reproducible from a seed and a script
//! of timestamped inputs.
//!
//! ## Input sources
//!
//! Four sources feed the same slide command: the auto-scroll cadence, drag
//! gestures (touch or pointer, with a per-layout commit threshold), horizontal
//! wheel deltas, and prev/next buttons. The first user gesture of any kind
//! suspends auto-scroll for good; only a viewport reset re-arms it.
//!
//! ## Minimal example
//!
//! ```rust
//! use zoetrope_cards::EmojiSource;
//! use zoetrope_engine::{CarouselConfig, CarouselEngine};
//!
//! let mut engine = CarouselEngine::new(CarouselConfig::default(), EmojiSource::new(), 7);
//!
//! // Nothing happens until the host reports its viewport.
//! assert!(engine.is_placeholder());
//! engine.set_viewport(Some(false), Some(3), 0);
//! assert_eq!(engine.current_index(), 8);
//!
//! // One slide cycle: three 500 ms phases driven by the host clock.
//! engine.stop_auto_scroll();
//! engine.go_next(100);
//! assert!(engine.animation_busy());
//! engine.tick(600);
//! assert_eq!(engine.current_index(), 11);
//! engine.tick(1100);
//! engine.tick(1600);
//! assert!(!engine.animation_busy());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod engine;
pub mod flip;
pub mod gesture;
pub mod scheduler;
pub mod types;

pub use config::{CarouselConfig, Layout, LayoutTuning, Viewport};
pub use engine::CarouselEngine;
pub use flip::FlipTracker;
pub use gesture::{DragSession, drag_commit, wheel_commit};
pub use scheduler::AutoScroll;
pub use types::{Direction, EngineFlags, Phase, PointerKind, SlotView};
