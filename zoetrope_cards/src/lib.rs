// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoetrope Cards: content model for the flip-card carousel.
//!
//! This crate provides the data the carousel engine scrolls through, without
//! knowing anything about indices, offsets, or animation. It is intended to be
//! shared between the engine and whatever host renders the strip.
//!
//! The core concepts are:
//!
//! - [`CardFace`] / [`CardPair`]: an immutable symbol+color face and the
//!   front/back pair that makes up one card.
//! - [`CardSource`]: a trait describing where symbols come from. The default
//!   [`EmojiSource`] draws random scalars from a set of emoji Unicode ranges,
//!   with a bounded retry loop and a pluggable validity filter standing in for
//!   an external emoji-name dictionary.
//! - [`draw_unique_pair`]: the single generation routine all call sites share.
//!   It retries up to [`PAIR_RETRIES`] times to avoid duplicating a front-face
//!   symbol already on the strip, then accepts a duplicate rather than looping
//!   forever.
//! - [`CardBuffer`]: an ordered, growable, never-empty sequence of pairs.
//!   Strip slots index into it modulo its length, so a short buffer serves an
//!   arbitrarily long strip and can be extended lazily while scrolling.
//! - [`palette`]: the pastel/dark color lists plus the complementary-color and
//!   snake-case-to-title-case presentation helpers.
//!
//! All randomness flows through a caller-supplied [`rand::RngCore`], so hosts
//! and tests can seed a small deterministic generator.
//!
//! ## Minimal example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use zoetrope_cards::{CardBuffer, EmojiSource};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let mut source = EmojiSource::new();
//!
//! // Nine pairs: a three-visible, six-preload desktop base set.
//! let mut buffer = CardBuffer::generate(9, &mut source, &mut rng);
//! assert_eq!(buffer.len(), 9);
//!
//! // Slot 10 of the strip wraps back onto the second pair.
//! let pair = buffer.pair_for_slot(10);
//! assert_eq!(pair.front.symbol, buffer.pair_for_slot(1).front.symbol);
//!
//! // Scrolling near the end of the buffer appends three more pairs.
//! buffer.grow(3, &mut source, &mut rng);
//! assert_eq!(buffer.len(), 12);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod buffer;
mod card;
pub mod palette;
mod source;

pub use buffer::CardBuffer;
pub use card::{CardFace, CardPair};
pub use source::{
    CardSource, EMOJI_RANGES, EmojiSource, PAIR_RETRIES, SYMBOL_RETRIES, draw_unique_pair,
};
