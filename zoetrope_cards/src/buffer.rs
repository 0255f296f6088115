// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The growable, circularly-addressed buffer of card pairs.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;
use rand::RngCore;

use crate::card::CardPair;
use crate::source::{CardSource, draw_unique_pair};

/// Ordered sequence of [`CardPair`]s backing a logically infinite strip.
///
/// The strip the engine scrolls is much longer than the buffer; strip slot
/// `i` resolves to `cards[i % len]`. The buffer only ever grows — appending
/// keeps every already-rendered slot stable, which is what makes lazy growth
/// invisible to the viewer.
#[derive(Clone, Debug)]
pub struct CardBuffer {
    cards: Vec<CardPair>,
}

impl CardBuffer {
    /// Generates `len` pairs with pairwise-distinct front symbols
    /// (best-effort, see [`draw_unique_pair`]).
    #[must_use]
    pub fn generate<S: CardSource + ?Sized>(
        len: usize,
        source: &mut S,
        rng: &mut dyn RngCore,
    ) -> Self {
        let mut buffer = Self { cards: Vec::new() };
        buffer.grow(len, source, rng);
        buffer
    }

    /// Wraps a precomputed sequence of pairs.
    ///
    /// The buffer must never be empty; callers fall back to [`Self::generate`]
    /// for empty input.
    #[must_use]
    pub fn from_cards(cards: Vec<CardPair>) -> Self {
        debug_assert!(!cards.is_empty(), "CardBuffer must not be empty");
        Self { cards }
    }

    /// Number of pairs currently in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the buffer holds no pairs yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolves a strip slot to its pair, wrapping modulo the buffer length.
    #[must_use]
    pub fn pair_for_slot(&self, slot: usize) -> &CardPair {
        debug_assert!(!self.cards.is_empty(), "slot lookup on an empty buffer");
        &self.cards[slot % self.cards.len()]
    }

    /// Front-face symbols currently in the buffer, for uniqueness checks.
    #[must_use]
    pub fn front_symbols(&self) -> HashSet<String> {
        self.cards
            .iter()
            .map(|pair| pair.front.symbol.clone())
            .collect()
    }

    /// Appends `count` new pairs, each drawn against the symbols present at
    /// the time of its draw.
    pub fn grow<S: CardSource + ?Sized>(
        &mut self,
        count: usize,
        source: &mut S,
        rng: &mut dyn RngCore,
    ) {
        let mut existing = self.front_symbols();
        for _ in 0..count {
            let pair = draw_unique_pair(&existing, source, rng);
            existing.insert(pair.front.symbol.clone());
            self.cards.push(pair);
        }
        log::trace!("card buffer grew by {count} to {}", self.cards.len());
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::CardBuffer;
    use crate::card::{CardFace, CardPair};
    use crate::source::EmojiSource;

    fn pair(front: &str, back: &str) -> CardPair {
        CardPair::new(
            CardFace::new(front, "#ffd1dc"),
            CardFace::new(back, "#22223b"),
        )
    }

    #[test]
    fn generate_produces_requested_length() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut source = EmojiSource::new();
        let buffer = CardBuffer::generate(5, &mut source, &mut rng);
        assert_eq!(buffer.len(), 5);
        assert!(!buffer.is_empty());
    }

    #[test]
    fn slot_lookup_wraps_modulo_length() {
        let buffer = CardBuffer::from_cards(vec![pair("a", "x"), pair("b", "y"), pair("c", "z")]);
        assert_eq!(buffer.pair_for_slot(0).front.symbol, "a");
        assert_eq!(buffer.pair_for_slot(4).front.symbol, "b");
        assert_eq!(buffer.pair_for_slot(29).front.symbol, "c");
    }

    #[test]
    fn grow_appends_without_disturbing_existing_slots() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut source = EmojiSource::new();
        let mut buffer = CardBuffer::generate(9, &mut source, &mut rng);
        let first = buffer.pair_for_slot(0).clone();
        let ninth_slot_before = buffer.pair_for_slot(9).front.symbol.clone();

        buffer.grow(3, &mut source, &mut rng);

        assert_eq!(buffer.len(), 12);
        assert_eq!(buffer.pair_for_slot(0), &first);
        // Slot 9 used to wrap onto pair 0; with 12 pairs it now resolves to
        // the newly appended material.
        assert_eq!(ninth_slot_before, first.front.symbol);
        assert_eq!(buffer.pair_for_slot(9).front.symbol, buffer.pair_for_slot(21).front.symbol);
    }

    #[test]
    fn generated_front_symbols_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut source = EmojiSource::new();
        let buffer = CardBuffer::generate(12, &mut source, &mut rng);
        assert_eq!(buffer.front_symbols().len(), 12);
    }
}
