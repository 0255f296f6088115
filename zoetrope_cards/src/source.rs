// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Symbol sources and the shared card-pair generation routine.

use alloc::string::String;

use hashbrown::HashSet;
use rand::{Rng, RngCore};

use crate::card::{CardFace, CardPair};
use crate::palette;

/// Maximum redraws of a single symbol before accepting a best-effort result.
pub const SYMBOL_RETRIES: usize = 20;

/// Maximum redraws of a front-face symbol before accepting a duplicate.
pub const PAIR_RETRIES: usize = 50;

/// A supplier of card symbols.
///
/// Implementations may be stateful (cycling fixtures in tests, exhausting a
/// curated deck) but must always produce *something*: symbol generation is
/// policy-bounded, never failing.
pub trait CardSource {
    /// Draws one symbol.
    fn draw_symbol(&mut self, rng: &mut dyn RngCore) -> String;
}

/// Emoji Unicode blocks the default source draws from.
///
/// Both bounds are inclusive. The blocks contain unassigned code points; the
/// retry loop in [`EmojiSource`] papers over draws the filter rejects.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF),
    (0x1F600, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F700, 0x1F77F),
    (0x1F780, 0x1F7FF),
    (0x1F800, 0x1F8FF),
    (0x1F900, 0x1F9FF),
    (0x1FA00, 0x1FAFF),
    (0x2600, 0x26FF),
    (0x2700, 0x27BF),
];

/// Default [`CardSource`]: a random scalar from [`EMOJI_RANGES`].
///
/// The validity filter stands in for the external emoji-name dictionary: a
/// host that can resolve names installs a filter accepting only nameable
/// symbols. Draws the filter rejects are retried up to [`SYMBOL_RETRIES`]
/// times; after that the last candidate is accepted as-is.
#[derive(Clone, Debug)]
pub struct EmojiSource {
    ranges: &'static [(u32, u32)],
    filter: fn(char) -> bool,
}

impl EmojiSource {
    /// Creates a source over the default ranges, accepting every scalar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ranges: EMOJI_RANGES,
            filter: |_| true,
        }
    }

    /// Creates a source whose draws must satisfy `filter`, best-effort.
    #[must_use]
    pub fn with_filter(filter: fn(char) -> bool) -> Self {
        Self {
            ranges: EMOJI_RANGES,
            filter,
        }
    }
}

impl Default for EmojiSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for EmojiSource {
    fn draw_symbol(&mut self, rng: &mut dyn RngCore) -> String {
        let mut candidate = None;
        for _ in 0..=SYMBOL_RETRIES {
            let (lo, hi) = self.ranges[rng.random_range(0..self.ranges.len())];
            let Some(c) = char::from_u32(rng.random_range(lo..=hi)) else {
                continue;
            };
            if (self.filter)(c) {
                return String::from(c);
            }
            candidate = Some(c);
        }
        // Retries exhausted: accept the last draw rather than looping forever.
        String::from(candidate.unwrap_or('\u{25A1}'))
    }
}

/// Draws one card pair whose front symbol is, best-effort, not already on the
/// strip.
///
/// The front symbol is redrawn up to [`PAIR_RETRIES`] times while it collides
/// with `existing`; the next draw after that is accepted even if it is a
/// duplicate. The back symbol is drawn freely. Front colors come from the
/// pastel palette, back colors from the dark palette.
pub fn draw_unique_pair<S: CardSource + ?Sized>(
    existing: &HashSet<String>,
    source: &mut S,
    rng: &mut dyn RngCore,
) -> CardPair {
    let mut front_symbol = source.draw_symbol(rng);
    let mut tries = 0;
    while existing.contains(&front_symbol) && tries < PAIR_RETRIES {
        front_symbol = source.draw_symbol(rng);
        tries += 1;
    }
    let back_symbol = source.draw_symbol(rng);
    CardPair::new(
        CardFace::new(front_symbol, pick_color(palette::PASTEL, rng)),
        CardFace::new(back_symbol, pick_color(palette::DARK, rng)),
    )
}

fn pick_color(colors: &'static [&'static str], rng: &mut dyn RngCore) -> &'static str {
    colors[rng.random_range(0..colors.len())]
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use hashbrown::HashSet;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::{CardSource, EMOJI_RANGES, EmojiSource, draw_unique_pair};

    /// Source that only ever produces one symbol.
    struct Constant(&'static str);

    impl CardSource for Constant {
        fn draw_symbol(&mut self, _rng: &mut dyn rand::RngCore) -> String {
            self.0.to_string()
        }
    }

    fn in_ranges(c: char) -> bool {
        let cp = c as u32;
        EMOJI_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
    }

    #[test]
    fn emoji_source_draws_from_its_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut source = EmojiSource::new();
        for _ in 0..100 {
            let symbol = source.draw_symbol(&mut rng);
            let c = symbol.chars().next().expect("symbol is non-empty");
            assert!(in_ranges(c), "symbol {c:?} outside the emoji ranges");
            assert_eq!(symbol.chars().count(), 1);
        }
    }

    #[test]
    fn rejecting_filter_still_yields_a_symbol() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut source = EmojiSource::with_filter(|_| false);
        // Best-effort after retry exhaustion; never empty, never panics.
        let symbol = source.draw_symbol(&mut rng);
        assert!(!symbol.is_empty());
    }

    #[test]
    fn selective_filter_is_honored_when_satisfiable() {
        let mut rng = SmallRng::seed_from_u64(3);
        // Only accept the Miscellaneous Symbols block.
        let mut source = EmojiSource::with_filter(|c| (c as u32) < 0x1F000);
        let mut hits = 0;
        for _ in 0..50 {
            let symbol = source.draw_symbol(&mut rng);
            let c = symbol.chars().next().unwrap();
            if (c as u32) < 0x1F000 {
                hits += 1;
            }
        }
        // With 20 retries per draw, rejected draws should be rare.
        assert!(hits >= 45, "only {hits}/50 draws satisfied the filter");
    }

    #[test]
    fn unique_pair_avoids_existing_front_symbols() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut source = EmojiSource::new();
        let mut existing = HashSet::new();
        for _ in 0..30 {
            let pair = draw_unique_pair(&existing, &mut source, &mut rng);
            assert!(
                !existing.contains(&pair.front.symbol),
                "front symbol duplicated while the pool was far from exhausted"
            );
            existing.insert(pair.front.symbol);
        }
    }

    #[test]
    fn unique_pair_accepts_duplicate_after_bounded_retries() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut source = Constant("\u{2600}");
        let mut existing = HashSet::new();
        existing.insert("\u{2600}".to_string());
        // A degenerate source can never satisfy uniqueness; the pair is
        // produced anyway instead of spinning.
        let pair = draw_unique_pair(&existing, &mut source, &mut rng);
        assert_eq!(pair.front.symbol, "\u{2600}");
    }

    #[test]
    fn pair_colors_come_from_the_palettes() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut source = EmojiSource::new();
        let pair = draw_unique_pair(&HashSet::new(), &mut source, &mut rng);
        assert!(crate::palette::PASTEL.contains(&pair.front.color.as_str()));
        assert!(crate::palette::DARK.contains(&pair.back.color.as_str()));
    }
}
