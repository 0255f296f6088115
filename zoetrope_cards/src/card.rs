// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card faces and front/back pairs.

use alloc::string::String;

/// One face of a card: a symbol and its background color.
///
/// Immutable once created; the engine only ever swaps which face of a pair is
/// presented, never the face data itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardFace {
    /// The symbol shown on the face, typically a single emoji.
    pub symbol: String,
    /// Background color as a `#rrggbb` hex string.
    pub color: String,
}

impl CardFace {
    /// Creates a face from a symbol and a hex color.
    #[must_use]
    pub fn new(symbol: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            color: color.into(),
        }
    }
}

/// The unit of carousel content: a front face and the back face revealed
/// mid-transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPair {
    /// Face shown at rest.
    pub front: CardFace,
    /// Face shown while the card is flipped out.
    pub back: CardFace,
}

impl CardPair {
    /// Creates a pair from two faces.
    #[must_use]
    pub fn new(front: CardFace, back: CardFace) -> Self {
        Self { front, back }
    }
}
