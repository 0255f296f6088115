// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for slide positions that are mid-flip.
//!
//! Pure value type: the tracker owns no timers and makes no decisions. The
//! slide controller moves windows of positions through it as phases fire.

use hashbrown::HashSet;

/// Tracks which strip positions show their back face and which are mid-return
/// to the front face.
#[derive(Clone, Debug, Default)]
pub struct FlipTracker {
    flipped: HashSet<usize>,
    flipping_back: HashSet<usize>,
}

impl FlipTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `positions` as showing their back face.
    pub fn flip_out(&mut self, positions: impl IntoIterator<Item = usize>) {
        self.flipped.extend(positions);
    }

    /// Starts the return animation for `positions`: they leave the flipped
    /// set and enter the flipping-back set.
    pub fn begin_return(&mut self, positions: impl IntoIterator<Item = usize>) {
        for position in positions {
            self.flipped.remove(&position);
            self.flipping_back.insert(position);
        }
    }

    /// Ends the return animation for `positions`.
    pub fn finish_return(&mut self, positions: impl IntoIterator<Item = usize>) {
        for position in positions {
            self.flipping_back.remove(&position);
        }
    }

    /// Whether `position` currently shows its back face.
    #[must_use]
    pub fn is_flipped(&self, position: usize) -> bool {
        self.flipped.contains(&position)
    }

    /// Whether `position` is mid-return to its front face.
    #[must_use]
    pub fn is_flipping_back(&self, position: usize) -> bool {
        self.flipping_back.contains(&position)
    }

    /// Forgets all tracked positions.
    pub fn clear(&mut self) {
        self.flipped.clear();
        self.flipping_back.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::FlipTracker;

    #[test]
    fn flip_out_then_return_walks_both_sets() {
        let mut tracker = FlipTracker::new();
        tracker.flip_out([8, 9, 10]);
        assert!(tracker.is_flipped(9));
        assert!(!tracker.is_flipping_back(9));

        tracker.begin_return([9, 10, 11]);
        assert!(tracker.is_flipped(8));
        assert!(!tracker.is_flipped(9));
        assert!(tracker.is_flipping_back(9));
        assert!(tracker.is_flipping_back(11));

        tracker.finish_return([9, 10, 11]);
        assert!(!tracker.is_flipping_back(9));
        assert!(!tracker.is_flipping_back(11));
        // Positions flipped out but never returned stay flipped.
        assert!(tracker.is_flipped(8));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut tracker = FlipTracker::new();
        tracker.flip_out([1, 2]);
        tracker.begin_return([2, 3]);
        tracker.clear();
        for position in 0..4 {
            assert!(!tracker.is_flipped(position));
            assert!(!tracker.is_flipping_back(position));
        }
    }
}
