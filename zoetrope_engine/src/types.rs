// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types shared across the engine: flags, directions, phases, and the
//! per-slot projection.

use zoetrope_cards::CardFace;

bitflags::bitflags! {
    /// Boolean engine state consumed by render projectors.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct EngineFlags: u8 {
        /// Animated interpolation is active. Cleared during drags, resets,
        /// and wrap jumps so the strip snaps instead of visibly traveling.
        const TRANSITION_ENABLED = 0b0000_0001;
        /// A slide cycle is in flight; further commands are rejected.
        const ANIMATION_BUSY     = 0b0000_0010;
    }
}

impl Default for EngineFlags {
    fn default() -> Self {
        Self::TRANSITION_ENABLED
    }
}

/// Direction of the most recent discrete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices (next).
    Advance,
    /// Toward lower indices (previous).
    Retreat,
}

/// How a drag gesture originated.
///
/// Hosts register window-level move/up listeners only for [`Self::Pointer`]
/// drags, so a cursor leaving the component's bounds does not strand the
/// session; touch events keep firing on the original element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Touch contact.
    Touch,
    /// Mouse or pen pointer.
    Pointer,
}

/// The strictly sequential states of one slide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No cycle in flight.
    Idle,
    /// Visible cards are turning to their back faces.
    FlippingOut,
    /// The strip has moved to the target position.
    Repositioning,
    /// The newly visible cards are turning back to their front faces.
    FlippingIn,
}

/// Read-only projection of one strip slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotView<'a> {
    /// The face to present, already resolved to front or back.
    pub face: &'a CardFace,
    /// Slot currently shows its back face.
    pub is_flipped: bool,
    /// Slot is mid-return to its front face.
    pub is_flipping_back: bool,
}

#[cfg(test)]
mod tests {
    use super::EngineFlags;

    #[test]
    fn default_flags_animate_and_are_not_busy() {
        let flags = EngineFlags::default();
        assert!(flags.contains(EngineFlags::TRANSITION_ENABLED));
        assert!(!flags.contains(EngineFlags::ANIMATION_BUSY));
    }
}
