// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions and the gesture-to-command translation.
//!
//! A [`DragSession`] lives for exactly one gesture: opened on pointer/touch
//! down, consulted on every move, consumed on release. The commit decision is
//! a pure function of the accumulated horizontal travel and the layout's
//! threshold, so it is shared by drag release and wheel handling.

use crate::types::{Direction, PointerKind};

/// One active drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// How the gesture originated (decides host listener strategy).
    pub kind: PointerKind,
    /// Horizontal pointer position at gesture start.
    pub start_x: f64,
    /// Most recent horizontal pointer position.
    pub last_x: f64,
    /// Strip offset at gesture start, restored on a sub-threshold release.
    pub start_offset: f64,
}

impl DragSession {
    /// Opens a session at pointer position `x` with the strip at `offset`.
    #[must_use]
    pub fn new(kind: PointerKind, x: f64, offset: f64) -> Self {
        Self {
            kind,
            start_x: x,
            last_x: x,
            start_offset: offset,
        }
    }

    /// Accumulated horizontal travel since the gesture started.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.last_x - self.start_x
    }
}

/// Maps a completed drag's travel to a slide direction.
///
/// Dragging right (`dx > threshold`) pulls earlier cards into view, so it
/// retreats; dragging left advances. Travel within the threshold commits
/// nothing and the strip snaps back.
#[must_use]
pub fn drag_commit(dx: f64, threshold: f64) -> Option<Direction> {
    if dx > threshold {
        Some(Direction::Retreat)
    } else if dx < -threshold {
        Some(Direction::Advance)
    } else {
        None
    }
}

/// Maps a horizontal wheel delta to a slide direction.
///
/// Wheel deltas have the opposite sign convention from drags: a positive
/// delta scrolls content leftward, which advances.
#[must_use]
pub fn wheel_commit(delta_x: f64, threshold: f64) -> Option<Direction> {
    let magnitude = if delta_x < 0.0 { -delta_x } else { delta_x };
    if magnitude <= threshold {
        return None;
    }
    Some(if delta_x > 0.0 {
        Direction::Advance
    } else {
        Direction::Retreat
    })
}
