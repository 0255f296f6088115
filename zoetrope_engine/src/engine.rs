// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slide controller: owns all engine state and arbitrates the four input
//! sources (auto-scroll, drag, wheel, buttons) into ordered slide cycles.

use alloc::vec::Vec;

use kurbo::Point;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use smallvec::{SmallVec, smallvec};
use zoetrope_cards::{CardBuffer, CardPair, CardSource, EmojiSource};

use crate::config::{CarouselConfig, Layout, Viewport};
use crate::flip::FlipTracker;
use crate::gesture::{DragSession, drag_commit, wheel_commit};
use crate::scheduler::AutoScroll;
use crate::types::{Direction, EngineFlags, Phase, PointerKind, SlotView};

/// The carousel engine.
///
/// All state lives here; render projectors read it through the accessor
/// surface and feed input back through the command surface. Time enters
/// exclusively as `now` arguments in milliseconds: the host calls
/// [`Self::tick`] from its event loop and the engine fires whatever
/// deadlines have elapsed. Nothing blocks and nothing runs concurrently, so
/// every mutation triggered by one slide cycle executes in the fixed phase
/// order `FlippingOut → Repositioning → FlippingIn → Idle`.
#[derive(Debug)]
pub struct CarouselEngine<S: CardSource = EmojiSource> {
    config: CarouselConfig,
    source: S,
    rng: SmallRng,
    /// Precomputed content injected at construction, if any.
    preset: Option<Vec<CardPair>>,

    viewport: Option<Viewport>,
    /// Window size `W` for the resolved viewport; 0 while placeholder.
    window: usize,
    buffer: Option<CardBuffer>,

    current: usize,
    offset: f64,
    flags: EngineFlags,
    last_direction: Direction,

    phase: Phase,
    phase_due: Option<u64>,
    pending_target: Option<isize>,
    restore_transition_at: Option<u64>,
    indicator_until: Option<u64>,

    drag: Option<DragSession>,
    auto: AutoScroll,
    flips: FlipTracker,
}

impl<S: CardSource> CarouselEngine<S> {
    /// Creates an engine in placeholder mode.
    ///
    /// `seed` fixes the content generator, making a run fully deterministic.
    /// No transitions happen until [`Self::set_viewport`] resolves.
    #[must_use]
    pub fn new(config: CarouselConfig, source: S, seed: u64) -> Self {
        debug_assert!(config.phase_ms > 0, "phase duration must be non-zero");
        debug_assert!(config.loop_sets > 0, "loop must contain at least one base set");
        Self {
            auto: AutoScroll::new(config.auto_scroll_interval_ms),
            config,
            source,
            rng: SmallRng::seed_from_u64(seed),
            preset: None,
            viewport: None,
            window: 0,
            buffer: None,
            current: 0,
            offset: 0.0,
            flags: EngineFlags::default(),
            last_direction: Direction::Advance,
            phase: Phase::Idle,
            phase_due: None,
            pending_target: None,
            restore_transition_at: None,
            indicator_until: None,
            drag: None,
            flips: FlipTracker::new(),
        }
    }

    /// Creates an engine whose buffer is seeded with `cards` instead of
    /// generated content. An empty sequence falls back to self-generation.
    #[must_use]
    pub fn with_cards(config: CarouselConfig, source: S, seed: u64, cards: Vec<CardPair>) -> Self {
        let mut engine = Self::new(config, source, seed);
        engine.preset = if cards.is_empty() { None } else { Some(cards) };
        engine
    }

    // ---- commands ----------------------------------------------------

    /// Applies the host's viewport report.
    ///
    /// While either field is `None` the engine enters (or stays in)
    /// placeholder mode: no buffer, no transitions, every command a no-op.
    /// Once both resolve, the engine resets: the buffer is regenerated, the
    /// index recenters on the middle base set, the auto-scroll suspension
    /// latch clears, and the transition is disabled for one scheduling tick
    /// so the first layout does not visibly animate into place.
    pub fn set_viewport(&mut self, is_mobile: Option<bool>, visible_count: Option<usize>, now: u64) {
        match Viewport::resolve(is_mobile, visible_count) {
            Some(viewport) => self.reset(viewport, now),
            None => {
                log::debug!("viewport unresolved; entering placeholder mode");
                self.viewport = None;
                self.buffer = None;
                self.cancel();
            }
        }
    }

    fn reset(&mut self, viewport: Viewport, now: u64) {
        let tuning = *self.config.tuning(viewport.layout);
        self.window = self.config.window_size(viewport);
        let base_len = viewport.visible_count + tuning.preload_count;
        self.buffer = Some(match &self.preset {
            Some(cards) => CardBuffer::from_cards(cards.clone()),
            None => CardBuffer::generate(base_len, &mut self.source, &mut self.rng),
        });
        let base_offset = self.window / self.config.loop_sets;
        self.current = match viewport.layout {
            Layout::Wide => base_offset - viewport.visible_count / 2,
            Layout::Narrow => base_offset,
        };
        self.offset = tuning.edge_padding - tuning.stride() * self.current as f64;
        self.flips.clear();
        self.drag = None;
        self.phase = Phase::Idle;
        self.phase_due = None;
        self.pending_target = None;
        // No snap animation on the first layout: jump, then re-enable.
        self.flags = EngineFlags::empty();
        self.restore_transition_at = Some(now + self.config.snap_ms);
        self.indicator_until = None;
        self.last_direction = Direction::Advance;
        self.auto.reset(now);
        self.viewport = Some(viewport);
        log::debug!(
            "viewport resolved ({viewport:?}): window {}, start slot {}",
            self.window,
            self.current
        );
    }

    /// Starts one slide cycle toward `target` (a raw, possibly out-of-window
    /// index). No-op while a cycle is in flight or in placeholder mode.
    pub fn slide_to(&mut self, target: isize, now: u64) {
        if self.viewport.is_none() {
            return;
        }
        if self.flags.contains(EngineFlags::ANIMATION_BUSY) {
            log::trace!("slide_to({target}) ignored: cycle in flight");
            return;
        }
        log::debug!("slide_to: {} -> {target}", self.current);
        self.flags
            .insert(EngineFlags::ANIMATION_BUSY | EngineFlags::TRANSITION_ENABLED);
        let window = self.visible_positions();
        self.flips.flip_out(window);
        self.phase = Phase::FlippingOut;
        self.pending_target = Some(target);
        self.phase_due = Some(now + self.config.phase_ms);
    }

    /// Slides one group toward lower indices.
    pub fn go_prev(&mut self, now: u64) {
        self.nav(Direction::Retreat, now);
    }

    /// Slides one group toward higher indices.
    pub fn go_next(&mut self, now: u64) {
        self.nav(Direction::Advance, now);
    }

    fn nav(&mut self, direction: Direction, now: u64) {
        let Some(viewport) = self.viewport else {
            return;
        };
        self.auto.suspend();
        self.last_direction = direction;
        self.show_indicator(now);
        let group = self.config.tuning(viewport.layout).group_size as isize;
        self.slide_to(self.grouped_target(direction, group), now);
    }

    /// Opens a drag session: auto-scroll suspends for good, the transition is
    /// disabled, and the offset follows the pointer 1:1 until release.
    pub fn on_drag_start(&mut self, pos: Point, kind: PointerKind, now: u64) {
        if self.viewport.is_none() {
            return;
        }
        self.auto.suspend();
        self.show_indicator(now);
        self.drag = Some(DragSession::new(kind, pos.x, self.offset));
        self.flags.remove(EngineFlags::TRANSITION_ENABLED);
    }

    /// Tracks pointer movement during a drag. No-op without a session.
    pub fn on_drag_move(&mut self, pos: Point) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.last_x = pos.x;
        self.offset = session.start_offset + session.delta();
    }

    /// Closes the drag session: travel beyond the layout's threshold commits
    /// one slide in the dragged direction, anything less snaps back.
    pub fn on_drag_end(&mut self, now: u64) {
        let Some(session) = self.drag.take() else {
            return;
        };
        self.flags.insert(EngineFlags::TRANSITION_ENABLED);
        let Some(viewport) = self.viewport else {
            return;
        };
        let tuning = *self.config.tuning(viewport.layout);
        match drag_commit(session.delta(), tuning.drag_threshold) {
            Some(direction) => {
                self.last_direction = direction;
                self.show_indicator(now);
                let target = self.grouped_target(direction, tuning.group_size as isize);
                self.slide_to(target, now);
            }
            None => self.offset = session.start_offset,
        }
    }

    /// Handles a horizontal wheel/trackpad delta. Ignored while a cycle is in
    /// flight; deltas at or below the layout threshold commit nothing.
    pub fn on_wheel(&mut self, delta_x: f64, now: u64) {
        let Some(viewport) = self.viewport else {
            return;
        };
        if self.flags.contains(EngineFlags::ANIMATION_BUSY) {
            return;
        }
        let tuning = *self.config.tuning(viewport.layout);
        let Some(direction) = wheel_commit(delta_x, tuning.wheel_threshold) else {
            return;
        };
        self.auto.suspend();
        self.last_direction = direction;
        self.show_indicator(now);
        let target = self.grouped_target(direction, tuning.group_size as isize);
        self.slide_to(target, now);
    }

    /// Sets the auto-scroll suspension latch, as any user gesture does.
    pub fn stop_auto_scroll(&mut self) {
        self.auto.suspend();
    }

    /// Unmount path: clears every pending deadline and any open drag session.
    ///
    /// The strip state itself (index, offset, buffer) is left intact.
    pub fn cancel(&mut self) {
        self.drag = None;
        self.phase = Phase::Idle;
        self.phase_due = None;
        self.pending_target = None;
        self.restore_transition_at = None;
        self.indicator_until = None;
        self.flags.remove(EngineFlags::ANIMATION_BUSY);
        self.flags.insert(EngineFlags::TRANSITION_ENABLED);
        self.auto.stop();
    }

    /// Advances engine time to `now`, firing every elapsed deadline in order:
    /// transition re-enable, indicator auto-hide, animation phases, then the
    /// auto-scroll cadence.
    pub fn tick(&mut self, now: u64) {
        if let Some(at) = self.restore_transition_at
            && now >= at
        {
            self.flags.insert(EngineFlags::TRANSITION_ENABLED);
            self.restore_transition_at = None;
        }
        if let Some(at) = self.indicator_until
            && now >= at
        {
            self.indicator_until = None;
        }
        loop {
            match self.phase_due {
                Some(due) if now >= due => self.step_phase(due),
                _ => break,
            }
        }
        if self.auto.poll(now)
            && let Some(viewport) = self.viewport
        {
            let group = self.config.tuning(viewport.layout).group_size as isize;
            // Skipped silently by the busy guard if a cycle is in flight.
            self.slide_to(self.current as isize + group, now);
        }
    }

    // ---- phase machine -----------------------------------------------

    fn step_phase(&mut self, due: u64) {
        match self.phase {
            Phase::Idle => {
                self.phase_due = None;
            }
            Phase::FlippingOut => {
                self.reposition(due);
                self.phase = Phase::Repositioning;
                self.phase_due = Some(due + self.config.phase_ms);
            }
            Phase::Repositioning => {
                let window = self.visible_positions();
                self.flips.begin_return(window);
                self.phase = Phase::FlippingIn;
                self.phase_due = Some(due + self.config.phase_ms);
            }
            Phase::FlippingIn => {
                let window = self.visible_positions();
                self.flips.finish_return(window);
                self.flags.remove(EngineFlags::ANIMATION_BUSY);
                self.phase = Phase::Idle;
                self.phase_due = None;
                self.pending_target = None;
                log::debug!("slide cycle settled at slot {}", self.current);
            }
        }
    }

    /// Commits the pending target: grows the buffer if the target runs into
    /// the preload headroom, wraps the raw index into `[0, W)`, and jumps
    /// without animation when the raw index left the window.
    fn reposition(&mut self, due: u64) {
        let (Some(viewport), Some(target)) = (self.viewport, self.pending_target) else {
            return;
        };
        let tuning = *self.config.tuning(viewport.layout);
        if let Some(buffer) = self.buffer.as_mut() {
            let group = tuning.group_size as isize;
            let headroom = buffer.len() as isize - tuning.preload_count as isize;
            if target + group > headroom {
                buffer.grow(tuning.group_size, &mut self.source, &mut self.rng);
            }
        }
        let window = self.window as isize;
        let wrapped = target.rem_euclid(window) as usize;
        let wrap_event = target < 0 || target >= window;
        self.current = wrapped;
        self.offset = tuning.edge_padding - tuning.stride() * wrapped as f64;
        if wrap_event {
            // Jump un-animated, then restore the transition one tick later so
            // the strip never visibly travels backward across the loop seam.
            self.flags.remove(EngineFlags::TRANSITION_ENABLED);
            self.restore_transition_at = Some(due + self.config.snap_ms);
            log::debug!("wrap event: raw target {target} jumped to slot {wrapped}");
        }
    }

    fn grouped_target(&self, direction: Direction, group: isize) -> isize {
        match direction {
            Direction::Advance => self.current as isize + group,
            Direction::Retreat => self.current as isize - group,
        }
    }

    fn show_indicator(&mut self, now: u64) {
        self.indicator_until = Some(now + self.config.indicator_ms);
    }

    // ---- read-only surface -------------------------------------------

    /// `true` until the viewport resolves; hosts render a skeleton.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.viewport.is_none()
    }

    /// The resolved viewport, if any.
    #[must_use]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Current logical position in `[0, W)`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Pixel translation of the whole strip.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether offset changes should animate.
    #[must_use]
    pub fn transition_enabled(&self) -> bool {
        self.flags.contains(EngineFlags::TRANSITION_ENABLED)
    }

    /// Whether a slide cycle is in flight (hosts disable nav controls).
    #[must_use]
    pub fn animation_busy(&self) -> bool {
        self.flags.contains(EngineFlags::ANIMATION_BUSY)
    }

    /// Current phase of the slide cycle state machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Direction of the most recent discrete command.
    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    /// Whether the transient directional indicator is showing.
    #[must_use]
    pub fn indicator_visible(&self) -> bool {
        self.indicator_until.is_some()
    }

    /// Window size `W`; 0 while placeholder.
    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window
    }

    /// Number of card pairs currently buffered; 0 while placeholder.
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.buffer.as_ref().map_or(0, CardBuffer::len)
    }

    /// Whether the auto-scroll suspension latch is set.
    #[must_use]
    pub fn auto_scroll_suspended(&self) -> bool {
        self.auto.is_suspended()
    }

    /// Kind of the active drag, if one is open (decides whether the host
    /// needs window-level move/up listeners).
    #[must_use]
    pub fn drag_pointer_kind(&self) -> Option<PointerKind> {
        self.drag.map(|session| session.kind)
    }

    /// Projects one strip slot for rendering. `None` while placeholder.
    #[must_use]
    pub fn slot(&self, position: usize) -> Option<SlotView<'_>> {
        let buffer = self.buffer.as_ref()?;
        let pair = buffer.pair_for_slot(position);
        let is_flipped = self.flips.is_flipped(position);
        Some(SlotView {
            face: if is_flipped { &pair.back } else { &pair.front },
            is_flipped,
            is_flipping_back: self.flips.is_flipping_back(position),
        })
    }

    /// The positions currently treated as visible: the `visible_count`-wide
    /// run from the current index (wide), or the 3-card window centered on it
    /// (narrow). Empty while placeholder.
    #[must_use]
    pub fn visible_positions(&self) -> SmallVec<[usize; 8]> {
        let Some(viewport) = self.viewport else {
            return SmallVec::new();
        };
        let w = self.window;
        match viewport.layout {
            Layout::Narrow => smallvec![
                (self.current + w - 1) % w,
                self.current,
                (self.current + 1) % w,
            ],
            Layout::Wide => (0..viewport.visible_count)
                .map(|i| (self.current + i) % w)
                .collect(),
        }
    }
}
