// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: timing constants, per-breakpoint tuning, and the
//! resolved viewport.

/// Breakpoint class reported by the host's viewport detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Phone-width layout: one-card groups, tight thresholds, edge padding.
    Narrow,
    /// Desktop-width layout: three-card groups.
    Wide,
}

/// Tuning constants that differ between the narrow and wide layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTuning {
    /// Positions advanced per discrete command (button, committed gesture,
    /// auto-scroll tick).
    pub group_size: usize,
    /// Off-screen positions kept populated around the visible window.
    pub preload_count: usize,
    /// Minimum drag travel, in pixels, that commits a slide.
    pub drag_threshold: f64,
    /// Minimum horizontal wheel delta that commits a slide.
    pub wheel_threshold: f64,
    /// Width of one card, in pixels.
    pub item_extent: f64,
    /// Gap between adjacent cards, in pixels.
    pub gap: f64,
    /// Leading padding applied to the resting offset, in pixels.
    pub edge_padding: f64,
}

impl LayoutTuning {
    /// Distance between the leading edges of adjacent cards.
    #[must_use]
    pub fn stride(&self) -> f64 {
        self.item_extent + self.gap
    }
}

/// Engine-wide configuration.
///
/// Defaults: 500 ms animation phases, a 20 ms snap tick for un-animated
/// jumps, a 1.5 s auto-scroll cadence, and a 700 ms directional indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Duration of each of the three animation phases, in milliseconds.
    pub phase_ms: u64,
    /// One scheduling tick: how long transitions stay disabled around an
    /// un-animated jump, in milliseconds.
    pub snap_ms: u64,
    /// Auto-scroll cadence, in milliseconds.
    pub auto_scroll_interval_ms: u64,
    /// How long the transient directional indicator stays visible, in
    /// milliseconds.
    pub indicator_ms: u64,
    /// Repeated base-sets that make up one full loop of the strip.
    pub loop_sets: usize,
    /// Tuning for [`Layout::Narrow`].
    pub narrow: LayoutTuning,
    /// Tuning for [`Layout::Wide`].
    pub wide: LayoutTuning,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            phase_ms: 500,
            snap_ms: 20,
            auto_scroll_interval_ms: 1500,
            indicator_ms: 700,
            loop_sets: 3,
            narrow: LayoutTuning {
                group_size: 1,
                preload_count: 2,
                drag_threshold: 10.0,
                wheel_threshold: 10.0,
                item_extent: 240.0,
                gap: 16.0,
                edge_padding: 16.0,
            },
            wide: LayoutTuning {
                group_size: 3,
                preload_count: 6,
                drag_threshold: 20.0,
                wheel_threshold: 20.0,
                item_extent: 300.0,
                gap: 16.0,
                edge_padding: 0.0,
            },
        }
    }
}

impl CarouselConfig {
    /// Returns the tuning block for `layout`.
    #[must_use]
    pub fn tuning(&self, layout: Layout) -> &LayoutTuning {
        match layout {
            Layout::Narrow => &self.narrow,
            Layout::Wide => &self.wide,
        }
    }

    /// Window size `W` for a resolved viewport: `loop_sets` repetitions of the
    /// visible-plus-preload base set.
    #[must_use]
    pub fn window_size(&self, viewport: Viewport) -> usize {
        self.loop_sets * (viewport.visible_count + self.tuning(viewport.layout).preload_count)
    }
}

/// A resolved viewport report.
///
/// Hosts report `is_mobile` and `visible_count` independently and either may
/// be unknown before the first layout pass; the engine stays in placeholder
/// mode until both resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Breakpoint class.
    pub layout: Layout,
    /// Cards fully visible at once.
    pub visible_count: usize,
}

impl Viewport {
    /// Combines the host's two reports, returning `None` while either is
    /// still unresolved (or a zero visible count is reported).
    #[must_use]
    pub fn resolve(is_mobile: Option<bool>, visible_count: Option<usize>) -> Option<Self> {
        match (is_mobile, visible_count) {
            (Some(is_mobile), Some(visible_count)) if visible_count > 0 => Some(Self {
                layout: if is_mobile {
                    Layout::Narrow
                } else {
                    Layout::Wide
                },
                visible_count,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CarouselConfig, Layout, Viewport};

    #[test]
    fn viewport_resolves_only_when_both_reports_arrive() {
        assert_eq!(Viewport::resolve(None, None), None);
        assert_eq!(Viewport::resolve(Some(true), None), None);
        assert_eq!(Viewport::resolve(None, Some(3)), None);
        assert_eq!(Viewport::resolve(Some(false), Some(0)), None);

        let viewport = Viewport::resolve(Some(true), Some(3)).unwrap();
        assert_eq!(viewport.layout, Layout::Narrow);
        assert_eq!(viewport.visible_count, 3);
    }

    #[test]
    fn window_is_three_base_sets() {
        let config = CarouselConfig::default();
        let wide = Viewport::resolve(Some(false), Some(3)).unwrap();
        let narrow = Viewport::resolve(Some(true), Some(3)).unwrap();
        // Wide: 3 visible + 6 preload, three sets.
        assert_eq!(config.window_size(wide), 27);
        // Narrow: 3 visible + 2 preload, three sets.
        assert_eq!(config.window_size(narrow), 15);
    }

    #[test]
    fn stride_includes_the_gap() {
        let config = CarouselConfig::default();
        assert_eq!(config.wide.stride(), 316.0);
        assert_eq!(config.narrow.stride(), 256.0);
    }
}
