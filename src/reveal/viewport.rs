//! Viewport intersection
//!
//! Computes how much of a laid-out block sits inside the visible window and
//! drives the reveal of every block as the window scrolls.

use serde::Serialize;
use std::time::Duration;

use super::{Frame, ObserverSupport, Reveal};
use crate::config::RevealConfig;

/// Vertical extent of a block on the page, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Smallest scroll increment a sweep will take, in pixels
pub const MIN_STEP_PX: f64 = 1.0;

/// The visible window over the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(height: f64) -> Self {
        Self { scroll_y: 0.0, height }
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_y + self.height
    }

    /// Fraction of `extent` inside the viewport, in [0, 1]. A zero-height
    /// block counts as fully visible while its edge is on screen.
    pub fn intersection_ratio(&self, extent: &Extent) -> f64 {
        if extent.height <= 0.0 {
            let on_screen = extent.top >= self.scroll_y && extent.top <= self.bottom();
            return if on_screen { 1.0 } else { 0.0 };
        }
        let overlap = extent.bottom().min(self.bottom()) - extent.top.max(self.scroll_y);
        (overlap.max(0.0) / extent.height).clamp(0.0, 1.0)
    }
}

/// A block becoming visible during a scroll
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealEvent {
    pub block: String,
    pub scroll_y: f64,
    pub ratio: f64,
    pub at_ms: u64,
}

/// Reveal-wrapped blocks laid out on a page, observed through one viewport
pub struct Scroller {
    blocks: Vec<(Extent, Reveal<String>)>,
    viewport: Viewport,
    page_height: f64,
    clock: Duration,
}

impl Scroller {
    pub fn new(
        layout: Vec<(String, Extent)>,
        viewport_height: f64,
        config: &RevealConfig,
        support: ObserverSupport,
    ) -> Self {
        let page_height = layout.iter().map(|(_, e)| e.bottom()).fold(0.0, f64::max);
        let blocks = layout
            .into_iter()
            .map(|(name, extent)| (extent, Reveal::mount(name, config, support)))
            .collect();

        Self {
            blocks,
            viewport: Viewport::new(viewport_height),
            page_height,
            clock: Duration::ZERO,
        }
    }

    /// Furthest the viewport can scroll
    pub fn max_scroll(&self) -> f64 {
        (self.page_height - self.viewport.height).max(0.0)
    }

    /// Move the viewport to `scroll_y` (clamped to the page) at time `now`
    /// and deliver one observation to every block.
    pub fn scroll_to(&mut self, scroll_y: f64, now: Duration) -> Vec<RevealEvent> {
        self.viewport.scroll_y = scroll_y.clamp(0.0, self.max_scroll());
        self.clock = self.clock.max(now);

        let mut events = Vec::new();
        for (extent, block) in &mut self.blocks {
            let ratio = self.viewport.intersection_ratio(extent);
            if block.observe(ratio, now) {
                log::debug!("Revealed '{}' at scroll {:.0}", block.child(), self.viewport.scroll_y);
                events.push(RevealEvent {
                    block: block.child().clone(),
                    scroll_y: self.viewport.scroll_y,
                    ratio,
                    at_ms: now.as_millis() as u64,
                });
            }
        }
        events
    }

    /// Scroll from the top to the bottom in `step` pixel increments, one
    /// observation round every `tick`. Steps are at least [`MIN_STEP_PX`];
    /// a non-positive or non-finite step scrolls a viewport at a time.
    pub fn sweep(&mut self, step: f64, tick: Duration) -> Vec<RevealEvent> {
        let step = if step > 0.0 && step.is_finite() {
            step
        } else {
            self.viewport.height
        };
        let step = step.max(MIN_STEP_PX);
        let mut events = Vec::new();
        let mut y = 0.0;
        let mut now = Duration::ZERO;
        loop {
            events.extend(self.scroll_to(y, now));
            if y >= self.max_scroll() {
                break;
            }
            y += step;
            now += tick;
        }
        events
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Reveal<String>> {
        self.blocks.iter().map(|(_, block)| block)
    }

    /// Latest observation time seen so far
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Every block's frame at time `now`
    pub fn frames(&self, now: Duration) -> Vec<(String, Frame)> {
        self.blocks().map(|b| (b.child().clone(), b.frame(now))).collect()
    }

    pub fn all_visible(&self) -> bool {
        self.blocks().all(|b| b.is_visible())
    }
}
