//! One-shot scroll reveal
//!
//! A [`Reveal`] wraps a block of the page. The block starts hidden (faded
//! out and shifted down by a fixed offset) and becomes visible the first
//! time enough of it enters the viewport. Once visible it stays visible:
//! later observations are ignored.
//!
//! When the host has no way to observe intersections the block is simply
//! mounted visible.

use serde::Serialize;
use std::time::Duration;

use crate::config::RevealConfig;

pub mod viewport;

/// Whether the host can report viewport intersections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObserverSupport {
    Available,
    Unavailable,
}

/// "Has this block entered the viewport at least once?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    visible: bool,
}

impl RevealState {
    /// A freshly mounted block, not yet seen
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Fallback for hosts without intersection observation
    pub fn always_visible() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed one intersection observation. Returns true only on the
    /// observation that flips the block to visible.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if self.visible || !intersects(ratio, threshold) {
            return false;
        }
        self.visible = true;
        true
    }
}

fn intersects(ratio: f64, threshold: f64) -> bool {
    ratio > 0.0 && ratio >= threshold
}

/// Rendered state of a block at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub opacity: f64,
    pub offset_px: f64,
}

impl Frame {
    pub fn hidden(offset_px: f64) -> Self {
        Self { opacity: 0.0, offset_px }
    }

    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset_px: 0.0,
        }
    }
}

/// Linear hidden-to-visible transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
    pub offset_px: f64,
}

impl Transition {
    /// Transition of a whole revealed block
    pub fn block(config: &RevealConfig) -> Self {
        Self {
            duration: Duration::from_millis(config.duration_ms),
            delay: Duration::ZERO,
            offset_px: f64::from(config.offset_px),
        }
    }

    /// Transition of the `index`th child of a staggered list
    pub fn staggered(config: &RevealConfig, index: usize) -> Self {
        Self {
            duration: Duration::from_millis(config.item_duration_ms),
            delay: Duration::from_millis(config.stagger_ms.saturating_mul(index as u64)),
            offset_px: f64::from(config.offset_px),
        }
    }

    /// Progress in [0, 1] at `elapsed` after the reveal fired
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Frame at `elapsed` since reveal; `None` means not revealed yet
    pub fn frame(&self, elapsed: Option<Duration>) -> Frame {
        match elapsed {
            None => Frame::hidden(self.offset_px),
            Some(elapsed) => {
                let p = self.progress(elapsed);
                Frame {
                    opacity: p,
                    offset_px: self.offset_px * (1.0 - p),
                }
            }
        }
    }

    /// Time from reveal until the frame is settled
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shown {
    Pending,
    At(Duration),
    FromMount,
}

/// A block wrapped in a one-shot reveal
#[derive(Debug, Clone)]
pub struct Reveal<T> {
    child: T,
    state: RevealState,
    threshold: f64,
    transition: Transition,
    shown: Shown,
}

impl<T> Reveal<T> {
    /// Mount `child` hidden, or visible when observation is unavailable
    pub fn mount(child: T, config: &RevealConfig, support: ObserverSupport) -> Self {
        let observable = config.enabled && support == ObserverSupport::Available;
        let (state, shown) = if observable {
            (RevealState::new(), Shown::Pending)
        } else {
            log::debug!("Reveal observation unavailable, mounting block visible");
            (RevealState::always_visible(), Shown::FromMount)
        };

        Self {
            child,
            state,
            threshold: config.threshold,
            transition: Transition::block(config),
            shown,
        }
    }

    pub fn child(&self) -> &T {
        &self.child
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }

    /// Report an intersection ratio observed at time `now`. Returns true
    /// when this observation revealed the block.
    pub fn observe(&mut self, ratio: f64, now: Duration) -> bool {
        let fired = self.state.observe(ratio, self.threshold);
        if fired {
            self.shown = Shown::At(now);
        }
        fired
    }

    /// Frame at time `now`
    pub fn frame(&self, now: Duration) -> Frame {
        match self.shown {
            Shown::Pending => self.transition.frame(None),
            Shown::At(at) => self.transition.frame(Some(now.saturating_sub(at))),
            Shown::FromMount => Frame::settled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RevealConfig {
        RevealConfig::default()
    }

    #[test]
    fn test_state_starts_hidden() {
        assert!(!RevealState::new().is_visible());
        assert!(RevealState::always_visible().is_visible());
    }

    #[test]
    fn test_state_fires_once() {
        let mut state = RevealState::new();
        assert!(!state.observe(0.05, 0.1));
        assert!(!state.is_visible());
        assert!(state.observe(0.1, 0.1));
        assert!(state.is_visible());
        assert!(!state.observe(1.0, 0.1));
        assert!(!state.observe(0.0, 0.1));
        assert!(state.is_visible());
    }

    #[test]
    fn test_zero_ratio_never_intersects() {
        let mut state = RevealState::new();
        assert!(!state.observe(0.0, 0.0));
        assert!(state.observe(0.01, 0.0));
    }

    #[test]
    fn test_block_transition_interpolates() {
        let t = Transition::block(&config());
        assert_eq!(t.frame(None), Frame::hidden(20.0));
        assert_eq!(t.frame(Some(Duration::ZERO)), Frame::hidden(20.0));

        let half = t.frame(Some(Duration::from_millis(300)));
        assert!((half.opacity - 0.5).abs() < 1e-9);
        assert!((half.offset_px - 10.0).abs() < 1e-9);

        assert_eq!(t.frame(Some(Duration::from_millis(600))), Frame::settled());
        assert_eq!(t.frame(Some(Duration::from_secs(10))), Frame::settled());
    }

    #[test]
    fn test_staggered_delay() {
        let t = Transition::staggered(&config(), 3);
        assert_eq!(t.delay, Duration::from_millis(300));
        assert_eq!(t.progress(Duration::from_millis(250)), 0.0);
        assert!((t.progress(Duration::from_millis(550)) - 0.5).abs() < 1e-9);
        assert_eq!(t.total(), Duration::from_millis(800));
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let cfg = RevealConfig {
            duration_ms: 0,
            ..config()
        };
        let t = Transition::block(&cfg);
        assert_eq!(t.frame(Some(Duration::ZERO)), Frame::settled());
    }

    #[test]
    fn test_reveal_records_first_intersection_time() {
        let mut block = Reveal::mount("about", &config(), ObserverSupport::Available);
        assert_eq!(block.frame(Duration::from_secs(1)), Frame::hidden(20.0));

        assert!(block.observe(0.5, Duration::from_millis(1000)));
        assert!(!block.observe(0.9, Duration::from_millis(1200)));

        let frame = block.frame(Duration::from_millis(1300));
        assert!((frame.opacity - 0.5).abs() < 1e-9);
        assert_eq!(block.frame(Duration::from_millis(1600)), Frame::settled());
        assert_eq!(*block.child(), "about");
    }

    #[test]
    fn test_unavailable_observer_is_always_visible() {
        let mut block = Reveal::mount((), &config(), ObserverSupport::Unavailable);
        assert!(block.is_visible());
        assert_eq!(block.frame(Duration::ZERO), Frame::settled());
        assert!(!block.observe(1.0, Duration::ZERO));
    }

    #[test]
    fn test_disabled_reveal_is_always_visible() {
        let cfg = RevealConfig {
            enabled: false,
            ..config()
        };
        let block = Reveal::mount((), &cfg, ObserverSupport::Available);
        assert!(block.is_visible());
    }
}
