//! Viewport watcher: translates scroll position and hero visibility into
//! the two presentation flags the page chrome depends on.
//!
//! `scrolled` drives navbar compaction; `hero_visible` latches true the
//! first time the hero block crosses the visibility threshold and never
//! resets, which is what gates the entrance animation to a single play.

use tracing::debug;

/// Scroll offsets beyond this many rows compact the navbar.
pub const SCROLL_THRESHOLD: u16 = 20;

/// Fraction of the hero that must be inside the viewport to latch.
pub const HERO_VISIBILITY_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
    pub hero_visible: bool,
}

/// Where the hero block sits in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroExtent {
    pub top: u16,
    pub height: u16,
}

#[derive(Debug)]
pub struct ViewportWatcher {
    state: ScrollState,
    hero: Option<HeroExtent>,
}

impl ViewportWatcher {
    /// Watch a hero block at the given extent.
    pub fn with_hero(hero: HeroExtent) -> Self {
        Self {
            state: ScrollState::default(),
            hero: Some(hero),
        }
    }

    /// Host without viewport geometry: the entrance latch fires
    /// immediately rather than stalling the presentation.
    pub fn degraded() -> Self {
        Self {
            state: ScrollState {
                scrolled: false,
                hero_visible: true,
            },
            hero: None,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Feed a scroll observation. Returns true when either flag changed,
    /// so callers can skip redundant re-composition.
    pub fn observe(&mut self, offset: u16, viewport_height: u16) -> bool {
        let mut changed = false;

        let scrolled = offset > SCROLL_THRESHOLD;
        if scrolled != self.state.scrolled {
            self.state.scrolled = scrolled;
            changed = true;
        }

        if !self.state.hero_visible {
            if let Some(hero) = self.hero {
                if hero_fraction(hero, offset, viewport_height) >= HERO_VISIBILITY_RATIO {
                    self.state.hero_visible = true;
                    changed = true;
                    debug!(offset, "hero entered viewport");
                }
            }
        }

        changed
    }

    /// Stop observing the hero block. Idempotent; the latched state is
    /// kept as-is.
    pub fn release_hero(&mut self) {
        self.hero = None;
    }
}

/// Visible fraction of `hero` for a viewport spanning
/// `[offset, offset + viewport_height)`. A zero-height hero counts as
/// absent, not as an error.
fn hero_fraction(hero: HeroExtent, offset: u16, viewport_height: u16) -> f64 {
    if hero.height == 0 {
        return 0.0;
    }
    let view_top = u32::from(offset);
    let view_bottom = view_top + u32::from(viewport_height);
    let hero_top = u32::from(hero.top);
    let hero_bottom = hero_top + u32::from(hero.height);

    let overlap = hero_bottom.min(view_bottom).saturating_sub(hero_top.max(view_top));
    f64::from(overlap) / f64::from(u32::from(hero.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: HeroExtent = HeroExtent { top: 0, height: 20 };

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut watcher = ViewportWatcher::with_hero(HERO);
        watcher.observe(SCROLL_THRESHOLD, 40);
        assert!(!watcher.state().scrolled);
        watcher.observe(SCROLL_THRESHOLD + 1, 40);
        assert!(watcher.state().scrolled);
    }

    #[test]
    fn redundant_observations_report_no_change() {
        let mut watcher = ViewportWatcher::with_hero(HERO);
        assert!(watcher.observe(0, 40)); // hero latch fires
        assert!(!watcher.observe(0, 40));
        assert!(!watcher.observe(5, 40)); // still below threshold, latch already set
    }

    #[test]
    fn hero_latch_is_monotonic() {
        let mut watcher = ViewportWatcher::with_hero(HERO);
        watcher.observe(0, 40);
        assert!(watcher.state().hero_visible);

        // Scrolling the hero fully out of view does not reset the latch.
        watcher.observe(500, 40);
        assert!(watcher.state().hero_visible);
    }

    #[test]
    fn latch_requires_ten_percent_visibility() {
        // Hero spans rows 100..120; a viewport ending at row 101 shows one
        // of its 20 rows (5%), one row more reaches the 10% threshold.
        let mut watcher = ViewportWatcher::with_hero(HeroExtent { top: 100, height: 20 });
        watcher.observe(0, 101); // 1 of 20 rows visible
        assert!(!watcher.state().hero_visible);
        watcher.observe(0, 102); // 2 of 20 rows = 10%
        assert!(watcher.state().hero_visible);
    }

    #[test]
    fn degraded_host_shows_hero_immediately() {
        let watcher = ViewportWatcher::degraded();
        assert!(watcher.state().hero_visible);
    }

    #[test]
    fn zero_height_hero_is_ignored() {
        let mut watcher = ViewportWatcher::with_hero(HeroExtent { top: 0, height: 0 });
        watcher.observe(0, 40);
        assert!(!watcher.state().hero_visible);
    }

    #[test]
    fn release_is_idempotent_and_stops_observation() {
        let mut watcher = ViewportWatcher::with_hero(HeroExtent { top: 100, height: 20 });
        watcher.release_hero();
        watcher.release_hero();
        watcher.observe(100, 40);
        assert!(!watcher.state().hero_visible);
    }
}
