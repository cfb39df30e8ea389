//! View composition and intent dispatch.
//!
//! [`industry_detail`] and [`pricing_rows`] are the pure derivations: cheap
//! lookups recomputed on every read, never cached, since the catalog is
//! small and immutable. [`Dashboard`] aggregates every state store and
//! routes user intents into them, including the one documented cross-field
//! coupling: a tab, industry, or navigation choice made while the menu
//! overlay is open also closes the overlay.

use std::time::Instant;

use tracing::warn;

use crate::catalog::{Industry, INDUSTRIES, PRICING_TIERS};
use crate::overlay::{MenuOverlay, ScrollLock};
use crate::preference::PreferenceStore;
use crate::random::RandomSource;
use crate::selection::{DashboardTab, Selection, SelectionError};
use crate::telemetry::{Agent, TelemetrySimulator, TickHandle, DEFAULT_TICK_INTERVAL};
use crate::theme::ThemeVariant;
use crate::viewport::{ScrollState, ViewportWatcher};

/// Resolve the detail panel for an industry key, falling back to the first
/// catalog entry when the key is unknown. The setter already validates
/// keys, so the fallback only matters if the catalog and a stored key ever
/// drift apart.
pub fn industry_detail(key: &str) -> &'static Industry {
    INDUSTRIES
        .iter()
        .find(|industry| industry.name == key)
        .unwrap_or(&INDUSTRIES[0])
}

/// One pricing card, priced for the chosen billing interval.
#[derive(Debug, Clone, Copy)]
pub struct PricingRow {
    pub name: &'static str,
    /// `None` renders as "Custom".
    pub price: Option<u32>,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub fn pricing_rows(annual: bool) -> Vec<PricingRow> {
    PRICING_TIERS
        .iter()
        .map(|tier| PricingRow {
            name: tier.name,
            price: if annual { tier.annual } else { tier.monthly },
            features: tier.features,
            highlight: tier.highlight,
        })
        .collect()
}

/// Snapshot of everything the presentation layer renders from.
pub struct ViewState<'a> {
    pub theme: ThemeVariant,
    pub scroll: ScrollState,
    pub menu_open: bool,
    pub active_tab: DashboardTab,
    pub agents: &'a [Agent],
    pub industry: &'static Industry,
    pub annual_billing: bool,
    pub pricing: Vec<PricingRow>,
}

/// Owner of all state slices and the dispatch surface the shell talks to.
pub struct Dashboard {
    preference: PreferenceStore,
    viewport: ViewportWatcher,
    overlay: MenuOverlay,
    selection: Selection,
    telemetry: TelemetrySimulator,
    tick_handle: Option<TickHandle>,
}

impl Dashboard {
    pub fn new(
        preference: PreferenceStore,
        viewport: ViewportWatcher,
        lock: Box<dyn ScrollLock>,
    ) -> Self {
        Self {
            preference,
            viewport,
            overlay: MenuOverlay::new(lock),
            selection: Selection::default(),
            telemetry: TelemetrySimulator::seeded(),
            tick_handle: None,
        }
    }

    // --- telemetry lifecycle -------------------------------------------

    /// Start (or restart) the live-activity feed.
    pub fn start_telemetry(&mut self, now: Instant) {
        self.tick_handle = Some(self.telemetry.start(DEFAULT_TICK_INTERVAL, now));
    }

    /// Stop the feed; safe when it was never started.
    pub fn stop_telemetry(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.telemetry.stop(handle);
        }
    }

    /// Advance the simulator clock; returns the number of ticks applied.
    pub fn poll_telemetry(&mut self, now: Instant, rng: &mut dyn RandomSource) -> u32 {
        self.telemetry.poll(now, rng)
    }

    // --- user intents ---------------------------------------------------

    /// Flip dark/light. Persists before the new variant is reported.
    pub fn toggle_theme(&mut self) -> ThemeVariant {
        self.preference.toggle()
    }

    /// Feed the current scroll position; returns true when a presentation
    /// flag changed.
    pub fn observe_scroll(&mut self, offset: u16, viewport_height: u16) -> bool {
        self.viewport.observe(offset, viewport_height)
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.selection.set_active_tab(tab);
        self.overlay.close();
    }

    pub fn select_industry(&mut self, key: &str) -> Result<(), SelectionError> {
        self.selection.set_active_industry(key)?;
        self.overlay.close();
        Ok(())
    }

    /// Advance to the next catalog industry.
    pub fn cycle_industry(&mut self) {
        let next = self.selection.next_industry();
        if let Err(err) = self.select_industry(next) {
            warn!(%err, "industry cycle produced a non-catalog key");
        }
    }

    pub fn set_annual_billing(&mut self, annual: bool) {
        self.selection.set_annual_billing(annual);
    }

    pub fn toggle_billing(&mut self) {
        self.selection.toggle_billing();
    }

    pub fn toggle_menu(&mut self) {
        self.overlay.toggle();
    }

    pub fn close_menu(&mut self) {
        self.overlay.close();
    }

    /// A navigation anchor was chosen; from inside the overlay this also
    /// dismisses it.
    pub fn nav_chosen(&mut self) {
        self.overlay.close();
    }

    pub fn toggle_agent(&mut self, id: u32) {
        self.telemetry.toggle_status(id);
    }

    /// Tear down every owned subscription; used on shutdown and safe to
    /// repeat.
    pub fn teardown(&mut self) {
        self.stop_telemetry();
        self.viewport.release_hero();
        self.overlay.close();
    }

    // --- read side ------------------------------------------------------

    pub fn theme_variant(&self) -> ThemeVariant {
        self.preference.variant()
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.viewport.state()
    }

    pub fn menu_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn agents(&self) -> &[Agent] {
        self.telemetry.agents()
    }

    /// Compose the full snapshot handed to the presentation layer.
    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            theme: self.preference.variant(),
            scroll: self.viewport.state(),
            menu_open: self.overlay.is_open(),
            active_tab: self.selection.active_tab(),
            agents: self.telemetry.agents(),
            industry: industry_detail(self.selection.active_industry()),
            annual_billing: self.selection.annual_billing(),
            pricing: pricing_rows(self.selection.annual_billing()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::FlagLock;
    use crate::viewport::ViewportWatcher;

    fn test_dashboard() -> (Dashboard, FlagLock) {
        let flag = FlagLock::new();
        let path = std::env::temp_dir().join(format!(
            "commandsuite-compose-{}.toml",
            std::process::id()
        ));
        let dashboard = Dashboard::new(
            PreferenceStore::load(path),
            ViewportWatcher::degraded(),
            Box::new(flag.handle()),
        );
        (dashboard, flag)
    }

    #[test]
    fn industry_detail_resolves_known_keys() {
        for industry in INDUSTRIES {
            assert_eq!(industry_detail(industry.name).title, industry.title);
        }
    }

    #[test]
    fn industry_detail_falls_back_to_first_entry() {
        assert_eq!(industry_detail("Aerospace"), &INDUSTRIES[0]);
        assert_eq!(industry_detail(""), &INDUSTRIES[0]);
    }

    #[test]
    fn pricing_follows_billing_interval() {
        let annual = pricing_rows(true);
        let monthly = pricing_rows(false);
        assert_eq!(annual[0].price, Some(399));
        assert_eq!(monthly[0].price, Some(499));
        // The custom tier is interval-independent.
        assert_eq!(annual[2].price, None);
        assert_eq!(monthly[2].price, None);
    }

    #[test]
    fn tab_choice_inside_overlay_closes_it() {
        let (mut dashboard, flag) = test_dashboard();
        dashboard.toggle_menu();
        assert!(flag.is_locked());

        dashboard.select_tab(DashboardTab::Workflows);
        assert!(!dashboard.menu_open());
        assert!(!flag.is_locked());
        assert_eq!(dashboard.selection().active_tab(), DashboardTab::Workflows);
    }

    #[test]
    fn industry_choice_inside_overlay_closes_it() {
        let (mut dashboard, _flag) = test_dashboard();
        dashboard.toggle_menu();
        dashboard.select_industry("Logistics").unwrap();
        assert!(!dashboard.menu_open());
    }

    #[test]
    fn rejected_industry_leaves_overlay_open() {
        let (mut dashboard, _flag) = test_dashboard();
        dashboard.toggle_menu();
        assert!(dashboard.select_industry("Aerospace").is_err());
        assert!(dashboard.menu_open());
    }

    #[test]
    fn nav_choice_closes_overlay() {
        let (mut dashboard, flag) = test_dashboard();
        dashboard.toggle_menu();
        dashboard.nav_chosen();
        assert!(!dashboard.menu_open());
        assert!(!flag.is_locked());
    }

    #[test]
    fn view_reflects_every_slice() {
        let (mut dashboard, _flag) = test_dashboard();
        dashboard.select_tab(DashboardTab::ActiveAgents);
        dashboard.select_industry("E-Commerce").unwrap();
        dashboard.set_annual_billing(false);

        let view = dashboard.view();
        assert_eq!(view.active_tab, DashboardTab::ActiveAgents);
        assert_eq!(view.industry.name, "E-Commerce");
        assert!(!view.annual_billing);
        assert_eq!(view.pricing[1].price, Some(1299));
        assert_eq!(view.agents.len(), 4);
    }

    #[test]
    fn teardown_is_idempotent() {
        let (mut dashboard, flag) = test_dashboard();
        dashboard.start_telemetry(Instant::now());
        dashboard.toggle_menu();

        dashboard.teardown();
        dashboard.teardown();
        assert!(!flag.is_locked());

        let mut rng = crate::random::FixedDraws::new([0.999]);
        let later = Instant::now() + std::time::Duration::from_secs(60);
        assert_eq!(dashboard.poll_telemetry(later, &mut rng), 0);
    }
}
