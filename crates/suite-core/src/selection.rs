//! Independent enumerable UI selections: dashboard tab, active industry,
//! and billing interval.
//!
//! Each setter replaces its own field and nothing else. The industry key is
//! the only open-domain input, so it is validated against the catalog and
//! unknown keys are rejected rather than silently stored.

use strum::{Display, EnumIter};
use thiserror::Error;

use crate::catalog::INDUSTRIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum DashboardTab {
    #[default]
    Overview,
    #[strum(serialize = "Active Agents")]
    ActiveAgents,
    Workflows,
    Compliance,
    Settings,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown industry {0:?}")]
    UnknownIndustry(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    active_tab: DashboardTab,
    active_industry: String,
    annual_billing: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            active_tab: DashboardTab::default(),
            active_industry: INDUSTRIES[0].name.to_string(),
            annual_billing: true,
        }
    }
}

impl Selection {
    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    pub fn active_industry(&self) -> &str {
        &self.active_industry
    }

    pub fn annual_billing(&self) -> bool {
        self.annual_billing
    }

    pub fn set_active_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Select an industry by catalog key. Unknown keys leave the selection
    /// untouched and are reported to the caller.
    pub fn set_active_industry(&mut self, key: &str) -> Result<(), SelectionError> {
        if INDUSTRIES.iter().any(|industry| industry.name == key) {
            self.active_industry = key.to_string();
            Ok(())
        } else {
            Err(SelectionError::UnknownIndustry(key.to_string()))
        }
    }

    pub fn set_annual_billing(&mut self, annual: bool) {
        self.annual_billing = annual;
    }

    pub fn toggle_billing(&mut self) {
        self.annual_billing = !self.annual_billing;
    }

    /// Catalog key following the active one, wrapping at the end.
    pub fn next_industry(&self) -> &'static str {
        let position = INDUSTRIES
            .iter()
            .position(|industry| industry.name == self.active_industry)
            .unwrap_or(0);
        INDUSTRIES[(position + 1) % INDUSTRIES.len()].name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_startup() {
        let selection = Selection::default();
        assert_eq!(selection.active_tab(), DashboardTab::Overview);
        assert_eq!(selection.active_industry(), INDUSTRIES[0].name);
        assert!(selection.annual_billing());
    }

    #[test]
    fn valid_industry_key_is_stored() {
        let mut selection = Selection::default();
        selection.set_active_industry("Healthcare").unwrap();
        assert_eq!(selection.active_industry(), "Healthcare");
    }

    #[test]
    fn unknown_industry_key_is_rejected() {
        let mut selection = Selection::default();
        let err = selection.set_active_industry("Aerospace").unwrap_err();
        assert_eq!(err, SelectionError::UnknownIndustry("Aerospace".into()));
        // Selection is untouched on rejection.
        assert_eq!(selection.active_industry(), INDUSTRIES[0].name);
    }

    #[test]
    fn setters_do_not_touch_other_fields() {
        let mut selection = Selection::default();
        selection.set_active_tab(DashboardTab::Compliance);
        selection.toggle_billing();
        assert_eq!(selection.active_industry(), INDUSTRIES[0].name);
        assert_eq!(selection.active_tab(), DashboardTab::Compliance);
        assert!(!selection.annual_billing());
    }

    #[test]
    fn next_industry_wraps_around() {
        let mut selection = Selection::default();
        for _ in 0..INDUSTRIES.len() {
            let next = selection.next_industry().to_string();
            selection.set_active_industry(&next).unwrap();
        }
        assert_eq!(selection.active_industry(), INDUSTRIES[0].name);
    }
}
