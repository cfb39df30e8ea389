//! Persisted display preference.
//!
//! A single key (`theme = "dark" | "light"`) stored as TOML. Reads go
//! through figment and degrade to the light default on any fault; writes
//! happen before the in-memory value changes so persisted and applied state
//! never disagree, even for one frame.

use std::fs;
use std::path::PathBuf;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::theme::ThemeVariant;

const DEFAULT_PREFERENCE_FILE: &str = "theme.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Preference {
    pub theme: ThemeVariant,
}

#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: Preference,
}

impl PreferenceStore {
    /// Load from the conventional location next to the binary.
    pub fn load_default() -> Self {
        Self::load(DEFAULT_PREFERENCE_FILE)
    }

    /// Load a prior preference from `path`. Missing or corrupt content
    /// yields the default; loading never fails the caller.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = Figment::new()
            .merge(Toml::file(&path))
            .extract()
            .unwrap_or_else(|err| {
                debug!(path = %path.display(), %err, "no usable preference, using default");
                Preference::default()
            });
        Self { path, current }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.current.theme
    }

    pub fn is_dark(&self) -> bool {
        self.current.theme.is_dark()
    }

    /// Switch to `variant`. Persists first, then applies; setting the
    /// current value again is a no-op.
    pub fn set(&mut self, variant: ThemeVariant) {
        if variant == self.current.theme {
            return;
        }
        let next = Preference { theme: variant };
        self.persist(next);
        self.current = next;
        debug!(?variant, "display preference changed");
    }

    /// Flip dark/light, returning the variant now in effect.
    pub fn toggle(&mut self) -> ThemeVariant {
        let next = match self.current.theme {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        };
        self.set(next);
        next
    }

    fn persist(&self, preference: Preference) {
        match toml::to_string_pretty(&preference) {
            Ok(rendered) => {
                if let Err(err) = fs::write(&self.path, rendered) {
                    warn!(path = %self.path.display(), %err, "failed to persist preference");
                }
            }
            Err(err) => warn!(%err, "failed to serialize preference"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("commandsuite-pref-{}-{name}.toml", std::process::id()))
    }

    #[test]
    fn first_load_defaults_to_light() {
        let path = scratch_path("fresh");
        let _ = fs::remove_file(&path);
        let store = PreferenceStore::load(&path);
        assert!(!store.is_dark());
    }

    #[test]
    fn round_trips_across_sessions() {
        let path = scratch_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut store = PreferenceStore::load(&path);
        store.set(ThemeVariant::Dark);
        assert!(PreferenceStore::load(&path).is_dark());

        store.set(ThemeVariant::Light);
        assert!(!PreferenceStore::load(&path).is_dark());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_store_reads_as_light() {
        let path = scratch_path("corrupt");
        fs::write(&path, "theme = \"sepia\"\n").unwrap();
        assert!(!PreferenceStore::load(&path).is_dark());

        fs::write(&path, "not even toml {{{").unwrap();
        assert!(!PreferenceStore::load(&path).is_dark());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn set_to_current_value_is_a_no_op() {
        let path = scratch_path("noop");
        let _ = fs::remove_file(&path);

        let mut store = PreferenceStore::load(&path);
        store.set(ThemeVariant::Light);
        // No write happened, so the file still does not exist.
        assert!(!path.exists());

        store.toggle();
        assert!(path.exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn persists_before_applying() {
        let path = scratch_path("write-then-apply");
        let _ = fs::remove_file(&path);

        let mut store = PreferenceStore::load(&path);
        store.set(ThemeVariant::Dark);
        let on_disk = fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("\"dark\""));
        assert!(store.is_dark());

        let _ = fs::remove_file(&path);
    }
}
