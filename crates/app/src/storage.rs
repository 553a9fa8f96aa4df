//! `localStorage`-backed flag store

use std::fmt::Debug;
use teachers_core::{FlagKeys, FlagStore, Locale};
use tracing::{info, warn};
use web_sys::Storage;

/// Get localStorage, `None` when the browser blocks or lacks it
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Collapse a storage read into a flag value; any failure reads as absent
fn flag_value<E: Debug>(key: &str, read: Option<Result<Option<String>, E>>) -> Option<String> {
    match read? {
        Ok(value) => value,
        Err(err) => {
            warn!(key, error = ?err, "Failed to read flag");
            None
        }
    }
}

/// Log a failed storage write; returns whether it was applied
fn write_applied<E: Debug>(key: &str, write: Option<Result<(), E>>) -> bool {
    match write {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            warn!(key, error = ?err, "Failed to persist flag");
            false
        }
        None => {
            warn!(key, "localStorage unavailable, flag not persisted");
            false
        }
    }
}

/// Reads and writes the persisted onboarding and session flags.
///
/// Values are stored as raw strings so they stay readable by the native
/// wrapper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalFlagStore;

impl FlagStore for LocalFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        flag_value(key, local_storage().map(|storage| storage.get_item(key)))
    }
}

impl LocalFlagStore {
    fn set(self, key: &str, value: &str) -> bool {
        write_applied(key, local_storage().map(|storage| storage.set_item(key, value)))
    }

    fn remove(self, key: &str) -> bool {
        write_applied(key, local_storage().map(|storage| storage.remove_item(key)))
    }

    /// Finish onboarding with the chosen locale
    pub fn select_language(self, locale: Locale) {
        if self.set(FlagKeys::LANGUAGE, locale.code()) && self.set(FlagKeys::LANGUAGE_SELECTED, "true") {
            info!(%locale, "Language selected");
        }
    }

    pub fn set_locale(self, locale: Locale) {
        self.set(FlagKeys::LANGUAGE, locale.code());
    }

    pub fn login(self, token: &str) {
        if self.set(FlagKeys::TOKEN, token) {
            info!("Session token stored");
        }
    }

    pub fn logout(self) {
        if self.remove(FlagKeys::TOKEN) {
            info!("Session token cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_storage_reads_as_absent() {
        assert_eq!(flag_value::<&str>(FlagKeys::TOKEN, None), None);
    }

    #[test]
    fn test_failed_read_reads_as_absent() {
        assert_eq!(flag_value(FlagKeys::TOKEN, Some(Err("SecurityError"))), None);
    }

    #[test]
    fn test_successful_read_passes_value_through() {
        let read: Option<Result<_, &str>> = Some(Ok(Some("abc".to_string())));
        assert_eq!(flag_value(FlagKeys::TOKEN, read).as_deref(), Some("abc"));

        let unset: Option<Result<_, &str>> = Some(Ok(None));
        assert_eq!(flag_value(FlagKeys::TOKEN, unset), None);
    }

    #[test]
    fn test_write_outcomes() {
        assert!(write_applied::<&str>(FlagKeys::TOKEN, Some(Ok(()))));
        assert!(!write_applied(FlagKeys::TOKEN, Some(Err("QuotaExceededError"))));
        assert!(!write_applied::<&str>(FlagKeys::TOKEN, None));
    }
}
