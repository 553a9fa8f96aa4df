//! Persisted onboarding and session flags

use std::collections::HashMap;

/// Storage keys shared by the guard, the locale loader and the frontend
pub struct FlagKeys;

impl FlagKeys {
    /// Present once the user picked a language during onboarding
    pub const LANGUAGE_SELECTED: &'static str = "languageSelected";

    /// Auth token written by the login flow
    pub const TOKEN: &'static str = "token";

    /// Chosen locale code
    pub const LANGUAGE: &'static str = "language";
}

/// Read-only view over a persistent key-value string store
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: FlagStore + ?Sized> FlagStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-memory store, used by tests and non-browser hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryFlagStore {
    values: HashMap<String, String>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.values.remove(key)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Combination of language selection and authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NoLanguage,
    LanguageOnly,
    Authenticated,
    /// A token without a language choice; the guard treats it like `NoLanguage`
    TokenWithoutLanguage,
}

/// Immutable snapshot of the flags the guard reads
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedFlags {
    pub language_selected: bool,
    pub auth_token: Option<String>,
}

impl PersistedFlags {
    pub fn new(language_selected: bool, auth_token: Option<String>) -> Self {
        Self {
            language_selected,
            auth_token: auth_token.filter(|token| !token.is_empty()),
        }
    }

    /// Take a snapshot of the store. Empty values count as absent.
    pub fn snapshot<S: FlagStore + ?Sized>(store: &S) -> Self {
        let language_selected = store
            .get(FlagKeys::LANGUAGE_SELECTED)
            .is_some_and(|value| !value.is_empty());
        Self::new(language_selected, store.get(FlagKeys::TOKEN))
    }

    pub fn has_token(&self) -> bool {
        self.auth_token.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        match (self.language_selected, self.has_token()) {
            (false, false) => SessionPhase::NoLanguage,
            (false, true) => SessionPhase::TokenWithoutLanguage,
            (true, false) => SessionPhase::LanguageOnly,
            (true, true) => SessionPhase::Authenticated,
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use mockall::mock;

    mock! {
        pub FlagStore {}

        impl FlagStore for FlagStore {
            fn get(&self, key: &str) -> Option<String>;
        }
    }
}
