//! Pages the navigation guard can target or redirect to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of pages that take part in onboarding and authentication.
///
/// Everything that is neither the language picker, the login screen nor
/// the main tab is `Other`; the guard only cares about its auth metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    LanguageSelect,
    Login,
    MainTab,
    Other,
}

impl Page {
    pub const LANGUAGE_SELECT_PATH: &'static str = "/language-select";
    pub const LOGIN_PATH: &'static str = "/login";
    pub const MAIN_TAB_PATH: &'static str = "/tabs/main";

    /// Pages the guard may redirect to
    pub const REDIRECT_TARGETS: [Page; 3] = [Page::LanguageSelect, Page::Login, Page::MainTab];

    /// Canonical path of the page, `None` for `Other`
    pub fn path(self) -> Option<&'static str> {
        match self {
            Page::LanguageSelect => Some(Self::LANGUAGE_SELECT_PATH),
            Page::Login => Some(Self::LOGIN_PATH),
            Page::MainTab => Some(Self::MAIN_TAB_PATH),
            Page::Other => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path() {
            Some(path) => f.write_str(path),
            None => f.write_str("<other>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_targets_have_paths() {
        for page in Page::REDIRECT_TARGETS {
            assert!(page.path().is_some(), "{page:?} must have a path");
        }
        assert_eq!(Page::Other.path(), None);
    }

    #[test]
    fn test_display_uses_path() {
        assert_eq!(Page::Login.to_string(), "/login");
        assert_eq!(Page::Other.to_string(), "<other>");
    }
}
