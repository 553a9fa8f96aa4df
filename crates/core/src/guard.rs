//! Navigation guard for onboarding and authentication
//!
//! [`decide`] is a pure function of the requested page and a snapshot of
//! the persisted flags. [`NavigationGuard`] wires it to a route table and a
//! flag store so a router adapter only has to act on the [`Decision`].

use crate::flags::{FlagStore, PersistedFlags};
use crate::page::Page;
use crate::routes::{RouteMatch, RouteTable};
use tracing::debug;

/// A single transition attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub target: Page,
    pub path: String,
    pub requires_auth: bool,
}

impl NavigationRequest {
    pub fn new(target: Page, path: impl Into<String>, requires_auth: bool) -> Self {
        Self {
            target,
            path: path.into(),
            requires_auth,
        }
    }

    pub fn from_match(matched: &RouteMatch<'_>) -> Self {
        Self::new(matched.page(), matched.path.clone(), matched.requires_auth())
    }

    /// Request for a path the route table does not know
    pub fn unmatched(path: impl Into<String>) -> Self {
        Self::new(Page::Other, path, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Page),
}

impl Decision {
    pub fn is_allow(self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Path to navigate to, `None` when the transition is allowed
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::RedirectTo(page) => page.path(),
        }
    }
}

/// Decide whether a transition may proceed. First matching rule wins.
pub fn decide(request: &NavigationRequest, flags: &PersistedFlags) -> Decision {
    let has_token = flags.has_token();

    if !flags.language_selected && request.target != Page::LanguageSelect {
        return Decision::RedirectTo(Page::LanguageSelect);
    }

    if request.requires_auth && !has_token {
        return Decision::RedirectTo(Page::Login);
    }

    if request.target == Page::Login && has_token {
        return Decision::RedirectTo(Page::MainTab);
    }

    if request.target == Page::LanguageSelect && flags.language_selected {
        return if has_token {
            Decision::RedirectTo(Page::MainTab)
        } else {
            Decision::RedirectTo(Page::Login)
        };
    }

    Decision::Allow
}

/// Outcome of guarding a concrete path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Path the router settles on before the guard runs
    pub resolved_path: String,
    pub decision: Decision,
}

/// Route-table-aware guard reading flags from a store on every check
pub struct NavigationGuard<'a, S: FlagStore> {
    routes: &'a RouteTable,
    store: S,
}

impl<'a, S: FlagStore> NavigationGuard<'a, S> {
    pub fn new(routes: &'a RouteTable, store: S) -> Self {
        Self { routes, store }
    }

    pub fn request_for(&self, path: &str) -> NavigationRequest {
        self.routes
            .resolve(path)
            .map_or_else(|| NavigationRequest::unmatched(path), |matched| {
                NavigationRequest::from_match(&matched)
            })
    }

    pub fn check(&self, path: &str) -> Navigation {
        let request = self.request_for(path);
        let flags = PersistedFlags::snapshot(&self.store);
        let decision = decide(&request, &flags);
        debug!(
            path,
            resolved = %request.path,
            phase = ?flags.phase(),
            ?decision,
            "Navigation guard evaluated"
        );
        Navigation {
            resolved_path: request.path,
            decision,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{FlagKeys, MemoryFlagStore};

    const ALL_TARGETS: [Page; 4] = [Page::LanguageSelect, Page::Login, Page::MainTab, Page::Other];

    fn flags(language_selected: bool, token: Option<&str>) -> PersistedFlags {
        PersistedFlags::new(language_selected, token.map(str::to_string))
    }

    fn request(target: Page, requires_auth: bool) -> NavigationRequest {
        let path = target.path().unwrap_or("/group/42");
        NavigationRequest::new(target, path, requires_auth)
    }

    fn all_flag_combinations() -> Vec<PersistedFlags> {
        vec![
            flags(false, None),
            flags(false, Some("abc")),
            flags(true, None),
            flags(true, Some("abc")),
        ]
    }

    #[test]
    fn test_missing_language_always_redirects_to_language_select() {
        for flags in [flags(false, None), flags(false, Some("abc"))] {
            for target in [Page::Login, Page::MainTab, Page::Other] {
                for requires_auth in [false, true] {
                    assert_eq!(
                        decide(&request(target, requires_auth), &flags),
                        Decision::RedirectTo(Page::LanguageSelect),
                        "target {target:?}, flags {flags:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_language_select_allowed_while_unselected() {
        for token in [None, Some("abc")] {
            let decision = decide(&request(Page::LanguageSelect, false), &flags(false, token));
            assert_eq!(decision, Decision::Allow);
        }
    }

    #[test]
    fn test_protected_without_token_redirects_to_login() {
        for target in [Page::MainTab, Page::Other] {
            let decision = decide(&request(target, true), &flags(true, None));
            assert_eq!(decision, Decision::RedirectTo(Page::Login));
        }
    }

    #[test]
    fn test_authenticated_login_redirects_to_main() {
        let decision = decide(&request(Page::Login, false), &flags(true, Some("abc")));
        assert_eq!(decision, Decision::RedirectTo(Page::MainTab));
    }

    #[test]
    fn test_selected_language_select_redirects_by_token() {
        let with_token = decide(&request(Page::LanguageSelect, false), &flags(true, Some("abc")));
        assert_eq!(with_token, Decision::RedirectTo(Page::MainTab));

        let without_token = decide(&request(Page::LanguageSelect, false), &flags(true, None));
        assert_eq!(without_token, Decision::RedirectTo(Page::Login));
    }

    #[test]
    fn test_unauthenticated_login_is_allowed() {
        let decision = decide(&request(Page::Login, false), &flags(true, None));
        assert_eq!(decision, Decision::Allow);
    }

    #[test]
    fn test_authenticated_open_pages_are_allowed() {
        for requires_auth in [false, true] {
            for target in [Page::MainTab, Page::Other] {
                let decision = decide(&request(target, requires_auth), &flags(true, Some("abc")));
                assert!(decision.is_allow());
            }
        }
    }

    #[test]
    fn test_protected_never_allowed_without_token() {
        for flags in all_flag_combinations() {
            for target in ALL_TARGETS {
                let decision = decide(&request(target, true), &flags);
                if decision.is_allow() {
                    assert!(flags.has_token(), "{target:?} allowed without token");
                }
            }
        }
    }

    #[test]
    fn test_never_redirects_to_requested_page() {
        for flags in all_flag_combinations() {
            for target in ALL_TARGETS {
                for requires_auth in [false, true] {
                    // Onboarding pages are never protected routes
                    let onboarding = matches!(target, Page::Login | Page::LanguageSelect);
                    if onboarding && requires_auth {
                        continue;
                    }
                    if let Decision::RedirectTo(page) = decide(&request(target, requires_auth), &flags) {
                        assert_ne!(page, target, "{target:?} redirected to itself");
                        assert_ne!(page, Page::Other);
                    }
                }
            }
        }
    }

    #[test]
    fn test_empty_token_counts_as_absent() {
        let decision = decide(&request(Page::MainTab, true), &flags(true, Some("")));
        assert_eq!(decision, Decision::RedirectTo(Page::Login));
    }

    #[test]
    fn test_redirect_path() {
        assert_eq!(Decision::Allow.redirect_path(), None);
        assert_eq!(
            Decision::RedirectTo(Page::MainTab).redirect_path(),
            Some("/tabs/main")
        );
    }

    fn guard_check(store: MemoryFlagStore, path: &str) -> Navigation {
        let routes = RouteTable::teachers_app();
        NavigationGuard::new(&routes, store).check(path)
    }

    #[test]
    fn test_scenario_fresh_install() {
        let nav = guard_check(MemoryFlagStore::new(), "/tabs/main");
        assert_eq!(nav.decision, Decision::RedirectTo(Page::LanguageSelect));
    }

    #[test]
    fn test_scenario_language_only_main_tab() {
        let store = MemoryFlagStore::new().with(FlagKeys::LANGUAGE_SELECTED, "true");
        let nav = guard_check(store, "/tabs/main");
        assert_eq!(nav.decision, Decision::RedirectTo(Page::Login));
    }

    #[test]
    fn test_scenario_authenticated_login() {
        let store = MemoryFlagStore::new()
            .with(FlagKeys::LANGUAGE_SELECTED, "true")
            .with(FlagKeys::TOKEN, "abc");
        let nav = guard_check(store, "/login");
        assert_eq!(nav.decision, Decision::RedirectTo(Page::MainTab));
    }

    #[test]
    fn test_scenario_authenticated_language_select() {
        let store = MemoryFlagStore::new()
            .with(FlagKeys::LANGUAGE_SELECTED, "true")
            .with(FlagKeys::TOKEN, "abc");
        let nav = guard_check(store, "/language-select");
        assert_eq!(nav.decision, Decision::RedirectTo(Page::MainTab));
    }

    #[test]
    fn test_scenario_group_without_token() {
        let store = MemoryFlagStore::new().with(FlagKeys::LANGUAGE_SELECTED, "true");
        let nav = guard_check(store, "/group/42");
        assert_eq!(nav.decision, Decision::RedirectTo(Page::Login));
    }

    #[test]
    fn test_scenario_group_with_token() {
        let store = MemoryFlagStore::new()
            .with(FlagKeys::LANGUAGE_SELECTED, "true")
            .with(FlagKeys::TOKEN, "abc");
        let nav = guard_check(store, "/group/42");
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.resolved_path, "/group/42");
    }

    #[test]
    fn test_root_resolves_before_guarding() {
        let store = MemoryFlagStore::new();
        let nav = guard_check(store, "/");
        assert_eq!(nav.resolved_path, Page::LANGUAGE_SELECT_PATH);
        assert_eq!(nav.decision, Decision::Allow);
    }

    #[test]
    fn test_unknown_path_is_allowed_once_onboarded() {
        let store = MemoryFlagStore::new().with(FlagKeys::LANGUAGE_SELECTED, "true");
        let nav = guard_check(store, "/does-not-exist");
        assert_eq!(nav.decision, Decision::Allow);
        assert_eq!(nav.resolved_path, "/does-not-exist");
    }

    #[test]
    fn test_guard_reads_store_by_reference() {
        let routes = RouteTable::teachers_app();
        let mut store = MemoryFlagStore::new().with(FlagKeys::LANGUAGE_SELECTED, "true");
        assert_eq!(
            NavigationGuard::new(&routes, &store).check("/tabs/wallet").decision,
            Decision::RedirectTo(Page::Login)
        );
        store.set(FlagKeys::TOKEN, "abc");
        assert!(NavigationGuard::new(&routes, &store).check("/tabs/wallet").decision.is_allow());
    }
}
