//! Static route table with auth metadata
//!
//! Records form a tree: a child pattern is appended to its parent's, and a
//! path matches the chain of records from the root record down to the leaf.
//! `requires_auth` on any record of the chain protects the whole chain.

use crate::error::{CoreError, CoreResult};
use crate::page::Page;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Redirect records followed before giving up on a path
const MAX_REDIRECTS: usize = 8;

/// Views rendered by the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    LanguageSelect,
    Login,
    GroupDetails,
    AddStudent,
    ProfileUpdate,
    Tabs,
    Main,
    Wallet,
    Profile,
}

impl View {
    /// Guard-facing page for this view
    pub fn page(self) -> Page {
        match self {
            View::LanguageSelect => Page::LanguageSelect,
            View::Login => Page::Login,
            View::Main => Page::MainTab,
            _ => Page::Other,
        }
    }
}

/// What a record resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    View(View),
    Redirect(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: String,
    pub target: RouteTarget,
    pub requires_auth: bool,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn view(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::View(view),
            requires_auth: false,
            children: Vec::new(),
        }
    }

    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: RouteTarget::Redirect(to.into()),
            requires_auth: false,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// A flattened, matchable entry: full pattern segments plus the record chain
#[derive(Debug, Clone)]
struct Entry {
    segments: Vec<String>,
    chain: Vec<usize>,
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// Path after following redirect records
    pub path: String,
    pub records: Vec<&'a RouteRecord>,
    pub params: HashMap<String, String>,
}

impl RouteMatch<'_> {
    /// View of the leaf record
    pub fn view(&self) -> Option<View> {
        match self.records.last().map(|record| &record.target) {
            Some(RouteTarget::View(view)) => Some(*view),
            _ => None,
        }
    }

    pub fn page(&self) -> Page {
        self.view().map_or(Page::Other, View::page)
    }

    pub fn requires_auth(&self) -> bool {
        self.records.iter().any(|record| record.requires_auth)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
    entries: Vec<Entry>,
}

impl RouteTable {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        let mut entries = Vec::new();
        for (index, record) in records.iter().enumerate() {
            flatten(record, &mut vec![index], &[], &mut entries);
        }
        Self { records, entries }
    }

    /// Routes of the Teachers App
    pub fn teachers_app() -> Self {
        Self::new(vec![
            RouteRecord::redirect("/", Page::LANGUAGE_SELECT_PATH),
            RouteRecord::view(Page::LANGUAGE_SELECT_PATH, View::LanguageSelect),
            RouteRecord::view(Page::LOGIN_PATH, View::Login),
            RouteRecord::view("/group/:id", View::GroupDetails).requires_auth(),
            RouteRecord::view("/group/:id/add-student", View::AddStudent).requires_auth(),
            RouteRecord::view("/profile-update", View::ProfileUpdate).requires_auth(),
            RouteRecord::view("/tabs/", View::Tabs)
                .requires_auth()
                .with_children(vec![
                    RouteRecord::redirect("", Page::MAIN_TAB_PATH),
                    RouteRecord::view("main", View::Main),
                    RouteRecord::view("wallet", View::Wallet),
                    RouteRecord::view("profile", View::Profile),
                ]),
        ])
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Match a path without following redirects
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_>> {
        let segments = split_segments(strip_query(path));
        self.entries.iter().find_map(|entry| {
            let params = match_segments(&entry.segments, &segments)?;
            Some(RouteMatch {
                path: strip_query(path).to_string(),
                records: self.chain_records(&entry.chain),
                params,
            })
        })
    }

    /// Match a path, following redirect records the way the host router does.
    ///
    /// Returns `None` for unknown paths and for redirect loops.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let mut current = path.to_string();
        for _ in 0..=MAX_REDIRECTS {
            let matched = self.match_path(&current)?;
            match matched.records.last().map(|record| &record.target) {
                Some(RouteTarget::Redirect(to)) => {
                    debug!(from = %current, to = %to, "Following route redirect");
                    current = to.clone();
                }
                _ => return Some(matched),
            }
        }
        warn!(path, "Redirect limit reached while resolving route");
        None
    }

    /// Check that the table and the guard agree on path spellings.
    ///
    /// # Errors
    ///
    /// Returns an error if a guard page is missing or mis-registered, a
    /// redirect record cannot be resolved, or a login/onboarding route is
    /// marked as requiring authentication.
    pub fn validate(&self) -> CoreResult<()> {
        for page in Page::REDIRECT_TARGETS {
            let Some(path) = page.path() else { continue };
            let matched = self.resolve(path).ok_or_else(|| {
                CoreError::invalid_routes(format!("guard target {path} is not registered"))
            })?;
            if matched.page() != page {
                return Err(CoreError::invalid_routes(format!(
                    "guard target {path} resolves to {:?} instead of {page:?}",
                    matched.view()
                )));
            }
            if matches!(page, Page::LanguageSelect | Page::Login) && matched.requires_auth() {
                return Err(CoreError::invalid_routes(format!(
                    "{path} must not require authentication"
                )));
            }
        }

        for entry in &self.entries {
            let records = self.chain_records(&entry.chain);
            if let Some(RouteTarget::Redirect(to)) = records.last().map(|record| &record.target) {
                if self.resolve(to).is_none() {
                    return Err(CoreError::invalid_routes(format!(
                        "redirect to {to} does not resolve to a view"
                    )));
                }
            }
        }

        Ok(())
    }

    fn chain_records(&self, chain: &[usize]) -> Vec<&RouteRecord> {
        let mut records = Vec::with_capacity(chain.len());
        let mut level = &self.records;
        for &index in chain {
            let record = &level[index];
            records.push(record);
            level = &record.children;
        }
        records
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::teachers_app()
    }
}

/// Register children before their parent so an empty child path wins
fn flatten(record: &RouteRecord, chain: &mut Vec<usize>, prefix: &[String], out: &mut Vec<Entry>) {
    let mut segments = prefix.to_vec();
    segments.extend(split_segments(&record.path).into_iter().map(str::to_string));

    for (index, child) in record.children.iter().enumerate() {
        chain.push(index);
        flatten(child, chain, &segments, out);
        chain.pop();
    }

    out.push(Entry {
        segments,
        chain: chain.clone(),
    });
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

fn match_segments(pattern: &[String], segments: &[&str]) -> Option<HashMap<String, String>> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = HashMap::new();
    for (expected, actual) in pattern.iter().zip(segments) {
        match expected.strip_prefix(':') {
            Some(name) => {
                params.insert(name.to_string(), (*actual).to_string());
            }
            None if expected == actual => {}
            None => return None,
        }
    }
    Some(params)
}
