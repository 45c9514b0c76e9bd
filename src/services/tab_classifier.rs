//! Generic-tab classifier for Tabshelf.
//!
//! Browser-internal pages (new tab, settings, extension management, `about:`)
//! are not worth bookmarking and never reach the selection checklist.

use crate::managers::tab_manager::WindowSourceTrait;
use crate::types::errors::EnumerationError;
use crate::types::settings::FilterSettings;
use crate::types::tab::{CandidateWindow, TabListing};

/// How a pattern is matched against a URL. Always case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPattern {
    /// The whole URL must equal the pattern.
    Exact(String),
    /// The URL must start with the pattern.
    Prefix(String),
}

impl UrlPattern {
    pub fn matches(&self, url: &str) -> bool {
        match self {
            UrlPattern::Exact(p) => url == p,
            UrlPattern::Prefix(p) => url.starts_with(p.as_str()),
        }
    }
}

/// Patterns every variant excludes.
const BASE_PATTERNS: &[(&str, bool)] = &[
    ("chrome://newtab/", true),
    ("chrome://settings", false),
    ("chrome://extensions", false),
    ("about:", false),
];

/// The extension's own pages, excluded by the multi-window popup.
const EXTENSION_PAGE_PREFIX: &str = "chrome-extension:";

/// Trait defining tab classification.
pub trait TabClassifierTrait {
    /// Returns true if the URL is a generic page that should be hidden.
    fn is_generic(&self, url: &str) -> bool;
    fn patterns(&self) -> &[UrlPattern];
}

/// Classifier built from a fixed pattern list.
pub struct TabClassifier {
    patterns: Vec<UrlPattern>,
}

impl TabClassifier {
    /// Base patterns only, as used by the single-window quick save.
    pub fn single_window() -> Self {
        Self {
            patterns: base_patterns(),
        }
    }

    /// Base patterns plus the extension's own pages.
    pub fn multi_window() -> Self {
        let mut patterns = base_patterns();
        patterns.push(UrlPattern::Prefix(EXTENSION_PAGE_PREFIX.to_string()));
        Self { patterns }
    }

    pub fn from_settings(settings: &FilterSettings) -> Self {
        let mut classifier = if settings.exclude_extension_pages {
            Self::multi_window()
        } else {
            Self::single_window()
        };
        classifier.patterns.extend(
            settings
                .extra_excluded_prefixes
                .iter()
                .filter(|p| !p.is_empty())
                .map(|p| UrlPattern::Prefix(p.clone())),
        );
        classifier
    }
}

fn base_patterns() -> Vec<UrlPattern> {
    BASE_PATTERNS
        .iter()
        .map(|(p, exact)| {
            if *exact {
                UrlPattern::Exact(p.to_string())
            } else {
                UrlPattern::Prefix(p.to_string())
            }
        })
        .collect()
}

impl Default for TabClassifier {
    fn default() -> Self {
        Self::multi_window()
    }
}

impl TabClassifierTrait for TabClassifier {
    fn is_generic(&self, url: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(url))
    }

    fn patterns(&self) -> &[UrlPattern] {
        &self.patterns
    }
}

/// Enumerates every window and keeps only the tabs worth offering.
///
/// Windows left empty after filtering are dropped.
pub fn collect_candidates<S, C>(source: &S, classifier: &C) -> Result<TabListing, EnumerationError>
where
    S: WindowSourceTrait + ?Sized,
    C: TabClassifierTrait + ?Sized,
{
    let current = source.current_window_id()?;
    let windows = source.list_windows()?;
    let total = windows.len();

    let candidates: Vec<CandidateWindow> = windows
        .into_iter()
        .filter_map(|window| {
            let tabs: Vec<_> = window
                .tabs
                .into_iter()
                .filter(|tab| !classifier.is_generic(&tab.url))
                .collect();
            if tabs.is_empty() {
                return None;
            }
            Some(CandidateWindow {
                window_id: window.id,
                is_private: window.incognito,
                is_current_window: window.id == current,
                tabs,
            })
        })
        .collect();

    log::debug!("collected {} candidate window(s) out of {}", candidates.len(), total);

    Ok(TabListing {
        windows: candidates,
        has_multiple_windows: total > 1,
        private_access_allowed: source.is_private_access_allowed(),
    })
}
