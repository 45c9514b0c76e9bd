//! Unit tests for generic-tab classification and candidate collection.

use rstest::rstest;

use tabshelf::managers::tab_manager::TabManager;
use tabshelf::services::tab_classifier::{
    collect_candidates, TabClassifier, TabClassifierTrait, UrlPattern,
};
use tabshelf::types::errors::EnumerationError;
use tabshelf::types::tab::{BrowserTab, BrowserWindow};

fn window(id: i64, incognito: bool, urls: &[&str]) -> BrowserWindow {
    BrowserWindow {
        id,
        incognito,
        tabs: urls
            .iter()
            .enumerate()
            .map(|(i, url)| BrowserTab {
                id: id * 100 + i as i64,
                title: String::new(),
                url: url.to_string(),
            })
            .collect(),
    }
}

#[rstest]
#[case("chrome://newtab/", true)]
#[case("chrome://newtab/?src=ntp", false)]
#[case("chrome://settings", true)]
#[case("chrome://settings/privacy", true)]
#[case("chrome://extensions/?id=abc", true)]
#[case("about:blank", true)]
#[case("about:", true)]
#[case("Chrome://settings", false)]
#[case("ABOUT:blank", false)]
#[case("https://example.com/about:", false)]
#[case("chrome://history", false)]
#[case("https://rust-lang.org", false)]
fn test_single_window_patterns(#[case] url: &str, #[case] generic: bool) {
    let classifier = TabClassifier::single_window();
    assert_eq!(classifier.is_generic(url), generic, "url={url}");
}

#[rstest]
#[case("chrome-extension://abcdef/popup.html", false, true)]
#[case("chrome-extension:", false, true)]
#[case("https://chrome-extension.example", false, false)]
fn test_extension_pages_only_hidden_in_multi_window(
    #[case] url: &str,
    #[case] single: bool,
    #[case] multi: bool,
) {
    assert_eq!(TabClassifier::single_window().is_generic(url), single);
    assert_eq!(TabClassifier::multi_window().is_generic(url), multi);
}

#[test]
fn test_default_is_multi_window() {
    let classifier = TabClassifier::default();
    assert_eq!(classifier.patterns().len(), 5);
    assert!(classifier
        .patterns()
        .contains(&UrlPattern::Exact("chrome://newtab/".to_string())));
}

#[test]
fn test_collect_drops_generic_tabs_and_empty_windows() {
    let mut manager = TabManager::new();
    manager.sync(
        vec![
            window(1, false, &["https://a.com", "chrome://newtab/", "https://b.com"]),
            window(2, false, &["chrome://settings", "about:blank"]),
            window(3, true, &["https://secret.com"]),
        ],
        1,
        true,
    );

    let listing = collect_candidates(&manager, &TabClassifier::multi_window()).unwrap();
    assert!(listing.has_multiple_windows);
    assert!(listing.private_access_allowed);

    let ids: Vec<i64> = listing.windows.iter().map(|w| w.window_id).collect();
    assert_eq!(ids, vec![1, 3]);

    let first = &listing.windows[0];
    assert!(first.is_current_window);
    assert!(!first.is_private);
    let urls: Vec<&str> = first.tabs.iter().map(|t| t.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com", "https://b.com"]);

    let private = &listing.windows[1];
    assert!(private.is_private);
    assert!(!private.is_current_window);
    assert_eq!(private.label(1), "Incognito Window");
    assert_eq!(first.label(0), "Current Window");
}

#[test]
fn test_multiple_windows_counted_before_filtering() {
    let mut manager = TabManager::new();
    manager.sync(
        vec![
            window(1, false, &["https://a.com"]),
            window(2, false, &["chrome://newtab/"]),
        ],
        1,
        false,
    );

    let listing = collect_candidates(&manager, &TabClassifier::multi_window()).unwrap();
    assert_eq!(listing.windows.len(), 1);
    assert!(listing.has_multiple_windows);
    assert!(!listing.private_access_allowed);
}

#[test]
fn test_single_window_listing() {
    let mut manager = TabManager::new();
    manager.sync(vec![window(4, false, &["https://a.com"])], 4, false);

    let listing = collect_candidates(&manager, &TabClassifier::single_window()).unwrap();
    assert!(!listing.has_multiple_windows);
    assert_eq!(listing.windows[0].label(0), "Current Window");
}

#[test]
fn test_other_windows_are_labelled_by_position() {
    let mut manager = TabManager::new();
    manager.sync(
        vec![
            window(1, false, &["https://a.com"]),
            window(2, false, &["https://b.com"]),
        ],
        1,
        false,
    );

    let listing = collect_candidates(&manager, &TabClassifier::default()).unwrap();
    assert_eq!(listing.windows[1].label(1), "Window 2");
}

#[test]
fn test_unknown_current_window_fails() {
    let manager = TabManager::new();
    let result = collect_candidates(&manager, &TabClassifier::default());
    assert!(matches!(result, Err(EnumerationError::NoCurrentWindow)));
}
