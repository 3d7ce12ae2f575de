// src/extract/terms.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// One entry from the term dropdown, e.g. code "1258", label "Fall 2025".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermOption {
    pub code: String,
    pub label: String,
}

// Most specific first; the search form has been a plain
// <select name="term"> so far, the rest are fallbacks.
static TERM_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    [
        r#"select[name="term"] option"#,
        "select#term option",
        "form select option",
    ]
    .iter()
    .map(|s| Selector::parse(s).expect("term selector should parse"))
    .collect()
});

/// Extract (code, label) term options from the term-selection page.
///
/// Tries each selector in order and returns the first non-empty result set.
/// Options whose `value` attribute is not a non-empty digit string are
/// dropped; that filters the "Select a term" placeholder the site ships.
pub fn extract_term_options(doc: &Html) -> Vec<TermOption> {
    for selector in TERM_SELECTORS.iter() {
        let options: Vec<TermOption> = doc
            .select(selector)
            .filter_map(|opt| {
                let value = opt.value().attr("value").unwrap_or("").trim();
                if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                Some(TermOption {
                    code: value.to_string(),
                    label: opt.text().collect::<String>().trim().to_string(),
                })
            })
            .collect();
        if !options.is_empty() {
            return options;
        }
    }
    Vec::new()
}
