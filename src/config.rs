// src/config.rs

use std::collections::HashSet;
use std::path::PathBuf;

/// Immutable run configuration, fixed before the crawl starts.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Term codes to scrape; `None` means every discovered term.
    pub target_terms: Option<HashSet<String>>,
    /// Department codes to keep, upper-cased; `None` means every department.
    pub target_depts: Option<HashSet<String>>,
    /// When true, records are exported without fetching any files.
    pub no_download: bool,
    /// Directory for the CSV/JSON metadata artifacts.
    pub out_dir: PathBuf,
    /// Directory for downloaded syllabus files.
    pub files_dir: PathBuf,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        CrawlConfig {
            target_terms: None,
            target_depts: None,
            no_download: false,
            out_dir: PathBuf::from("output"),
            files_dir: PathBuf::from("syllabi_downloads"),
        }
    }
}

impl CrawlConfig {
    pub fn term_allowed(&self, code: &str) -> bool {
        self.target_terms.as_ref().map_or(true, |s| s.contains(code))
    }

    pub fn dept_allowed(&self, dept: &str) -> bool {
        self.target_depts.as_ref().map_or(true, |s| s.contains(dept))
    }
}

/// Parse a comma-separated code list, dropping blanks. Returns `None` when
/// nothing usable remains, which callers treat as "no filter".
pub fn parse_code_list(raw: &str) -> Option<HashSet<String>> {
    let set: HashSet<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if set.is_empty() {
        None
    } else {
        Some(set)
    }
}

/// Like `parse_code_list`, but upper-cases entries so department matching is
/// case-insensitive.
pub fn parse_dept_list(raw: &str) -> Option<HashSet<String>> {
    parse_code_list(raw).map(|set| set.into_iter().map(|s| s.to_uppercase()).collect())
}
