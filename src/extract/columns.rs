// src/extract/columns.rs

/// Resolved 0-based cell indices for the four columns the scraper reads.
///
/// Column 0 is the site's "Term" column and is never read; the positional
/// defaults below assume the layout the site has shipped for years, and the
/// header-text search lets us survive a reordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub class: usize,
    pub section: usize,
    pub instructor: usize,
    pub syllabus: usize,
}

const DEFAULT_CLASS: usize = 1;
const DEFAULT_SECTION: usize = 2;
const DEFAULT_INSTRUCTOR: usize = 3;
const DEFAULT_SYLLABUS: usize = 4;

impl ColumnMap {
    /// Discover column indices from header-cell texts.
    ///
    /// For each column, the index of the first header containing any candidate
    /// substring wins; if nothing matches (including an empty header list),
    /// the positional default applies. Matching is case-insensitive.
    pub fn resolve(headers: &[String]) -> Self {
        let lowered: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();
        ColumnMap {
            class: col_index(&lowered, &["class"], DEFAULT_CLASS),
            section: col_index(&lowered, &["section"], DEFAULT_SECTION),
            instructor: col_index(&lowered, &["instructor"], DEFAULT_INSTRUCTOR),
            syllabus: col_index(&lowered, &["syllabi", "syllabus"], DEFAULT_SYLLABUS),
        }
    }

    /// Largest resolved index; rows with fewer cells than this are not data rows.
    pub fn max_index(&self) -> usize {
        self.class
            .max(self.section)
            .max(self.instructor)
            .max(self.syllabus)
    }
}

fn col_index(headers: &[String], candidates: &[&str], default: usize) -> usize {
    for candidate in candidates {
        if let Some(i) = headers.iter().position(|h| h.contains(candidate)) {
            return i;
        }
    }
    default
}
