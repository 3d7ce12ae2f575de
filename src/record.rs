// src/record.rs

use serde::Serialize;

/// Column order of both output artifacts. The CSV header uses exactly this
/// order; `OutputRow` mirrors it field for field.
pub const OUTPUT_FIELDS: [&str; 7] = [
    "term_name",
    "class_name",
    "section",
    "instructor",
    "syllabus_web_url",
    "syllabus_local_filepath",
    "syllabus_local_filename",
];

/// Download lifecycle of one record, as an explicit tagged state.
///
/// A record is created `NotRequested` (no link, or no-download mode) or
/// `Pending`, transitions at most once to `Downloaded` or `Failed`, and is
/// never touched again. The local filepath and filename exist only together,
/// inside `Downloaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadState {
    NotRequested,
    Pending,
    Downloaded { filepath: String, filename: String },
    Failed,
}

/// One scraped course row, plus the state of its syllabus download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusRecord {
    pub term_name: String,
    /// Numeric term identifier, e.g. "1258". Used for filtering and filename
    /// derivation; deliberately absent from the exported columns.
    pub term_code: String,
    pub class_name: String,
    pub section: String,
    pub instructor: String,
    /// Absolute URL with any literal pipe percent-encoded, or "" if the row
    /// had no link.
    pub syllabus_web_url: String,
    pub download: DownloadState,
}

impl SyllabusRecord {
    pub fn local_filepath(&self) -> &str {
        match &self.download {
            DownloadState::Downloaded { filepath, .. } => filepath,
            _ => "",
        }
    }

    pub fn local_filename(&self) -> &str {
        match &self.download {
            DownloadState::Downloaded { filename, .. } => filename,
            _ => "",
        }
    }

    /// Borrowed view with exactly the exported fields, in export order.
    pub fn output_row(&self) -> OutputRow<'_> {
        OutputRow {
            term_name: &self.term_name,
            class_name: &self.class_name,
            section: &self.section,
            instructor: &self.instructor,
            syllabus_web_url: &self.syllabus_web_url,
            syllabus_local_filepath: self.local_filepath(),
            syllabus_local_filename: self.local_filename(),
        }
    }
}

/// Serialized shape shared by the CSV and JSON writers.
#[derive(Debug, Serialize)]
pub struct OutputRow<'a> {
    pub term_name: &'a str,
    pub class_name: &'a str,
    pub section: &'a str,
    pub instructor: &'a str,
    pub syllabus_web_url: &'a str,
    pub syllabus_local_filepath: &'a str,
    pub syllabus_local_filename: &'a str,
}

impl OutputRow<'_> {
    /// Field values in `OUTPUT_FIELDS` order, for row-oriented writers.
    pub fn values(&self) -> [&str; 7] {
        [
            self.term_name,
            self.class_name,
            self.section,
            self.instructor,
            self.syllabus_web_url,
            self.syllabus_local_filepath,
            self.syllabus_local_filename,
        ]
    }
}
