// src/extract/mod.rs
//
// Pure HTML extraction: every function here maps a parsed document (or plain
// strings) to structured data, with no I/O, so the whole module can be unit
// tested against literal HTML fixtures.

pub mod class;
pub mod columns;
pub mod pagination;
pub mod rows;
pub mod terms;

pub use class::split_class;
pub use columns::ColumnMap;
pub use pagination::find_next_page;
pub use rows::{parse_results_table, TableRow};
pub use terms::{extract_term_options, TermOption};
