// src/export/mod.rs

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::record::{OutputRow, SyllabusRecord, OUTPUT_FIELDS};

pub const CSV_FILENAME: &str = "syllabi_metadata.csv";
pub const JSON_FILENAME: &str = "syllabi_metadata.json";

/// Write the row-oriented artifact: header plus one row per record, UTF-8.
/// The header is written even when there are no records.
pub fn write_csv(records: &[SyllabusRecord], out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join(CSV_FILENAME);

    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(OUTPUT_FIELDS)?;
    for record in records {
        writer.write_record(record.output_row().values())?;
    }
    writer
        .flush()
        .with_context(|| format!("flushing {}", path.display()))?;
    Ok(path)
}

/// Write the single array-of-objects artifact. serde_json keeps non-ASCII
/// text unescaped, which is what the metadata (instructor names) needs.
pub fn write_json(records: &[SyllabusRecord], out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    let path = out_dir.join(JSON_FILENAME);

    let rows: Vec<OutputRow> = records.iter().map(|r| r.output_row()).collect();
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &rows)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
