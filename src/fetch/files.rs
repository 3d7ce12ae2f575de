// src/fetch/files.rs

use anyhow::{Context, Result};
use reqwest::{header::REFERER, Client};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Download `url` into `dest_dir` under the caller-supplied `filename`,
/// sending the given Referer (the download endpoint 404s without one).
/// Returns the full path of the saved file.
pub async fn download_file(
    client: &Client,
    url: &str,
    dest_dir: impl AsRef<Path>,
    filename: &str,
    referer: &str,
) -> Result<PathBuf> {
    let dest_path = dest_dir.as_ref().join(filename);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let resp = client
        .get(url)
        .header(REFERER, referer)
        .send()
        .await
        .with_context(|| format!("GET {}", url))?
        .error_for_status()
        .with_context(|| format!("downloading {}", url))?;
    let bytes = resp.bytes().await?;
    fs::write(&dest_path, &bytes)
        .await
        .with_context(|| format!("writing {}", dest_path.display()))?;

    Ok(dest_path)
}
