use anyhow::Result;
use clap::Parser;
use std::fs;
use syllascrape::{
    config::{self, CrawlConfig},
    crawl::Crawler,
    export, fetch,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Scrape UConn's public syllabus search: course metadata to CSV/JSON, with
/// the linked syllabus files downloaded alongside.
#[derive(Parser)]
#[command(name = "syllascrape", version)]
struct Cli {
    /// Comma-separated term codes to scrape (default: all discovered terms).
    #[arg(long)]
    target_terms: Option<String>,

    /// Comma-separated department codes to keep, case-insensitive
    /// (default: all departments).
    #[arg(long)]
    target_depts: Option<String>,

    /// Skip file downloads; export metadata only.
    #[arg(long)]
    no_download: bool,

    /// Directory for the CSV/JSON metadata artifacts.
    #[arg(long, default_value = "output")]
    out_dir: std::path::PathBuf,

    /// Directory for downloaded syllabus files.
    #[arg(long, default_value = "syllabi_downloads")]
    files_dir: std::path::PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) parse args into the crawl config ─────────────────────────
    let cli = Cli::parse();
    let config = CrawlConfig {
        target_terms: cli.target_terms.as_deref().and_then(config::parse_code_list),
        target_depts: cli.target_depts.as_deref().and_then(config::parse_dept_list),
        no_download: cli.no_download,
        out_dir: cli.out_dir,
        files_dir: cli.files_dir,
    };
    if let Some(terms) = &config.target_terms {
        info!("filtering to terms: {:?}", terms);
    }
    if let Some(depts) = &config.target_depts {
        info!("filtering to depts: {:?}", depts);
    }
    if config.no_download {
        info!("download mode: off (metadata only)");
    }

    fs::create_dir_all(&config.out_dir)?;
    if !config.no_download {
        fs::create_dir_all(&config.files_dir)?;
    }

    // ─── 3) crawl ────────────────────────────────────────────────────
    let client = fetch::build_client()?;
    let records = Crawler::new(client, config.clone()).run().await?;
    info!("{} records scraped", records.len());

    // ─── 4) export ───────────────────────────────────────────────────
    let csv_path = export::write_csv(&records, &config.out_dir)?;
    info!("csv written: {}", csv_path.display());
    let json_path = export::write_json(&records, &config.out_dir)?;
    info!("json written: {}", json_path.display());

    info!("all done");
    Ok(())
}
