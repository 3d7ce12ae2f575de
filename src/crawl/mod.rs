// src/crawl/mod.rs
//
// The spider. Two fetch phases: one request for the term dropdown, then one
// request per term for its results table (plus any next-page links, which the
// site does not currently emit). Parsing and filtering are pure per-response
// computations; only file downloads overlap, bounded by a small semaphore.

use anyhow::{Context, Result};
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::time::Instant;
use tracing::{error, info, warn};
use url::Url;

use crate::config::CrawlConfig;
use crate::extract::{
    extract_term_options, find_next_page, parse_results_table, split_class, TermOption,
};
use crate::fetch::{self, filename::derive_filename};
use crate::record::{DownloadState, SyllabusRecord};

pub const BASE_URL: &str = "https://syllabus.uconn.edu/public/";
pub const TERM_LIST_PAGE: &str = "search_term.php";

const DOWNLOAD_CONCURRENCY: usize = 2;

pub struct Crawler {
    client: Client,
    config: CrawlConfig,
}

impl Crawler {
    pub fn new(client: Client, config: CrawlConfig) -> Self {
        Crawler { client, config }
    }

    /// Run the full crawl and return every record in scrape order.
    pub async fn run(&self) -> Result<Vec<SyllabusRecord>> {
        let term_list_url = term_list_url()?;

        let body = fetch::fetch_page(&self.client, &term_list_url)
            .await
            .context("fetching term list page")?;
        let terms = extract_term_options(&Html::parse_document(&body));
        if terms.is_empty() {
            warn!("no term options found at {}; nothing to crawl", term_list_url);
            return Ok(Vec::new());
        }
        info!("{} terms discovered", terms.len());

        let mut records = Vec::new();
        for term in terms {
            if !self.config.term_allowed(&term.code) {
                continue;
            }
            self.scrape_term(&term, &term_list_url, &mut records).await;
        }
        Ok(records)
    }

    /// Phase 2 for one term: results page, dept filter, downloads, and the
    /// pagination guard. Page failures are logged and skipped so one bad term
    /// cannot sink the crawl.
    async fn scrape_term(
        &self,
        term: &TermOption,
        term_list_url: &Url,
        records: &mut Vec<SyllabusRecord>,
    ) {
        info!(code = %term.code, label = %term.label, "scraping term");

        let mut page_url = {
            let mut u = term_list_url.clone();
            u.query_pairs_mut().append_pair("term", &term.code);
            u
        };

        loop {
            fetch::polite_delay().await;
            let body = match fetch::fetch_page(&self.client, &page_url).await {
                Ok(body) => body,
                Err(e) => {
                    error!("term {} page {} failed: {:#}", term.code, page_url, e);
                    return;
                }
            };

            let (mut page_records, next_page) = {
                let doc = Html::parse_document(&body);
                let page_records = build_records(&doc, &page_url, term, &self.config);
                (page_records, find_next_page(&doc, &page_url))
            };
            info!(
                code = %term.code,
                "{} records after filters",
                page_records.len()
            );

            if let Err(e) = self
                .download_pending(&mut page_records, term_list_url.as_str())
                .await
            {
                error!("term {} downloads aborted: {:#}", term.code, e);
            }
            records.append(&mut page_records);

            match next_page {
                Some(next) => {
                    info!("following next page {}", next);
                    page_url = next;
                }
                None => return,
            }
        }
    }

    /// Fetch every `Pending` record's file, at most `DOWNLOAD_CONCURRENCY` in
    /// flight. Filenames are derived here, after term_code/class_name are
    /// fixed on the record. A failed download leaves the record exported with
    /// empty local fields.
    async fn download_pending(
        &self,
        records: &mut [SyllabusRecord],
        referer: &str,
    ) -> Result<()> {
        let sem = Arc::new(Semaphore::new(DOWNLOAD_CONCURRENCY));
        let mut handles = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            if record.download != DownloadState::Pending {
                continue;
            }
            let filename =
                derive_filename(&record.syllabus_web_url, &record.term_code, &record.class_name);
            let client = self.client.clone();
            let url = record.syllabus_web_url.clone();
            let files_dir = self.config.files_dir.clone();
            let referer = referer.to_string();
            let sem = sem.clone();

            handles.push(tokio::spawn(async move {
                let _permit = sem.acquire().await.expect("download semaphore closed");
                fetch::polite_delay().await;
                let start = Instant::now();
                match fetch::files::download_file(&client, &url, &files_dir, &filename, &referer)
                    .await
                {
                    Ok(path) => {
                        info!(file = %filename, elapsed = ?start.elapsed(), "downloaded");
                        (
                            idx,
                            DownloadState::Downloaded {
                                filepath: path.to_string_lossy().into_owned(),
                                filename,
                            },
                        )
                    }
                    Err(e) => {
                        error!("download {} failed: {:#}", url, e);
                        (idx, DownloadState::Failed)
                    }
                }
            }));
        }

        for handle in futures::future::join_all(handles).await {
            let (idx, state) = handle.context("download task panicked")?;
            records[idx].download = state;
        }
        Ok(())
    }
}

fn term_list_url() -> Result<Url> {
    Url::parse(BASE_URL)
        .and_then(|base| base.join(TERM_LIST_PAGE))
        .context("building term list URL")
}

/// Turn one results page into records: parse rows, apply the department
/// filter, resolve absolute syllabus URLs (percent-encoding any literal
/// pipe), and set the initial download state. Pure; unit-tested on fixtures.
pub fn build_records(
    doc: &Html,
    page_url: &Url,
    term: &TermOption,
    config: &CrawlConfig,
) -> Vec<SyllabusRecord> {
    let mut records = Vec::new();
    for row in parse_results_table(doc) {
        let (dept, _) = split_class(&row.class_name);
        if !config.dept_allowed(&dept) {
            continue;
        }

        let web_url = if row.href.is_empty() {
            String::new()
        } else {
            match page_url.join(&row.href) {
                Ok(abs) => abs.to_string().replace('|', "%7C"),
                Err(e) => {
                    warn!("unresolvable href {:?} for {}: {}", row.href, row.class_name, e);
                    String::new()
                }
            }
        };

        let download = if web_url.is_empty() || config.no_download {
            DownloadState::NotRequested
        } else {
            DownloadState::Pending
        };

        records.push(SyllabusRecord {
            term_name: term.label.clone(),
            term_code: term.code.clone(),
            class_name: row.class_name,
            section: row.section,
            instructor: row.instructor,
            syllabus_web_url: web_url,
            download,
        });
    }
    records
}
