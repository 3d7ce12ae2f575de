// src/fetch/mod.rs

pub mod filename;
pub mod files;

use anyhow::{Context, Result};
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// PHP backend; keep the delay human-ish.
const MIN_DELAY_MS: u64 = 500;
const MAX_DELAY_MS: u64 = 1500;

/// Build the shared HTTP client: browser-ish default headers, gzip, no
/// cookies (a stale session is worse than none for this site).
pub fn build_client() -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

    Client::builder()
        .user_agent(concat!("syllascrape/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("building HTTP client")
}

/// Randomized inter-request delay, 0.5–1.5 s.
pub async fn polite_delay() {
    let millis = rand::thread_rng().gen_range(MIN_DELAY_MS..=MAX_DELAY_MS);
    sleep(Duration::from_millis(millis)).await;
}

/// GET a page and return its body, retrying transport errors up to
/// `MAX_RETRIES` times. HTTP error statuses are not retried; the site
/// answers 200 or is down.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match client.get(url.clone()).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(body) => return Ok(body),
                Err(_) if attempt < MAX_RETRIES => sleep(RETRY_DELAY).await,
                Err(e) => return Err(e).with_context(|| format!("reading body from {}", url)),
            },
            Ok(resp) => {
                return Err(anyhow::anyhow!("HTTP error {} from {}", resp.status(), url));
            }
            Err(_) if attempt < MAX_RETRIES => sleep(RETRY_DELAY).await,
            Err(e) => return Err(e).with_context(|| format!("GET {}", url)),
        }
    }
}
