// src/extract/pagination.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

static REL_NEXT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[rel="next"]"#).expect("rel=next selector should parse"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("anchor selector should parse"));

/// Find a "next page" link and resolve it against the current page URL.
///
/// Checks, in order: `rel="next"`, anchor text containing "Next", anchor text
/// containing "»". The target site does not paginate today; this exists so a
/// future change cannot silently truncate results.
pub fn find_next_page(doc: &Html, page_url: &Url) -> Option<Url> {
    let href = doc
        .select(&REL_NEXT_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .next()
        .or_else(|| anchor_href_with_text(doc, "Next"))
        .or_else(|| anchor_href_with_text(doc, "»"))?;
    page_url.join(href.trim()).ok()
}

fn anchor_href_with_text<'a>(doc: &'a Html, needle: &str) -> Option<&'a str> {
    doc.select(&ANCHOR_SELECTOR)
        .find(|a| a.text().collect::<String>().contains(needle))
        .and_then(|a| a.value().attr("href"))
}
