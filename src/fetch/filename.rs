// src/fetch/filename.rs

use once_cell::sync::Lazy;
use regex::Regex;
use sha1::{Digest, Sha1};
use url::Url;

use crate::extract::split_class;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W").expect("non-word regex should parse"));

/// Hex characters of SHA-1 kept for the fallback file id.
const HASH_ID_LEN: usize = 12;

/// Derive the deterministic local filename for a syllabus download:
/// `{term_code}_{dept}_{number}_{file_id}.{ext}`.
///
/// The download URLs carry a `file` query parameter shaped like `ID|HASH`,
/// with the pipe sometimes percent-encoded. The leading ID is the stable part
/// and becomes the file id. URLs without a usable `file` parameter fall back
/// to a 12-hex-char SHA-1 prefix of the whole URL; collision-resistant, not
/// collision-proof, and that is accepted.
pub fn derive_filename(url: &str, term_code: &str, class_name: &str) -> String {
    let term_code = term_code.trim();
    let term_code = if term_code.is_empty() { "0000" } else { term_code };

    let (dept_token, number_token) = split_class(class_name);
    let dept = if dept_token.is_empty() {
        "UNKNOWN".to_string()
    } else {
        NON_WORD.replace_all(&dept_token, "").into_owned()
    };
    let number = if number_token.is_empty() {
        "0".to_string()
    } else {
        NON_WORD.replace_all(&number_token, "").into_owned()
    };

    let parsed = Url::parse(url).ok();

    let file_id = parsed
        .as_ref()
        .and_then(file_param_id)
        .unwrap_or_else(|| hash_id(url));

    let ext = parsed
        .as_ref()
        .map(|u| extension_for_path(u.path()))
        .unwrap_or("pdf");

    format!("{}_{}_{}_{}.{}", term_code, dept, number, file_id, ext)
}

/// The part of the `file` query parameter before the first pipe, if any.
/// `query_pairs` already percent-decodes; the extra `%7C` replacement covers
/// a doubly encoded pipe.
fn file_param_id(url: &Url) -> Option<String> {
    let value = url
        .query_pairs()
        .find(|(k, _)| k == "file")
        .map(|(_, v)| v.into_owned())?;
    let decoded = value.replace("%7C", "|");
    decoded
        .split_once('|')
        .map(|(id, _)| id.trim().to_string())
}

fn hash_id(url: &str) -> String {
    let digest = format!("{:x}", Sha1::digest(url.as_bytes()));
    digest[..HASH_ID_LEN].to_string()
}

fn extension_for_path(path: &str) -> &'static str {
    let path = path.to_lowercase();
    if path.ends_with(".docx") {
        "docx"
    } else if path.ends_with(".doc") {
        "doc"
    } else {
        "pdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOWNLOAD_URL: &str =
        "https://syllabus.uconn.edu/public/download.php?file=10|abc123";

    #[test]
    fn builds_filename_from_metadata_and_file_id() {
        assert_eq!(
            derive_filename(DOWNLOAD_URL, "1258", "CSE 3666"),
            "1258_CSE_3666_10.pdf"
        );
    }

    #[test]
    fn deterministic_for_same_inputs() {
        let a = derive_filename(DOWNLOAD_URL, "1258", "CSE 3666");
        let b = derive_filename(DOWNLOAD_URL, "1258", "CSE 3666");
        assert_eq!(a, b);
    }

    #[test]
    fn encoded_and_literal_pipe_agree() {
        let encoded = "https://syllabus.uconn.edu/public/download.php?file=123%7Cabc";
        let literal = "https://syllabus.uconn.edu/public/download.php?file=123|abc";
        assert_eq!(
            derive_filename(encoded, "1258", "CSE 3666"),
            derive_filename(literal, "1258", "CSE 3666")
        );
        assert!(derive_filename(encoded, "1258", "CSE 3666").contains("_123."));
    }

    #[test]
    fn missing_pipe_falls_back_to_sha1_prefix() {
        let url = "https://syllabus.uconn.edu/public/download.php?file=naked";
        let name = derive_filename(url, "1258", "CSE 3666");
        let expected = format!("{:x}", Sha1::digest(url.as_bytes()));
        let id = name
            .strip_prefix("1258_CSE_3666_")
            .and_then(|s| s.strip_suffix(".pdf"))
            .unwrap();
        assert_eq!(id.len(), 12);
        assert_eq!(id, &expected[..12]);
    }

    #[test]
    fn missing_file_param_falls_back_to_sha1_prefix() {
        let url = "https://syllabus.uconn.edu/public/download.php?other=1";
        let name = derive_filename(url, "1258", "CSE 3666");
        let id = name
            .strip_prefix("1258_CSE_3666_")
            .and_then(|s| s.strip_suffix(".pdf"))
            .unwrap();
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn extension_from_url_path() {
        assert!(derive_filename(
            "https://x.example/files/syllabus.DOCX?file=1|h",
            "1258",
            "CSE 3666"
        )
        .ends_with(".docx"));
        assert!(derive_filename(
            "https://x.example/files/syllabus.doc?file=1|h",
            "1258",
            "CSE 3666"
        )
        .ends_with(".doc"));
        assert!(derive_filename(
            "https://x.example/download.php?file=1|h",
            "1258",
            "CSE 3666"
        )
        .ends_with(".pdf"));
    }

    #[test]
    fn defaults_for_missing_metadata() {
        assert_eq!(derive_filename(DOWNLOAD_URL, "", ""), "0000_UNKNOWN_0_10.pdf");
        assert_eq!(
            derive_filename(DOWNLOAD_URL, " 1258 ", "CSE"),
            "1258_CSE_0_10.pdf"
        );
    }

    #[test]
    fn strips_non_word_characters_from_class_tokens() {
        assert_eq!(
            derive_filename(DOWNLOAD_URL, "1258", "C.S.E. 3666-W"),
            "1258_CSE_3666W_10.pdf"
        );
    }

    #[test]
    fn trims_file_id() {
        let url = "https://syllabus.uconn.edu/public/download.php?file=%2010%20|abc";
        assert_eq!(derive_filename(url, "1258", "CSE 3666"), "1258_CSE_3666_10.pdf");
    }
}
