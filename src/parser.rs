//! Parser (C8): extracts canonical plain text from a document's source,
//! regardless of where it came from, so that checksumming and chunking
//! downstream never need to know about source type.

use crate::error::{PipelineError, Result};
use sha2::{Digest, Sha256};
use std::time::Duration;

/// Computes the SHA-256 hex digest of canonical parsed text. Applied
/// uniformly to every source type, including URLs — the page's rendered
/// text is checksummed, not the URL string, closing the gap where the
/// original implementation skipped deduplication for URL ingests.
pub fn checksum(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn parse_text(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| PipelineError::Parse(format!("invalid UTF-8 text: {e}")))
}

pub fn parse_markdown(bytes: &[u8]) -> Result<String> {
    parse_text(bytes)
}

#[cfg(feature = "pdf")]
pub fn parse_pdf(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PipelineError::Parse(format!("failed to extract PDF text: {e}")))
}

#[cfg(not(feature = "pdf"))]
pub fn parse_pdf(_bytes: &[u8]) -> Result<String> {
    Err(PipelineError::Parse(
        "PDF parsing support was not compiled into this build".to_string(),
    ))
}

/// Fetches a URL and extracts its readable text and title. A minimal,
/// dependency-free HTML-to-text pass: strip `<script>`/`<style>` blocks,
/// strip remaining tags, collapse whitespace.
pub async fn parse_url(url: &str, timeout_secs: u64) -> Result<(String, Option<String>)> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| PipelineError::Parse(format!("failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PipelineError::Parse(format!("failed to fetch {url}: {e}")))?;

    if !response.status().is_success() {
        return Err(PipelineError::Parse(format!(
            "fetching {url} returned status {}",
            response.status()
        )));
    }

    let html = response
        .text()
        .await
        .map_err(|e| PipelineError::Parse(format!("failed to read response body: {e}")))?;

    let title = extract_title(&html);
    let text = html_to_text(&html);
    Ok((text, title))
}

fn extract_title(html: &str) -> Option<String> {
    let lower = html.to_lowercase();
    let start = lower.find("<title>")? + "<title>".len();
    let end = lower[start..].find("</title>")? + start;
    let title = html[start..end].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

fn strip_blocks(html: &str, tag: &str) -> String {
    let open = format!("<{tag}");
    let close = format!("</{tag}>");
    let lower = html.to_lowercase();
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0usize;

    while let Some(start_rel) = lower[cursor..].find(&open) {
        let start = cursor + start_rel;
        out.push_str(&html[cursor..start]);
        match lower[start..].find(&close) {
            Some(end_rel) => cursor = start + end_rel + close.len(),
            None => return out,
        }
    }
    out.push_str(&html[cursor..]);
    out
}

fn html_to_text(html: &str) -> String {
    let without_scripts = strip_blocks(html, "script");
    let without_styles = strip_blocks(&without_scripts, "style");

    let mut text = String::with_capacity(without_styles.len());
    let mut in_tag = false;
    for ch in without_styles.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_is_deterministic() {
        assert_eq!(checksum("hello"), checksum("hello"));
        assert_ne!(checksum("hello"), checksum("world"));
    }

    #[test]
    fn test_parse_text_roundtrip() {
        let text = parse_text(b"hello world").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_parse_text_rejects_invalid_utf8() {
        assert!(parse_text(&[0xff, 0xfe, 0xfd]).is_err());
    }

    #[test]
    fn test_html_to_text_strips_tags_and_scripts() {
        let html = "<html><head><title>Hi</title><style>.a{}</style></head><body><p>Hello <b>world</b></p><script>evil()</script></body></html>";
        let text = html_to_text(html);
        assert_eq!(text, "Hi Hello world");
        assert_eq!(extract_title(html), Some("Hi".to_string()));
    }

    #[test]
    fn test_extract_title_absent() {
        assert_eq!(extract_title("<html><body>no title</body></html>"), None);
    }
}
