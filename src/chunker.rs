//! Token-aware chunking (C2)
//!
//! Splits UTF-8 text into token-bounded, overlapping chunks that respect
//! paragraph, sentence and heading boundaries, following
//! `examples/original_source/backend/app/core/chunking.py`.

use crate::config::ChunkerConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tiktoken_rs::CoreBPE;

/// How a chunk's boundary was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkMethod {
    ParagraphSplit,
    SentenceSplit,
    FinalChunk,
}

/// Typed side-map for the optional per-chunk annotations the spec's
/// "dynamic dicts -> tagged variants" design note calls for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkMeta {
    pub chunk_method: Option<ChunkMethod>,
    pub has_overlap: bool,
    pub header: Option<String>,
    pub oversize: bool,
}

/// A single emitted chunk, before persistence assigns it a document/chunk id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawChunk {
    pub text: String,
    pub chunk_index: usize,
    pub token_count: usize,
    pub start_char: usize,
    pub end_char: usize,
    pub meta: ChunkMeta,
}

fn paragraph_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{2,}").unwrap())
}

fn sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?:[.!?])\s+").unwrap())
}

fn header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap())
}

fn bpe() -> &'static CoreBPE {
    static BPE: OnceLock<CoreBPE> = OnceLock::new();
    BPE.get_or_init(|| tiktoken_rs::cl100k_base().expect("cl100k_base encoder"))
}

/// Count tokens using a `cl100k_base`-equivalent BPE encoder. Never a
/// byte-length heuristic.
pub fn count_tokens(text: &str) -> usize {
    bpe().encode_ordinary(text).len()
}

/// Splits UTF-8 text into token-bounded, overlapping chunks.
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Plain-text chunking: paragraph accumulation, falling back to
    /// sentence-level splitting for any paragraph that alone exceeds
    /// `chunk_size`.
    pub fn chunk_text(&self, text: &str) -> Vec<RawChunk> {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut cursor = 0usize; // byte offset into `cleaned` of the next unconsumed char
        let mut current = String::new();
        let mut current_tokens = 0usize;
        let mut current_method = ChunkMethod::ParagraphSplit;
        let mut pending_overlap: Option<(String, ChunkMethod)> = None;

        let paragraphs: Vec<&str> = paragraph_re().split(cleaned).collect();

        for para in paragraphs {
            let para = para.trim();
            if para.is_empty() {
                continue;
            }
            let para_tokens = count_tokens(para);

            if para_tokens > self.config.chunk_size {
                // Oversize paragraph: split on sentence boundaries.
                let sentences: Vec<&str> = sentence_re()
                    .split(para)
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();

                for sentence in sentences {
                    let sentence_tokens = count_tokens(sentence);
                    if current_tokens > 0
                        && current_tokens + sentence_tokens > self.config.chunk_size
                    {
                        cursor = self.emit(
                            &mut chunks,
                            cleaned,
                            cursor,
                            &current,
                            current_tokens,
                            current_method,
                        );
                        pending_overlap = self.overlap_seed(&current, current_method);
                        current = String::new();
                        current_tokens = 0;
                        if let Some((seed, method)) = pending_overlap.take() {
                            current = seed;
                            current_tokens = count_tokens(&current);
                            current_method = method;
                        }
                    }
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(sentence);
                    current_tokens = count_tokens(&current);
                    current_method = ChunkMethod::SentenceSplit;

                    if sentence_tokens > self.config.chunk_size {
                        // A single sentence alone exceeds the budget; emit
                        // it as-is, flagged oversize, and start fresh.
                        cursor = self.emit_oversize(&mut chunks, cleaned, cursor, &current);
                        current = String::new();
                        current_tokens = 0;
                    }
                }
            } else {
                if current_tokens > 0 && current_tokens + para_tokens > self.config.chunk_size {
                    cursor = self.emit(
                        &mut chunks,
                        cleaned,
                        cursor,
                        &current,
                        current_tokens,
                        current_method,
                    );
                    pending_overlap = self.overlap_seed(&current, current_method);
                    current = String::new();
                    current_tokens = 0;
                    if let Some((seed, method)) = pending_overlap.take() {
                        current = seed;
                        current_tokens = count_tokens(&current);
                        current_method = method;
                    }
                }
                if !current.is_empty() {
                    current.push_str("\n\n");
                }
                current.push_str(para);
                current_tokens = count_tokens(&current);
                current_method = ChunkMethod::ParagraphSplit;
            }
        }

        if !current.trim().is_empty() {
            self.emit_final(&mut chunks, cleaned, cursor, &current, current_tokens);
        }

        chunks
    }

    /// Overlap seed carried into the next chunk: last paragraph (paragraph
    /// mode) or last two sentences (sentence mode). Disabled entirely when
    /// `chunk_overlap == 0`.
    fn overlap_seed(&self, emitted: &str, method: ChunkMethod) -> Option<(String, ChunkMethod)> {
        if self.config.chunk_overlap == 0 {
            return None;
        }
        match method {
            ChunkMethod::ParagraphSplit => {
                let last_para = emitted.rsplit("\n\n").next().unwrap_or(emitted).trim();
                if last_para.is_empty() {
                    None
                } else {
                    Some((last_para.to_string(), ChunkMethod::ParagraphSplit))
                }
            }
            ChunkMethod::SentenceSplit | ChunkMethod::FinalChunk => {
                let sentences: Vec<&str> = sentence_re()
                    .split(emitted)
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                    .collect();
                let tail: Vec<&str> = sentences
                    .iter()
                    .rev()
                    .take(2)
                    .rev()
                    .copied()
                    .collect();
                if tail.is_empty() {
                    None
                } else {
                    Some((tail.join(" "), ChunkMethod::SentenceSplit))
                }
            }
        }
    }

    fn emit(
        &self,
        chunks: &mut Vec<RawChunk>,
        source: &str,
        search_from: usize,
        text: &str,
        token_count: usize,
        method: ChunkMethod,
    ) -> usize {
        let trimmed = text.trim();
        let start_char = find_offset(source, search_from, trimmed);
        let end_char = start_char + trimmed.len();
        chunks.push(RawChunk {
            text: trimmed.to_string(),
            chunk_index: chunks.len(),
            token_count,
            start_char,
            end_char,
            meta: ChunkMeta {
                chunk_method: Some(method),
                has_overlap: !chunks.is_empty(),
                header: None,
                oversize: false,
            },
        });
        end_char
    }

    fn emit_oversize(
        &self,
        chunks: &mut Vec<RawChunk>,
        source: &str,
        search_from: usize,
        text: &str,
    ) -> usize {
        let trimmed = text.trim();
        let start_char = find_offset(source, search_from, trimmed);
        let end_char = start_char + trimmed.len();
        chunks.push(RawChunk {
            text: trimmed.to_string(),
            chunk_index: chunks.len(),
            token_count: count_tokens(trimmed),
            start_char,
            end_char,
            meta: ChunkMeta {
                chunk_method: Some(ChunkMethod::SentenceSplit),
                has_overlap: !chunks.is_empty(),
                header: None,
                oversize: true,
            },
        });
        end_char
    }

    fn emit_final(
        &self,
        chunks: &mut Vec<RawChunk>,
        source: &str,
        search_from: usize,
        text: &str,
        token_count: usize,
    ) {
        let trimmed = text.trim();
        let start_char = find_offset(source, search_from, trimmed);
        let end_char = start_char + trimmed.len();
        let oversize = token_count > self.config.chunk_size;
        chunks.push(RawChunk {
            text: trimmed.to_string(),
            chunk_index: chunks.len(),
            token_count,
            start_char,
            end_char,
            meta: ChunkMeta {
                chunk_method: Some(ChunkMethod::FinalChunk),
                has_overlap: !chunks.is_empty(),
                header: None,
                oversize,
            },
        });
    }

    /// Markdown-aware chunking: partitions by ATX headers first, chunks each
    /// section independently, then reassigns `chunk_index` 0-based across
    /// the whole document. Each section's chunk offsets are shifted by the
    /// section's own byte offset into the post-clean document, so
    /// `start_char`/`end_char` stay monotonically non-decreasing across the
    /// reassigned `chunk_index`, not just within one section.
    pub fn chunk_markdown(&self, markdown: &str) -> Vec<RawChunk> {
        let cleaned = markdown.trim();
        if cleaned.is_empty() {
            return Vec::new();
        }

        // (header, body slice, byte offset of that slice within `cleaned`)
        let mut sections: Vec<(Option<String>, &str, usize)> = Vec::new();
        let mut current_header: Option<String> = None;
        let mut body_start: Option<usize> = None;
        let mut offset = 0usize;

        for line in cleaned.split_inclusive('\n') {
            let line_offset = offset;
            offset += line.len();
            let trimmed_line = line.trim_end_matches('\n');

            if let Some(caps) = header_re().captures(trimmed_line) {
                if let Some(start) = body_start {
                    sections.push((current_header.take(), &cleaned[start..line_offset], start));
                }
                current_header = Some(caps[2].trim().to_string());
                body_start = Some(offset);
            } else if body_start.is_none() {
                body_start = Some(line_offset);
            }
        }
        if let Some(start) = body_start {
            sections.push((current_header, &cleaned[start..], start));
        }

        let mut all_chunks = Vec::new();
        for (header, body, section_offset) in sections {
            if body.trim().is_empty() {
                continue;
            }
            // `chunk_text` trims its input before computing offsets, so a
            // section whose body has leading whitespace (a blank line right
            // after a header) needs that stripped length folded into the
            // document-level offset too.
            let leading_trim = body.len() - body.trim_start().len();
            let mut section_chunks = self.chunk_text(body);
            for chunk in &mut section_chunks {
                chunk.meta.header = header.clone();
                chunk.start_char += section_offset + leading_trim;
                chunk.end_char += section_offset + leading_trim;
            }
            all_chunks.extend(section_chunks);
        }

        for (i, chunk) in all_chunks.iter_mut().enumerate() {
            chunk.chunk_index = i;
            chunk.meta.has_overlap = i > 0;
        }

        all_chunks
    }
}

/// Finds the byte offset of `needle` in `haystack`, searching forward from
/// `from`. Falls back to `from` if not found (can happen once overlap text
/// duplicates characters already consumed).
fn find_offset(haystack: &str, from: usize, needle: &str) -> usize {
    if needle.is_empty() {
        return from;
    }
    let safe_from = from.min(haystack.len());
    haystack[safe_from..]
        .find(needle)
        .map(|pos| safe_from + pos)
        .unwrap_or(safe_from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(chunk_size: usize, overlap: usize) -> Chunker {
        Chunker::new(ChunkerConfig {
            chunk_size,
            chunk_overlap: overlap,
        })
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let c = chunker(800, 200);
        assert!(c.chunk_text("   \n\n  ").is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let c = chunker(800, 200);
        let chunks = c.chunk_text("This is a short paragraph.");
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chunk_index, 0);
        assert!(!chunks[0].meta.has_overlap);
    }

    #[test]
    fn test_chunk_index_dense_from_zero() {
        let c = chunker(20, 5);
        let text = (0..12)
            .map(|i| format!("Paragraph number {i} has a handful of words in it to use up tokens."))
            .collect::<Vec<_>>()
            .join("\n\n");
        let chunks = c.chunk_text(&text);
        assert!(chunks.len() >= 3, "expected multiple chunks, got {}", chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
        }
    }

    #[test]
    fn test_start_char_monotonic_and_not_the_buggy_formula() {
        let c = chunker(15, 3);
        let text = "Alpha beta gamma delta.\n\nEpsilon zeta eta theta.\n\nIota kappa lambda mu.";
        let chunks = c.chunk_text(text);
        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            assert!(pair[1].start_char >= pair[0].start_char);
        }
        // The buggy original formula would make start_char equal the
        // concatenated length of *all prior chunks' text*, not an offset
        // into source. Confirm start_char values stay within source bounds.
        for chunk in &chunks {
            assert!(chunk.start_char <= text.len());
            assert!(chunk.end_char <= text.len() + chunk.text.len());
        }
    }

    #[test]
    fn test_oversize_sentence_flagged() {
        let c = chunker(3, 0);
        let long_sentence = "word ".repeat(50) + ".";
        let chunks = c.chunk_text(&long_sentence);
        assert!(chunks.iter().any(|c| c.meta.oversize));
    }

    #[test]
    fn test_chunk_markdown_headers_and_reindex() {
        let c = chunker(800, 100);
        let markdown = "# Header One\nContent under header one.\n\n## Header Two\nContent under header two.";
        let chunks = c.chunk_markdown(markdown);
        assert!(!chunks.is_empty());
        assert_eq!(chunks[0].meta.header.as_deref(), Some("Header One"));
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
        }
    }

    #[test]
    fn test_chunk_markdown_start_char_monotonic_across_sections() {
        let c = chunker(15, 0);
        let markdown = "# H1\nfoo bar baz qux alpha beta gamma.\n\n## H2\nbaz qux delta epsilon zeta eta.";
        let chunks = c.chunk_markdown(markdown);
        assert!(chunks.len() > 1);
        for pair in chunks.windows(2) {
            assert!(
                pair[1].start_char >= pair[0].start_char,
                "start_char regressed across reassigned chunk_index: {} then {}",
                pair[0].start_char,
                pair[1].start_char
            );
        }
        // The H2 section's chunk(s) must be offset past the end of H1's text,
        // not restarted near byte 0 of H2's own local body.
        let h2_start = markdown.find("## H2").unwrap();
        let first_h2_chunk = chunks.iter().find(|c| c.meta.header.as_deref() == Some("H2")).unwrap();
        assert!(first_h2_chunk.start_char >= h2_start);
    }

    #[test]
    fn test_no_overlap_when_disabled() {
        let c = chunker(10, 0);
        let text = "First paragraph here now.\n\nSecond paragraph follows after.\n\nThird one arrives too.";
        let chunks = c.chunk_text(text);
        assert!(chunks.len() > 1);
    }

    #[test]
    fn test_token_counting_is_not_byte_length() {
        // "tokenization" is one longer word; token count should be far
        // smaller than its byte length for ordinary English text.
        let text = "internationalization and tokenization are both long words";
        assert!(count_tokens(text) < text.len());
    }
}
