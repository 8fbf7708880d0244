//! LLM Client (C9): turns retrieved chunks and a question into a cited
//! answer. Grounded on the prior Ollama chat integration in this
//! codebase — same request/timeout shape — generalized to the
//! numbered-context prompt, citation extraction, and answerability
//! scoring this pipeline needs.

use crate::config::LlmConfig;
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// One context passage handed to the model, numbered for citation.
#[derive(Debug, Clone)]
pub struct ContextPassage {
    pub text: String,
    pub document_id: uuid::Uuid,
    pub chunk_index: usize,
}

/// A citation recovered from the model's `[n]` reference markers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedCitation {
    pub index: usize,
    pub text_preview: String,
    pub document_id: uuid::Uuid,
    pub chunk_index: usize,
}

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generates an answer grounded in `contexts`, plus the citations its
    /// `[n]` markers resolve to.
    async fn generate_answer(
        &self,
        question: &str,
        contexts: &[ContextPassage],
    ) -> Result<(String, Vec<ExtractedCitation>)>;
}

fn citation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[(\d+)\]").unwrap())
}

/// Heuristic answerability score, independent of any LLM call:
/// `0.0` with no contexts at all, otherwise `0.3 + 0.5 * overlap`, where
/// `overlap` is the fraction of the question's alphanumeric words that
/// also appear in the concatenated context text. Capped at `1.0`.
pub fn check_answerability(question: &str, contexts: &[ContextPassage]) -> f32 {
    if contexts.is_empty() {
        return 0.0;
    }

    let query_words: HashSet<String> = words(question);
    if query_words.is_empty() {
        return 0.3;
    }

    let context_words: HashSet<String> = contexts.iter().flat_map(|c| words(&c.text)).collect();
    let overlap = query_words.intersection(&context_words).count() as f32 / query_words.len() as f32;

    (0.3 + 0.5 * overlap).min(1.0)
}

fn words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string())
        .collect()
}

/// Builds the numbered-context prompt: `"[{i+1}] {text}"` per passage,
/// joined with blank lines, followed by the question and an instruction
/// to cite sources with bracketed numbers.
pub fn build_prompt(question: &str, contexts: &[ContextPassage]) -> String {
    let numbered_context = contexts
        .iter()
        .enumerate()
        .map(|(i, c)| format!("[{}] {}", i + 1, c.text))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "Answer the question using only the information in the numbered context below. \
Cite the passages you used with their bracketed numbers, e.g. [1]. If the context does not \
contain enough information to answer, say so plainly.\n\nContext:\n{numbered_context}\n\nQuestion: {question}\n\nAnswer:"
    )
}

/// Extracts citations from an answer's `[n]` markers, resolving each to
/// the context passage it references. Out-of-range markers are ignored.
pub fn extract_citations(answer: &str, contexts: &[ContextPassage]) -> Vec<ExtractedCitation> {
    let mut seen = HashSet::new();
    let mut citations = Vec::new();
    for capture in citation_re().captures_iter(answer) {
        let Ok(index) = capture[1].parse::<usize>() else {
            continue;
        };
        if index == 0 || index > contexts.len() || !seen.insert(index) {
            continue;
        }
        let context = &contexts[index - 1];
        let preview: String = context.text.chars().take(200).collect();
        let preview = if context.text.chars().count() > 200 {
            format!("{preview}...")
        } else {
            preview
        };
        citations.push(ExtractedCitation {
            index,
            text_preview: preview,
            document_id: context.document_id,
            chunk_index: context.chunk_index,
        });
    }
    citations.sort_by_key(|c| c.index);
    citations
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    content: String,
}

pub struct OllamaLlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl OllamaLlmClient {
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build LLM HTTP client");
        Self { client, config }
    }

    fn api_url(&self) -> String {
        format!("{}/api/chat", self.config.ollama_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LlmClient for OllamaLlmClient {
    async fn generate_answer(
        &self,
        question: &str,
        contexts: &[ContextPassage],
    ) -> Result<(String, Vec<ExtractedCitation>)> {
        let prompt = build_prompt(question, contexts);
        debug!("generating answer over {} context passage(s)", contexts.len());

        let request = OllamaChatRequest {
            model: &self.config.default_model,
            messages: vec![OllamaMessage {
                role: "user",
                content: &prompt,
            }],
            stream: false,
            options: OllamaOptions {
                num_predict: self.config.max_tokens,
            },
        };

        let response = timeout(
            Duration::from_secs(self.config.timeout_secs),
            self.client.post(self.api_url()).json(&request).send(),
        )
        .await
        .map_err(|_| PipelineError::Generic(anyhow::anyhow!("LLM request timed out")))??;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Generic(anyhow::anyhow!(
                "LLM backend returned an error: {body}"
            )));
        }

        let parsed: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::Generic(anyhow::anyhow!("invalid LLM response: {e}")))?;

        let answer = parsed.message.content;
        let citations = extract_citations(&answer, contexts);
        Ok((answer, citations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn passage(text: &str) -> ContextPassage {
        ContextPassage {
            text: text.to_string(),
            document_id: Uuid::new_v4(),
            chunk_index: 0,
        }
    }

    #[test]
    fn test_answerability_zero_with_no_contexts() {
        assert_eq!(check_answerability("what is rust?", &[]), 0.0);
    }

    #[test]
    fn test_answerability_scales_with_overlap() {
        let contexts = vec![passage("rust is a systems programming language")];
        let score = check_answerability("what is rust", &contexts);
        assert!(score > 0.3 && score <= 1.0);
    }

    #[test]
    fn test_extract_citations_basic() {
        let contexts = vec![passage("first passage"), passage("second passage")];
        let answer = "Rust is fast [1] and safe [2].";
        let citations = extract_citations(answer, &contexts);
        assert_eq!(citations.len(), 2);
        assert_eq!(citations[0].index, 1);
        assert_eq!(citations[1].index, 2);
    }

    #[test]
    fn test_extract_citations_ignores_out_of_range_and_duplicates() {
        let contexts = vec![passage("only one passage")];
        let answer = "See [1] and also [1] again, plus [9] which doesn't exist.";
        let citations = extract_citations(answer, &contexts);
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].index, 1);
    }

    #[test]
    fn test_build_prompt_numbers_contexts() {
        let contexts = vec![passage("alpha"), passage("beta")];
        let prompt = build_prompt("what is alpha?", &contexts);
        assert!(prompt.contains("[1] alpha"));
        assert!(prompt.contains("[2] beta"));
    }
}
