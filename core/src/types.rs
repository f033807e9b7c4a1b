//! Request payloads, the result envelope, and typed response shapes.
//!
//! # Design
//! Request structs borrow their inputs and exist only long enough to be
//! serialized; optional fields carry `skip_serializing_if` so an unset
//! parameter is absent from the wire rather than sent as `null` — the
//! service applies its own defaults. Response shapes are owned structs
//! defined independently of the mock server; integration tests catch any
//! schema drift between the two crates.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// Uniform result wrapper returned by every operation.
///
/// `status` and `status_text` are the literal HTTP status code and reason
/// phrase. `data` is the parsed JSON body — the documented shape on success,
/// the service's error body on a 4xx/5xx. The client never interprets the
/// status; that is the caller's decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: u16,
    pub status_text: String,
    pub data: Value,
}

impl Envelope {
    /// Deserialize `data` into one of the typed response shapes.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.data.clone())
            .map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Payload for the single-text operations (entities, sentiment, translation,
/// and friends).
#[derive(Debug, Serialize)]
pub struct TextRequest<'a> {
    pub text: &'a str,
}

/// Payload for the sentence-list operations (embeddings, semantic
/// similarity).
#[derive(Debug, Serialize)]
pub struct SentencesRequest<'a> {
    pub sentences: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct ClassificationRequest<'a> {
    pub text: &'a str,
    pub labels: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_class: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ChatbotRequest<'a> {
    pub input: &'a str,
    pub history: &'a [ChatExchange],
}

#[derive(Debug, Serialize)]
pub struct QuestionRequest<'a> {
    pub context: &'a str,
    pub question: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AdGenerationRequest<'a> {
    pub keywords: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub text: &'a str,
    #[serde(flatten)]
    pub params: &'a GenerationParams,
}

/// Sampling parameters for text generation. All fields are optional; the
/// service applies its own defaults for anything left unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_no_input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_sequence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_beams: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_stopping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_repeat_ngram_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_return_sequences: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_words: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_end_sequence: Option<bool>,
}

// ---------------------------------------------------------------------------
// Typed response shapes
// ---------------------------------------------------------------------------

/// One turn of a chatbot conversation. Appears both in the `chatbot` request
/// (prior history) and in its response (updated history); the client passes
/// it through unmodified in both directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatExchange {
    pub input: String,
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdGeneration {
    pub generated_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chatbot {
    pub response: String,
    pub history: Vec<ChatExchange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classification {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

/// A word with its part-of-speech tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependencies {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embeddings {
    pub score: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entity {
    pub start: usize,
    pub end: usize,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entities {
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Generation {
    pub generated_text: String,
    pub nb_generated_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GsCorrection {
    pub correction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntentClassification {
    pub intent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KwKpExtraction {
    pub keywords_and_keyphrases: Vec<String>,
}

/// Detected languages. Each element is an object mapping a language code to
/// a confidence score; the exact set of keys is model-dependent, so the
/// elements stay opaque.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Langdetection {
    pub languages: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paraphrasing {
    pub paraphrased_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub answer: String,
    pub score: f64,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemanticSimilarity {
    pub score: f64,
}

/// A labelled arc of a dependency parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyArc {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub text: String,
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DependencyGraph {
    pub words: Vec<Word>,
    pub arcs: Vec<DependencyArc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceDependency {
    pub sentence: String,
    pub dependencies: DependencyGraph,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SentenceDependencies {
    pub sentence_dependencies: Vec<SentenceDependency>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredLabel {
    pub label: String,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub scored_labels: Vec<ScoredLabel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Summarization {
    pub summary_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Translation {
    pub translation_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub start: usize,
    pub end: usize,
    pub index: usize,
    pub text: String,
    pub lemma: String,
    pub ws_after: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tokens {
    pub tokens: Vec<Token>,
}
