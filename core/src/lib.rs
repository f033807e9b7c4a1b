//! Asynchronous API client core for the NLP service.
//!
//! # Overview
//! Each operation serializes a typed payload, POSTs it to a fixed path under
//! the client's root URL, and returns the parsed JSON body wrapped in a
//! uniform [`Envelope`] carrying the literal HTTP status. Error statuses are
//! not errors: a 4xx/5xx resolves normally with the service's error body in
//! `Envelope::data`, leaving interpretation to the caller.
//!
//! # Design
//! - `NlpCloudClient` is stateless between calls — it holds only the derived
//!   root URL, the two static headers, and a shared `reqwest::Client`.
//! - Each operation is split into `build_*` (produces a plain-data
//!   `HttpRequest`) and an executing `async` method, so the contract layer
//!   is testable without a network.
//! - The operation table is one enum (`Operation`); builders never hardcode
//!   paths at call sites.
//! - Response shapes are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod operation;
pub mod transport;
pub mod types;

pub use client::NlpCloudClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operation::Operation;
pub use types::{
    AdGeneration, ChatExchange, Chatbot, Classification, Dependencies, DependencyArc,
    DependencyGraph, Embeddings, Entities, Entity, Envelope, Generation, GenerationParams,
    GsCorrection, IntentClassification, KwKpExtraction, Langdetection, Paraphrasing, Question,
    ScoredLabel, SemanticSimilarity, SentenceDependencies, SentenceDependency, Sentiment,
    Summarization, Token, Tokens, Translation, Word,
};
