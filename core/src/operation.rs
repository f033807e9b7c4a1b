//! Static table of remote operations.
//!
//! # Design
//! Every capability of the API is one `Operation` variant mapping to a fixed
//! endpoint path and method. Keeping the table in one enum means request
//! building never hardcodes a path at a call site, and tests can sweep the
//! whole surface through `Operation::ALL`.

use crate::http::HttpMethod;

/// One named remote capability with a fixed request/response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AdGeneration,
    Chatbot,
    Classification,
    Dependencies,
    Embeddings,
    Entities,
    Generation,
    GsCorrection,
    IntentClassification,
    KwKpExtraction,
    Langdetection,
    LibVersions,
    Paraphrasing,
    Question,
    SemanticSimilarity,
    SentenceDependencies,
    Sentiment,
    Summarization,
    Translation,
    Tokens,
}

impl Operation {
    /// Every operation, for table-driven tests.
    pub const ALL: [Operation; 20] = [
        Operation::AdGeneration,
        Operation::Chatbot,
        Operation::Classification,
        Operation::Dependencies,
        Operation::Embeddings,
        Operation::Entities,
        Operation::Generation,
        Operation::GsCorrection,
        Operation::IntentClassification,
        Operation::KwKpExtraction,
        Operation::Langdetection,
        Operation::LibVersions,
        Operation::Paraphrasing,
        Operation::Question,
        Operation::SemanticSimilarity,
        Operation::SentenceDependencies,
        Operation::Sentiment,
        Operation::Summarization,
        Operation::Translation,
        Operation::Tokens,
    ];

    /// Endpoint path segment under the client's root URL.
    pub fn path(self) -> &'static str {
        match self {
            Operation::AdGeneration => "ad-generation",
            Operation::Chatbot => "chatbot",
            Operation::Classification => "classification",
            Operation::Dependencies => "dependencies",
            Operation::Embeddings => "embeddings",
            Operation::Entities => "entities",
            Operation::Generation => "generation",
            Operation::GsCorrection => "gs-correction",
            Operation::IntentClassification => "intent-classification",
            Operation::KwKpExtraction => "kw-kp-extraction",
            Operation::Langdetection => "langdetection",
            Operation::LibVersions => "lib-versions",
            Operation::Paraphrasing => "paraphrasing",
            Operation::Question => "question",
            Operation::SemanticSimilarity => "semantic-similarity",
            Operation::SentenceDependencies => "sentence-dependencies",
            Operation::Sentiment => "sentiment",
            Operation::Summarization => "summarization",
            Operation::Translation => "translation",
            Operation::Tokens => "tokens",
        }
    }

    /// HTTP method for the operation. Only the version listing is a GET.
    pub fn method(self) -> HttpMethod {
        match self {
            Operation::LibVersions => HttpMethod::Get,
            _ => HttpMethod::Post,
        }
    }
}
