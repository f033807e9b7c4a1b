//! Stateless HTTP request builder, executor, and response parser for the
//! NLP API.
//!
//! # Design
//! `NlpCloudClient` captures its configuration once — the derived root URL,
//! the two static headers, and a shared `reqwest::Client` — and carries no
//! mutable state between calls. Every operation is split into a `build_*`
//! method that produces an `HttpRequest` and a same-named `async` method
//! that executes it and parses the response. All builders funnel through
//! `build_request`, and every response goes through the one `parse_response`,
//! so the request/response contract lives in one tested place.
//!
//! The parse step does not branch on the status code: a 4xx/5xx resolves
//! like a 200, with the service's error body passed through in
//! `Envelope::data`. Only transport failures and non-JSON bodies are errors.

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::transport;
use crate::types::{
    AdGenerationRequest, ChatExchange, ChatbotRequest, ClassificationRequest, Envelope,
    GenerationParams, GenerationRequest, QuestionRequest, SentencesRequest, TextRequest,
};

const DEFAULT_BASE_URL: &str = "https://api.nlpcloud.io";
const API_VERSION: &str = "v1";
const USER_AGENT: &str = "nlpcloud-rust-client";

/// Asynchronous client for the NLP API.
///
/// Configuration is immutable after construction and the client is `Clone`;
/// concurrent calls from clones or shared references are independent. Each
/// call performs exactly one network round-trip — no retries, no caching.
#[derive(Debug, Clone)]
pub struct NlpCloudClient {
    http: reqwest::Client,
    root_url: String,
    headers: Vec<(String, String)>,
}

impl NlpCloudClient {
    /// Create a client for `model`, authenticating with `token`. `gpu`
    /// selects the GPU compute tier; `lang` selects a language-specific
    /// endpoint when the model has one.
    pub fn new(model: &str, token: &str, gpu: bool, lang: Option<&str>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, model, token, gpu, lang)
    }

    /// Same as [`NlpCloudClient::new`] against a different base address.
    /// Lets tests point the same URL derivation at a local server.
    pub fn with_base_url(
        base_url: &str,
        model: &str,
        token: &str,
        gpu: bool,
        lang: Option<&str>,
    ) -> Self {
        let mut root_url = format!("{}/{API_VERSION}", base_url.trim_end_matches('/'));
        if gpu {
            root_url.push_str("/gpu");
        }
        if let Some(lang) = lang {
            root_url.push('/');
            root_url.push_str(lang);
        }
        root_url.push('/');
        root_url.push_str(model);

        Self {
            http: reqwest::Client::new(),
            root_url,
            headers: vec![
                ("authorization".to_string(), format!("Bearer {token}")),
                ("user-agent".to_string(), USER_AGENT.to_string()),
            ],
        }
    }

    /// The derived endpoint root: `<base>/v1[/gpu][/<lang>]/<model>`.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    fn build_request(&self, op: Operation, body: Option<String>) -> HttpRequest {
        let mut headers = self.headers.clone();
        if body.is_some() {
            headers.push(("content-type".to_string(), "application/json".to_string()));
        }
        HttpRequest {
            method: op.method(),
            path: format!("{}/{}", self.root_url, op.path()),
            headers,
            body,
        }
    }

    fn build_json<T: Serialize>(&self, op: Operation, payload: &T) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(self.build_request(op, Some(body)))
    }

    fn build_text(&self, op: Operation, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_json(op, &TextRequest { text })
    }

    /// Wrap an `HttpResponse` into the uniform envelope. The body must be
    /// JSON; the status code is recorded, not interpreted.
    pub fn parse_response(&self, response: HttpResponse) -> Result<Envelope, ApiError> {
        let data = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(Envelope {
            status: response.status,
            status_text: response.status_text,
            data,
        })
    }

    async fn call(&self, request: HttpRequest) -> Result<Envelope, ApiError> {
        let response = transport::execute(&self.http, &request).await?;
        self.parse_response(response)
    }

    // -----------------------------------------------------------------------
    // Request builders, one per operation
    // -----------------------------------------------------------------------

    pub fn build_ad_generation(&self, keywords: &[String]) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::AdGeneration, &AdGenerationRequest { keywords })
    }

    pub fn build_chatbot(
        &self,
        input: &str,
        history: &[ChatExchange],
    ) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Chatbot, &ChatbotRequest { input, history })
    }

    pub fn build_classification(
        &self,
        text: &str,
        labels: &[String],
        multi_class: Option<bool>,
    ) -> Result<HttpRequest, ApiError> {
        self.build_json(
            Operation::Classification,
            &ClassificationRequest {
                text,
                labels,
                multi_class,
            },
        )
    }

    pub fn build_dependencies(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Dependencies, text)
    }

    pub fn build_embeddings(&self, sentences: &[String]) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Embeddings, &SentencesRequest { sentences })
    }

    pub fn build_entities(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Entities, text)
    }

    pub fn build_generation(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Generation, &GenerationRequest { text, params })
    }

    pub fn build_gs_correction(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::GsCorrection, text)
    }

    pub fn build_intent_classification(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::IntentClassification, text)
    }

    pub fn build_kw_kp_extraction(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::KwKpExtraction, text)
    }

    pub fn build_langdetection(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Langdetection, text)
    }

    pub fn build_lib_versions(&self) -> HttpRequest {
        self.build_request(Operation::LibVersions, None)
    }

    pub fn build_paraphrasing(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Paraphrasing, text)
    }

    pub fn build_question(&self, context: &str, question: &str) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::Question, &QuestionRequest { context, question })
    }

    pub fn build_semantic_similarity(&self, sentences: &[String]) -> Result<HttpRequest, ApiError> {
        self.build_json(Operation::SemanticSimilarity, &SentencesRequest { sentences })
    }

    pub fn build_sentence_dependencies(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::SentenceDependencies, text)
    }

    pub fn build_sentiment(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Sentiment, text)
    }

    pub fn build_summarization(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Summarization, text)
    }

    pub fn build_translation(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Translation, text)
    }

    pub fn build_tokens(&self, text: &str) -> Result<HttpRequest, ApiError> {
        self.build_text(Operation::Tokens, text)
    }

    // -----------------------------------------------------------------------
    // Executing methods, one per operation
    // -----------------------------------------------------------------------

    /// Generate marketing copy from product keywords.
    pub async fn ad_generation(&self, keywords: &[String]) -> Result<Envelope, ApiError> {
        self.call(self.build_ad_generation(keywords)?).await
    }

    /// One conversational turn. `history` is passed through as plain data;
    /// feed the history returned in the response into the next call to
    /// continue the conversation — the client itself stores nothing.
    pub async fn chatbot(
        &self,
        input: &str,
        history: &[ChatExchange],
    ) -> Result<Envelope, ApiError> {
        self.call(self.build_chatbot(input, history)?).await
    }

    /// Classify `text` against candidate `labels`. With `multi_class` unset
    /// the parameter is omitted and the service default applies.
    pub async fn classification(
        &self,
        text: &str,
        labels: &[String],
        multi_class: Option<bool>,
    ) -> Result<Envelope, ApiError> {
        self.call(self.build_classification(text, labels, multi_class)?)
            .await
    }

    pub async fn dependencies(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_dependencies(text)?).await
    }

    pub async fn embeddings(&self, sentences: &[String]) -> Result<Envelope, ApiError> {
        self.call(self.build_embeddings(sentences)?).await
    }

    pub async fn entities(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_entities(text)?).await
    }

    /// Generate text from a prompt. Unset sampling parameters are omitted
    /// from the payload; the service applies its own defaults.
    pub async fn generation(
        &self,
        text: &str,
        params: &GenerationParams,
    ) -> Result<Envelope, ApiError> {
        self.call(self.build_generation(text, params)?).await
    }

    /// Grammar and spelling correction.
    pub async fn gs_correction(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_gs_correction(text)?).await
    }

    pub async fn intent_classification(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_intent_classification(text)?).await
    }

    /// Keyword and keyphrase extraction.
    pub async fn kw_kp_extraction(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_kw_kp_extraction(text)?).await
    }

    pub async fn langdetection(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_langdetection(text)?).await
    }

    /// Versions of the libraries backing the configured model.
    pub async fn lib_versions(&self) -> Result<Envelope, ApiError> {
        self.call(self.build_lib_versions()).await
    }

    pub async fn paraphrasing(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_paraphrasing(text)?).await
    }

    /// Extractive question answering over `context`.
    pub async fn question(&self, context: &str, question: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_question(context, question)?).await
    }

    /// Similarity score between exactly two sentences.
    pub async fn semantic_similarity(&self, sentences: &[String]) -> Result<Envelope, ApiError> {
        self.call(self.build_semantic_similarity(sentences)?).await
    }

    pub async fn sentence_dependencies(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_sentence_dependencies(text)?).await
    }

    pub async fn sentiment(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_sentiment(text)?).await
    }

    pub async fn summarization(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_summarization(text)?).await
    }

    pub async fn translation(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_translation(text)?).await
    }

    /// Tokenization and lemmatization.
    pub async fn tokens(&self, text: &str) -> Result<Envelope, ApiError> {
        self.call(self.build_tokens(text)?).await
    }
}
