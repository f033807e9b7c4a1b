use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

// Request DTOs mirror the core crate's payloads but are defined
// independently. Integration tests catch any schema drift between the two
// crates.

#[derive(Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct SentencesRequest {
    pub sentences: Vec<String>,
}

#[derive(Deserialize)]
pub struct ClassificationRequest {
    pub text: String,
    pub labels: Vec<String>,
    #[serde(default)]
    pub multi_class: Option<bool>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub input: String,
    pub response: String,
}

#[derive(Deserialize)]
pub struct ChatbotRequest {
    pub input: String,
    #[serde(default)]
    pub history: Vec<ChatExchange>,
}

#[derive(Deserialize)]
pub struct GenerationRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct QuestionRequest {
    pub context: String,
    pub question: String,
}

#[derive(Deserialize)]
pub struct AdGenerationRequest {
    pub keywords: Vec<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/v1/{model}/lib-versions", get(lib_versions))
        .route("/v1/{model}/{op}", post(dispatch))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty())
}

fn error(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn parse<T: DeserializeOwned>(body: Value) -> Result<T, Response> {
    serde_json::from_value(body)
        .map_err(|e| error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string()))
}

async fn lib_versions(Path(_model): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        );
    }
    Json(json!({
        "torch": "2.3.0",
        "transformers": "4.41.0",
        "spacy": "3.7.4",
    }))
    .into_response()
}

async fn dispatch(
    Path((_model, op)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return error(
            StatusCode::UNAUTHORIZED,
            "Authentication credentials were not provided.",
        );
    }
    let result = match op.as_str() {
        "ad-generation" => ad_generation(body),
        "chatbot" => chatbot(body),
        "classification" => classification(body),
        "dependencies" => dependencies(body),
        "embeddings" => embeddings(body),
        "entities" => entities(body),
        "generation" => generation(body),
        "gs-correction" => gs_correction(body),
        "intent-classification" => intent_classification(body),
        "kw-kp-extraction" => kw_kp_extraction(body),
        "langdetection" => langdetection(body),
        "paraphrasing" => paraphrasing(body),
        "question" => question(body),
        "semantic-similarity" => semantic_similarity(body),
        "sentence-dependencies" => sentence_dependencies(body),
        "sentiment" => sentiment(body),
        "summarization" => summarization(body),
        "translation" => translation(body),
        "tokens" => tokens(body),
        _ => return error(StatusCode::NOT_FOUND, "unknown operation"),
    };
    match result {
        Ok(value) => Json(value).into_response(),
        Err(response) => response,
    }
}

fn ad_generation(body: Value) -> Result<Value, Response> {
    let req: AdGenerationRequest = parse(body)?;
    Ok(json!({
        "generated_text": format!("Discover {}.", req.keywords.join(", ")),
    }))
}

fn chatbot(body: Value) -> Result<Value, Response> {
    let req: ChatbotRequest = parse(body)?;
    let response = format!("You said: {}", req.input);
    let mut history = req.history;
    history.push(ChatExchange {
        input: req.input,
        response: response.clone(),
    });
    Ok(json!({ "response": response, "history": history }))
}

fn classification(body: Value) -> Result<Value, Response> {
    let req: ClassificationRequest = parse(body)?;
    if req.labels.is_empty() {
        return Err(error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "labels cannot be empty",
        ));
    }
    // Descending scores normalized to sum to 1.
    let n = req.labels.len();
    let total = (n * (n + 1) / 2) as f64;
    let scores: Vec<f64> = (0..n).map(|i| (n - i) as f64 / total).collect();
    Ok(json!({ "labels": req.labels, "scores": scores }))
}

fn dependencies(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    Ok(json!({ "words": tag_words(&req.text) }))
}

fn embeddings(body: Value) -> Result<Value, Response> {
    let req: SentencesRequest = parse(body)?;
    let score: Vec<Vec<f64>> = req
        .sentences
        .iter()
        .map(|s| {
            vec![
                s.len() as f64,
                s.split_whitespace().count() as f64,
                0.5,
            ]
        })
        .collect();
    Ok(json!({ "score": score }))
}

fn entities(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let entities: Vec<Value> = req
        .text
        .split_whitespace()
        .next()
        .map(|word| {
            let start = req.text.find(word).unwrap_or(0);
            json!({
                "start": start,
                "end": start + word.len(),
                "type": "MISC",
                "text": word,
            })
        })
        .into_iter()
        .collect();
    Ok(json!({ "entities": entities }))
}

fn generation(body: Value) -> Result<Value, Response> {
    let req: GenerationRequest = parse(body)?;
    let generated_text = format!("{} and then some.", req.text);
    let nb_generated_tokens = generated_text.split_whitespace().count();
    Ok(json!({
        "generated_text": generated_text,
        "nb_generated_tokens": nb_generated_tokens,
    }))
}

fn gs_correction(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    Ok(json!({ "correction": req.text }))
}

fn intent_classification(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let intent = if req.text.contains('?') {
        "question"
    } else {
        "statement"
    };
    Ok(json!({ "intent": intent }))
}

fn kw_kp_extraction(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let mut keywords: Vec<&str> = Vec::new();
    for word in req.text.split_whitespace() {
        if word.len() > 4 && !keywords.contains(&word) {
            keywords.push(word);
        }
    }
    Ok(json!({ "keywords_and_keyphrases": keywords }))
}

fn langdetection(body: Value) -> Result<Value, Response> {
    let _req: TextRequest = parse(body)?;
    Ok(json!({ "languages": [{ "en": 0.99 }] }))
}

fn paraphrasing(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    Ok(json!({ "paraphrased_text": format!("In other words, {}", req.text) }))
}

fn question(body: Value) -> Result<Value, Response> {
    let req: QuestionRequest = parse(body)?;
    let answer = req.context.split_whitespace().last().unwrap_or_default();
    let start = req.context.rfind(answer).unwrap_or(0);
    Ok(json!({
        "answer": answer,
        "score": 0.87,
        "start": start,
        "end": start + answer.len(),
    }))
}

fn semantic_similarity(body: Value) -> Result<Value, Response> {
    let req: SentencesRequest = parse(body)?;
    if req.sentences.len() != 2 {
        return Err(error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "exactly two sentences are required",
        ));
    }
    Ok(json!({ "score": word_overlap(&req.sentences[0], &req.sentences[1]) }))
}

fn sentence_dependencies(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let sentence_dependencies: Vec<Value> = req
        .text
        .split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let arcs: Vec<Value> = words
                .windows(2)
                .enumerate()
                .map(|(i, pair)| {
                    json!({
                        "start": i,
                        "end": i + 1,
                        "label": "dep",
                        "text": pair[1],
                        "dir": "right",
                    })
                })
                .collect();
            json!({
                "sentence": sentence,
                "dependencies": { "words": tag_words(sentence), "arcs": arcs },
            })
        })
        .collect();
    Ok(json!({ "sentence_dependencies": sentence_dependencies }))
}

fn sentiment(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let lower = req.text.to_lowercase();
    let (label, score) = if ["love", "great", "good", "excellent"]
        .iter()
        .any(|w| lower.contains(w))
    {
        ("POSITIVE", 0.95)
    } else if ["hate", "bad", "terrible"].iter().any(|w| lower.contains(w)) {
        ("NEGATIVE", 0.85)
    } else {
        ("NEUTRAL", 0.6)
    };
    Ok(json!({ "scored_labels": [{ "label": label, "score": score }] }))
}

fn summarization(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    let summary: Vec<&str> = req.text.split_whitespace().take(10).collect();
    Ok(json!({ "summary_text": summary.join(" ") }))
}

fn translation(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    Ok(json!({ "translation_text": format!("(translated) {}", req.text) }))
}

fn tokens(body: Value) -> Result<Value, Response> {
    let req: TextRequest = parse(body)?;
    Ok(json!({ "tokens": tokenize(&req.text) }))
}

/// Whitespace tokenization with byte offsets into the original text.
fn tokenize(text: &str) -> Vec<Value> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    for (index, word) in text.split_whitespace().enumerate() {
        let start = text[pos..].find(word).map_or(pos, |i| pos + i);
        let end = start + word.len();
        tokens.push(json!({
            "start": start,
            "end": end,
            "index": index,
            "text": word,
            "lemma": word.to_lowercase(),
            "ws_after": text[end..].starts_with(char::is_whitespace),
        }));
        pos = end;
    }
    tokens
}

fn tag_words(text: &str) -> Vec<Value> {
    text.split_whitespace()
        .map(|w| json!({ "text": w, "tag": tag_for(w) }))
        .collect()
}

fn tag_for(word: &str) -> &'static str {
    if word.ends_with("ly") {
        "RB"
    } else if word.chars().next().is_some_and(char::is_uppercase) {
        "NNP"
    } else {
        "NN"
    }
}

/// Jaccard overlap of the lowercased word sets of two sentences.
fn word_overlap(a: &str, b: &str) -> f64 {
    let set_a: Vec<String> = a.to_lowercase().split_whitespace().map(String::from).collect();
    let set_b: Vec<String> = b.to_lowercase().split_whitespace().map(String::from).collect();
    if set_a.is_empty() && set_b.is_empty() {
        return 1.0;
    }
    let shared = set_a.iter().filter(|w| set_b.contains(w)).count();
    let union = set_a.len() + set_b.len() - shared;
    if union == 0 {
        return 1.0;
    }
    shared as f64 / union as f64
}
