//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every operation
//! through the executing client layer over real HTTP. Validates that request
//! building, transport, and envelope parsing work end-to-end, including the
//! cases where the server answers with an error status.

use std::net::SocketAddr;

use nlpcloud_core::{
    AdGeneration, ApiError, ChatExchange, Chatbot, Classification, Dependencies, Embeddings,
    Entities, Generation, GenerationParams, GsCorrection, IntentClassification, KwKpExtraction,
    Langdetection, NlpCloudClient, Paraphrasing, Question, SemanticSimilarity,
    SentenceDependencies, Sentiment, Summarization, Tokens, Translation,
};

async fn start_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        mock_server::run(listener).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr) -> NlpCloudClient {
    NlpCloudClient::with_base_url(
        &format!("http://{addr}"),
        "test-model",
        "test-token",
        false,
        None,
    )
}

#[tokio::test]
async fn classification_envelope_matches_documented_shape() {
    let addr = start_server().await;
    let client = client_for(addr);

    let labels = vec!["food".to_string(), "sports".to_string()];
    let envelope = client
        .classification("I love pizza", &labels, Some(false))
        .await
        .unwrap();

    assert_eq!(envelope.status, 200);
    assert_eq!(envelope.status_text, "OK");
    let data: Classification = envelope.decode().unwrap();
    assert_eq!(data.labels, labels);
    assert_eq!(data.scores.len(), 2);
    assert!(data.scores[0] > data.scores[1]);
}

#[tokio::test]
async fn chatbot_history_round_trips_between_calls() {
    let addr = start_server().await;
    let client = client_for(addr);

    // First turn with no history.
    let envelope = client.chatbot("Hello", &[]).await.unwrap();
    assert_eq!(envelope.status, 200);
    let first: Chatbot = envelope.decode().unwrap();
    assert_eq!(first.history.len(), 1);
    assert_eq!(first.history[0].input, "Hello");

    // Second turn feeds the returned history straight back in.
    let envelope = client.chatbot("What now?", &first.history).await.unwrap();
    let second: Chatbot = envelope.decode().unwrap();
    assert_eq!(second.history.len(), 2);
    assert_eq!(second.history[0], first.history[0]);
    assert_eq!(second.history[1].input, "What now?");
    assert_eq!(second.history[1].response, second.response);
}

#[tokio::test]
async fn error_status_rides_the_envelope() {
    let addr = start_server().await;
    let client = client_for(addr);

    let envelope = client.classification("text", &[], None).await.unwrap();

    assert_eq!(envelope.status, 422);
    assert_eq!(envelope.status_text, "Unprocessable Entity");
    assert_eq!(envelope.data["detail"], "labels cannot be empty");
}

#[tokio::test]
async fn missing_credentials_yield_a_401_envelope() {
    let addr = start_server().await;
    let client = NlpCloudClient::with_base_url(
        &format!("http://{addr}"),
        "test-model",
        "",
        false,
        None,
    );

    let envelope = client.sentiment("hi").await.unwrap();

    assert_eq!(envelope.status, 401);
    assert_eq!(envelope.status_text, "Unauthorized");
    assert_eq!(
        envelope.data["detail"],
        "Authentication credentials were not provided."
    );
}

#[tokio::test]
async fn transport_failure_rejects_without_an_envelope() {
    // Bind and immediately drop a listener so the port is free but nothing
    // accepts connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr);
    let err = client.sentiment("hi").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn lib_versions_returns_an_opaque_object() {
    let addr = start_server().await;
    let client = client_for(addr);

    let envelope = client.lib_versions().await.unwrap();

    assert_eq!(envelope.status, 200);
    assert!(envelope.data.is_object());
}

#[tokio::test]
async fn every_operation_round_trips() {
    let addr = start_server().await;
    let client = client_for(addr);

    // ad-generation
    let keywords = vec!["shoes".to_string(), "running".to_string()];
    let data: AdGeneration = client
        .ad_generation(&keywords)
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert!(data.generated_text.contains("shoes"));

    // dependencies
    let data: Dependencies = client
        .dependencies("The quick fox")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.words.len(), 3);
    assert_eq!(data.words[0].text, "The");

    // embeddings
    let sentences = vec!["One sentence.".to_string(), "Another one.".to_string()];
    let data: Embeddings = client
        .embeddings(&sentences)
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.score.len(), 2);
    assert!(!data.score[0].is_empty());

    // entities
    let data: Entities = client
        .entities("Paris is lovely")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.entities.len(), 1);
    assert_eq!(data.entities[0].text, "Paris");
    assert_eq!(data.entities[0].start, 0);
    assert_eq!(data.entities[0].end, 5);

    // generation
    let params = GenerationParams {
        max_length: Some(64),
        ..GenerationParams::default()
    };
    let data: Generation = client
        .generation("Once upon a time", &params)
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert!(data.generated_text.starts_with("Once upon a time"));
    assert!(data.nb_generated_tokens > 0);

    // gs-correction
    let data: GsCorrection = client
        .gs_correction("teh text")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.correction, "teh text");

    // intent-classification
    let data: IntentClassification = client
        .intent_classification("Can you help me?")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.intent, "question");

    // kw-kp-extraction
    let data: KwKpExtraction = client
        .kw_kp_extraction("quality running shoes")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert!(data
        .keywords_and_keyphrases
        .contains(&"quality".to_string()));

    // langdetection
    let data: Langdetection = client
        .langdetection("Bonjour tout le monde")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.languages.len(), 1);

    // paraphrasing
    let data: Paraphrasing = client
        .paraphrasing("Hello there")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert!(data.paraphrased_text.starts_with("In other words"));

    // question
    let data: Question = client
        .question("The capital of France is Paris", "What is the capital?")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.answer, "Paris");
    assert_eq!(
        &"The capital of France is Paris"[data.start..data.end],
        "Paris"
    );

    // semantic-similarity
    let pair = vec!["the cat sat".to_string(), "the cat slept".to_string()];
    let data: SemanticSimilarity = client
        .semantic_similarity(&pair)
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert!(data.score > 0.0 && data.score <= 1.0);

    // sentence-dependencies
    let data: SentenceDependencies = client
        .sentence_dependencies("Dogs bark loudly. Cats sleep.")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.sentence_dependencies.len(), 2);
    assert_eq!(data.sentence_dependencies[0].dependencies.words.len(), 3);
    assert_eq!(data.sentence_dependencies[0].dependencies.arcs.len(), 2);

    // sentiment
    let data: Sentiment = client
        .sentiment("I love pizza")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.scored_labels[0].label, "POSITIVE");

    // summarization
    let data: Summarization = client
        .summarization("one two three four five six seven eight nine ten eleven twelve")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.summary_text.split_whitespace().count(), 10);

    // translation
    let data: Translation = client
        .translation("Hello")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.translation_text, "(translated) Hello");

    // tokens
    let data: Tokens = client
        .tokens("Hello brave world")
        .await
        .unwrap()
        .decode()
        .unwrap();
    assert_eq!(data.tokens.len(), 3);
    assert_eq!(data.tokens[1].text, "brave");
    assert_eq!(data.tokens[1].start, 6);
    assert_eq!(data.tokens[1].end, 11);
    assert_eq!(data.tokens[1].index, 1);
    assert!(!data.tokens[2].ws_after);
}

#[tokio::test]
async fn concurrent_calls_share_one_client() {
    let addr = start_server().await;
    let client = client_for(addr);

    let (a, b, c) = tokio::join!(
        client.sentiment("great stuff"),
        client.translation("Hello"),
        client.summarization("short text"),
    );

    assert_eq!(a.unwrap().status, 200);
    assert_eq!(b.unwrap().status, 200);
    assert_eq!(c.unwrap().status, 200);
}

#[tokio::test]
async fn chatbot_exchange_types_round_trip() {
    let addr = start_server().await;
    let client = client_for(addr);

    let history = vec![ChatExchange {
        input: "Hi".to_string(),
        response: "You said: Hi".to_string(),
    }];
    let envelope = client.chatbot("Again", &history).await.unwrap();
    let data: Chatbot = envelope.decode().unwrap();
    assert_eq!(data.history[0], history[0]);
}
