//! Integration tests for doc2beat using wiremock

use doc2beat::table::{read_input_records, write_result_records};
use doc2beat::{
    ChatClient, ChatRequest, Fetcher, HttpFetcher, InputRecord, LlmError, OpenRouterClient,
    Pipeline, PromptVariant,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOC_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><title>Install</title><script>var tracking = 1;</script></head>
<body>
    <nav><a href="/">Home</a> <a href="/blog">Blog</a></nav>
    <main>
        <h1>Installing the agent</h1>
        <p>Download the package and run <code>agent init</code>.</p>
    </main>
    <footer>Copyright 2024 Example Corp. All rights reserved.</footer>
</body>
</html>"#;

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "gen-123",
        "model": "test/model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    }))
}

/// Route pipeline logs to the test output; RUST_LOG=doc2beat=debug to see them
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client_for(server: &MockServer) -> Arc<OpenRouterClient> {
    Arc::new(OpenRouterClient::new("sk-test").with_base_url(server.uri()))
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/install"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DOC_HTML, "text/html"))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new().unwrap();
    let body = fetcher
        .fetch(&format!("{}/docs/install", mock_server.uri()))
        .await;

    assert_eq!(body, DOC_HTML);
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "doc2beat-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::with_user_agent("doc2beat-test/1.0").unwrap();
    assert_eq!(fetcher.fetch(&mock_server.uri()).await, "ok");
}

#[tokio::test]
async fn test_fetch_http_error_becomes_placeholder() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let fetcher = HttpFetcher::new().unwrap();

    assert_eq!(
        fetcher.fetch(&url).await,
        format!("[Could not fetch content from {}]", url)
    );
    assert!(matches!(
        fetcher.try_fetch(&url).await,
        Err(doc2beat::FetchError::HttpStatus(404))
    ));
}

#[tokio::test]
async fn test_fetch_unreachable_host_becomes_placeholder() {
    let url = "http://127.0.0.1:9/docs";
    let fetcher = HttpFetcher::new().unwrap();

    let content = fetcher.fetch(url).await;

    assert!(content.contains("[Could not fetch content from http://127.0.0.1:9/docs]"));
}

#[tokio::test]
async fn test_chat_completion_request_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "test/model",
            "messages": [
                {"role": "system", "content": "be brief"},
                {"role": "user", "content": "hello"}
            ],
            "temperature": 0.5
        })))
        .respond_with(completion("Hi there"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ChatRequest::new("test/model", "be brief", "hello").temperature(0.5);

    assert_eq!(client.chat_completion(request).await.unwrap(), "Hi there");
}

#[tokio::test]
async fn test_chat_completion_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("No auth credentials found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .chat_completion(ChatRequest::new("m", "s", "u"))
        .await
        .unwrap_err();

    match err {
        LlmError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "No auth credentials found");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_chat_completion_empty_and_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("null please"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": null}}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("garbage please"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let err = client
        .chat_completion(ChatRequest::new("m", "s", "null please"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));

    let err = client
        .chat_completion(ChatRequest::new("m", "s", "garbage please"))
        .await
        .unwrap_err();
    assert!(matches!(err, LlmError::Parse(_)));
}

#[tokio::test]
async fn test_pipeline_end_to_end() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/install"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DOC_HTML, "text/html"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("style prompts"))
        .respond_with(completion("  Upbeat bluegrass with banjo and harmonies  "))
        .with_priority(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Installing the agent"))
        .and(body_string_contains("Upbeat bluegrass with banjo and harmonies"))
        .respond_with(completion("Download the package, run agent init"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::builder(client_for(&mock_server), "test/model")
        .build()
        .unwrap();
    let url = format!("{}/docs/install", mock_server.uri());

    let result = pipeline
        .process_single_input(&InputRecord::new(&url))
        .await
        .unwrap();

    assert_eq!(result.document_url, url);
    assert_eq!(result.song_style, "Upbeat bluegrass with banjo and harmonies");
    assert_eq!(result.song_lyrics, "Download the package, run agent init");
}

#[tokio::test]
async fn test_pipeline_extracted_content_excludes_chrome() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/install"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DOC_HTML, "text/html"))
        .mount(&mock_server)
        .await;

    // any lyrics request still carrying page chrome is rejected
    Mock::given(method("POST"))
        .and(body_string_contains("var tracking"))
        .respond_with(ResponseTemplate::new(400))
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("Clean lyrics"))
        .mount(&mock_server)
        .await;

    let pipeline = Pipeline::builder(client_for(&mock_server), "test/model")
        .variant(PromptVariant::ExtraCreative)
        .build()
        .unwrap();
    let input = InputRecord::new(format!("{}/docs/install", mock_server.uri())).with_style("Funk");

    let result = pipeline.process_single_input(&input).await.unwrap();
    assert_eq!(result.song_lyrics, "Clean lyrics");
}

#[tokio::test]
async fn test_batch_csv_round_trip() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/docs/install"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(DOC_HTML, "text/html"))
        .mount(&mock_server)
        .await;

    // style requests are never made: every row supplies a style
    Mock::given(method("POST"))
        .and(body_string_contains("style prompts"))
        .respond_with(completion("unused"))
        .with_priority(1)
        .expect(0)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(body_string_contains("Rate limited style"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .with_priority(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("Sing the install steps"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("input.csv");
    let output_path = dir.path().join("output.csv");
    let doc_url = format!("{}/docs/install", mock_server.uri());
    let missing_url = format!("{}/docs/missing", mock_server.uri());
    std::fs::write(
        &input_path,
        format!(
            "document_url,song_style\n{doc_url},Sea shanty\n{doc_url},Rate limited style\n{missing_url},Disco\n"
        ),
    )
    .unwrap();

    let inputs = read_input_records(&input_path).unwrap();
    let pipeline = Pipeline::builder(client_for(&mock_server), "test/model")
        .build()
        .unwrap();
    let report = pipeline.process_multiple_inputs(&inputs).await;
    write_result_records(&output_path, &report.results).unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed(), 1);

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let rows: Vec<doc2beat::ResultRecord> = reader.deserialize().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].document_url, doc_url);
    assert_eq!(rows[0].song_style, "Sea shanty");
    assert_eq!(rows[0].song_lyrics, "Sing the install steps");

    assert_eq!(rows[1].song_style, "Rate limited style");
    assert_eq!(
        rows[1].song_lyrics,
        "Error processing: lyrics generation failed: API error (HTTP 429): Rate limit exceeded"
    );

    // unfetchable page still produces lyrics from the placeholder text
    assert_eq!(rows[2].document_url, missing_url);
    assert_eq!(rows[2].song_lyrics, "Sing the install steps");
}
