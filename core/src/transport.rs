//! Async executor mapping plain-data requests onto reqwest.
//!
//! # Design
//! Error statuses are returned as data, never as `Err`: a 4xx/5xx still
//! carries a body the caller wants to see, so status interpretation stays
//! with the client layer. Only transport-level failures — DNS, connection,
//! reading the body — produce `Err`. No timeout is configured here; callers
//! who need one configure it on the `reqwest::Client` they pass in.

use tracing::debug;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Execute an `HttpRequest` and return the response as plain data.
pub async fn execute(
    client: &reqwest::Client,
    request: &HttpRequest,
) -> Result<HttpResponse, reqwest::Error> {
    debug!(method = ?request.method, path = %request.path, "sending request");

    let mut builder = match request.method {
        HttpMethod::Get => client.get(&request.path),
        HttpMethod::Post => client.post(&request.path),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(body) = &request.body {
        builder = builder.body(body.clone());
    }

    let response = builder.send().await?;
    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.text().await?;

    debug!(status = status.as_u16(), "received response");

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body,
    })
}
