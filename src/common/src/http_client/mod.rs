use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Status, reason phrase and body text of a completed request.
#[derive(Debug, Clone)]
pub struct HttpReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub async fn send_http_body<T: Serialize + ?Sized>(
    client: &Client,
    url: &str,
    api_key: Option<&str>,
    request_body: &T,
) -> Result<HttpReply, reqwest::Error> {
    let mut request = client
        .post(url)
        .header("Content-Type", "application/json")
        .json(request_body);

    if let Some(api_key) = api_key {
        request = request.header("x-api-key", api_key);
    }

    let response = request.send().await?;

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    debug!("POST {} answered {}", url, status);

    Ok(HttpReply {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}
