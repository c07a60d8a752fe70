use crate::exporters::error::SubmitError;
use crate::exporters::log_writer::LogWriter;
use anyhow::{Context, Result};
use exlog_common::http_client::send_http_body;
use exlog_common::LogEnvelope;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// Posts envelopes to an HTTP endpoint as JSON.
pub struct LogForward {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl LogForward {
    pub fn try_new(log_forward_endpoint: &str, api_key: Option<&str>) -> Result<Self> {
        let endpoint = Url::parse(log_forward_endpoint)
            .with_context(|| format!("Invalid log endpoint: {}", log_forward_endpoint))?;

        Ok(LogForward {
            endpoint: endpoint.to_string(),
            api_key: api_key.map(str::to_string),
            client: Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl LogWriter for LogForward {
    async fn log(&self, envelope: &LogEnvelope) -> Result<Value, SubmitError> {
        let now = std::time::Instant::now();

        debug!(
            "Sending {} record to {}",
            envelope.channel(),
            self.endpoint
        );

        let reply = send_http_body(
            &self.client,
            &self.endpoint,
            self.api_key.as_deref(),
            envelope,
        )
        .await?;

        if !reply.is_success() {
            return Err(SubmitError::server_error(
                reply.status,
                &reply.status_text,
                &reply.body,
            ));
        }

        info!(
            "Successfully sent {} record, elapsed: {:?}",
            envelope.channel(),
            now.elapsed()
        );

        if reply.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&reply.body).unwrap_or(Value::String(reply.body)))
    }
}
