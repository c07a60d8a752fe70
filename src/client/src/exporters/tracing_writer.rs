use crate::exporters::error::SubmitError;
use crate::exporters::log_writer::LogWriter;
use exlog_common::LogEnvelope;
use serde_json::Value;
use tracing::info;

/// Writes envelopes to the tracing output instead of a backend. Used for dry
/// runs and local development.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogWriter;

impl LogWriter for TracingLogWriter {
    async fn log(&self, envelope: &LogEnvelope) -> Result<Value, SubmitError> {
        let rendered = serde_json::to_string(envelope)?;
        info!(channel = envelope.channel(), "{}", rendered);
        Ok(Value::Null)
    }
}
