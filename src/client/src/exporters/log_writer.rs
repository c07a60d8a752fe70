use crate::config_manager::Config;
use crate::exporters::error::SubmitError;
use crate::exporters::log_forward::LogForward;
use crate::exporters::tracing_writer::TracingLogWriter;
use anyhow::{bail, Result};
use exlog_common::LogEnvelope;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// The remote "log" operation. One call per envelope; the acknowledgement is
/// whatever the backend answered with.
pub trait LogWriter: Send + Sync + 'static {
    fn log(
        &self,
        envelope: &LogEnvelope,
    ) -> impl Future<Output = Result<Value, SubmitError>> + Send;
}

impl<W: LogWriter> LogWriter for Arc<W> {
    fn log(
        &self,
        envelope: &LogEnvelope,
    ) -> impl Future<Output = Result<Value, SubmitError>> + Send {
        self.as_ref().log(envelope)
    }
}

pub enum LogWriterEnum {
    Forward(LogForward),
    Tracing(TracingLogWriter),
}

impl LogWriter for LogWriterEnum {
    async fn log(&self, envelope: &LogEnvelope) -> Result<Value, SubmitError> {
        match self {
            LogWriterEnum::Forward(client) => client.log(envelope).await,
            LogWriterEnum::Tracing(client) => client.log(envelope).await,
        }
    }
}

impl LogWriterEnum {
    /// Pick the writer the configuration asks for: tracing output on dry runs,
    /// otherwise the HTTP endpoint.
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.dry_run {
            return Ok(LogWriterEnum::Tracing(TracingLogWriter));
        }

        match config.endpoint.as_deref() {
            Some(endpoint) if !endpoint.trim().is_empty() => Ok(LogWriterEnum::Forward(
                LogForward::try_new(endpoint, config.api_key.as_deref())?,
            )),
            _ => bail!("No log endpoint configured; set EXLOG_ENDPOINT or enable dry_run"),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            LogWriterEnum::Forward(_) => "LogForward",
            LogWriterEnum::Tracing(_) => "TracingLogWriter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_uses_tracing_writer() {
        let config = Config {
            dry_run: true,
            endpoint: None,
            ..Config::default()
        };
        let writer = LogWriterEnum::from_config(&config).unwrap();
        assert_eq!(writer.variant_name(), "TracingLogWriter");
    }

    #[test]
    fn endpoint_selects_forward_writer() {
        let config = Config {
            endpoint: Some("http://127.0.0.1:9/log".to_string()),
            ..Config::default()
        };
        let writer = LogWriterEnum::from_config(&config).unwrap();
        assert_eq!(writer.variant_name(), "LogForward");
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        let config = Config {
            endpoint: Some("  ".to_string()),
            ..Config::default()
        };
        let err = LogWriterEnum::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("No log endpoint configured"));
    }
}
