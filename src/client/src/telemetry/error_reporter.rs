use super::location::{Location, StaticLocation};
use crate::config_manager::Config;
use crate::exporters::{LogWriter, SubmitError};
use exlog_common::{ErrorPayload, FieldMapping, LogEnvelope, LogRecord, Severity};
use serde_json::Value;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, warn};

/// Everything about a report that is not the error itself.
#[derive(Clone)]
pub struct ReporterSettings {
    pub channel: String,
    pub fields: FieldMapping,
    pub location: Arc<dyn Location>,
    pub fallback_context_type: String,
    pub fallback_object_type: String,
}

impl ReporterSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            channel: config.channel.clone(),
            fields: config.fields.clone(),
            location: Arc::new(StaticLocation(config.page_url.clone())),
            fallback_context_type: config.fallback_context_type.clone(),
            fallback_object_type: config.fallback_object_type.clone(),
        }
    }

    pub fn with_location(mut self, location: impl Location + 'static) -> Self {
        self.location = Arc::new(location);
        self
    }
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

struct Inner<W> {
    writer: W,
    settings: ReporterSettings,
}

/// Formats errors into exception log records and hands them to a
/// [`LogWriter`]. The entry points never block and never fail: a failed
/// submission is logged once as an error of its own, and a failure of that
/// is only written to the tracing output.
pub struct ErrorReporter<W> {
    inner: Arc<Inner<W>>,
    tracker: TaskTracker,
}

impl<W> Clone for ErrorReporter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            tracker: self.tracker.clone(),
        }
    }
}

impl<W: LogWriter> ErrorReporter<W> {
    pub fn new(writer: W, settings: ReporterSettings) -> Self {
        Self {
            inner: Arc::new(Inner { writer, settings }),
            tracker: TaskTracker::new(),
        }
    }

    /// Report an error at `Med` severity.
    pub fn log_error(
        &self,
        payload: impl Into<ErrorPayload>,
        context_type: &str,
        object_type: Option<&str>,
    ) {
        self.dispatch(payload.into(), Severity::Med, context_type, object_type);
    }

    /// Report an error at `High` severity. Its fallback, if any, is still `Med`.
    pub fn log_error_high(
        &self,
        payload: impl Into<ErrorPayload>,
        context_type: &str,
        object_type: Option<&str>,
    ) {
        self.dispatch(payload.into(), Severity::High, context_type, object_type);
    }

    /// Build and send one record, without the fallback. `Ok(None)` means the
    /// payload was unclassified and nothing was sent.
    pub async fn submit(
        &self,
        payload: &ErrorPayload,
        severity: Severity,
        context_type: &str,
        object_type: Option<&str>,
    ) -> Result<Option<Value>, SubmitError> {
        let record_url = self.inner.settings.location.current_url();
        self.inner
            .submit(payload, severity, context_type, object_type, &record_url)
            .await
    }

    /// Wait for every dispatched report, fallbacks included, to settle.
    pub async fn close(&self) {
        self.tracker.close();
        self.tracker.wait().await;
    }

    /// Reports dispatched and not yet settled.
    pub fn in_flight(&self) -> usize {
        self.tracker.len()
    }

    fn dispatch(
        &self,
        payload: ErrorPayload,
        severity: Severity,
        context_type: &str,
        object_type: Option<&str>,
    ) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                error!(error = %e, "No async runtime; dropping {} error report", severity);
                return;
            }
        };

        let record_url = self.inner.settings.location.current_url();
        let inner = Arc::clone(&self.inner);
        let context_type = context_type.to_string();
        let object_type = object_type.map(str::to_string);

        self.tracker.spawn_on(
            async move {
                inner
                    .report(
                        payload,
                        severity,
                        &context_type,
                        object_type.as_deref(),
                        &record_url,
                    )
                    .await;
            },
            &handle,
        );
    }
}

impl<W: LogWriter> Inner<W> {
    async fn report(
        &self,
        payload: ErrorPayload,
        severity: Severity,
        context_type: &str,
        object_type: Option<&str>,
        record_url: &str,
    ) {
        let failure = match self
            .submit(&payload, severity, context_type, object_type, record_url)
            .await
        {
            Ok(_) => return,
            Err(failure) => failure,
        };

        warn!(
            error = %failure,
            "Failed to submit {} error report; logging the failure", severity
        );

        let fallback = failure.into_payload();
        let record_url = self.settings.location.current_url();
        if let Err(fallback_failure) = self
            .submit(
                &fallback,
                Severity::Med,
                &self.settings.fallback_context_type,
                Some(&self.settings.fallback_object_type),
                &record_url,
            )
            .await
        {
            error!(
                error = %fallback_failure,
                "Failed to log an error report failure; dropping it"
            );
        }
    }

    async fn submit(
        &self,
        payload: &ErrorPayload,
        severity: Severity,
        context_type: &str,
        object_type: Option<&str>,
        record_url: &str,
    ) -> Result<Option<Value>, SubmitError> {
        let Some(record) =
            LogRecord::build(payload, severity, context_type, object_type, record_url)
        else {
            warn!(
                kind = payload.kind(),
                context_type, "Unrecognized error shape; nothing logged"
            );
            return Ok(None);
        };

        let envelope =
            LogEnvelope::from_record(&record, &self.settings.channel, &self.settings.fields);

        debug!(
            severity = %record.severity_level,
            context_type = %record.context_type,
            "Submitting {} record", self.settings.channel
        );

        self.writer.log(&envelope).await.map(Some)
    }
}
