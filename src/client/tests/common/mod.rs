#![allow(dead_code)]

pub mod test_server;

use exlog_client::exporters::{LogWriter, SubmitError};
use exlog_common::LogEnvelope;
use serde_json::Value;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tracing::subscriber::DefaultGuard;

/// Tracing output collected by [`capture_logs`].
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's tracing events into a buffer until the guard drops.
/// Tasks must run on the current thread, as under a default `#[tokio::test]`.
pub fn capture_logs() -> (CapturedLogs, DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

/// Records every envelope it is handed. Answers with queued outcomes in
/// order, then with `Ok(null)`. With a gate, each call waits for a permit
/// after recording.
#[derive(Default)]
pub struct RecordingWriter {
    calls: Mutex<Vec<LogEnvelope>>,
    outcomes: Mutex<VecDeque<Result<Value, SubmitError>>>,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingWriter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_outcomes(outcomes: Vec<Result<Value, SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            ..Default::default()
        })
    }

    pub fn gated(gate: Arc<Semaphore>, outcomes: Vec<Result<Value, SubmitError>>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            gate: Some(gate),
            ..Default::default()
        })
    }

    pub fn calls(&self) -> Vec<LogEnvelope> {
        self.calls.lock().unwrap().clone()
    }
}

impl LogWriter for RecordingWriter {
    async fn log(&self, envelope: &LogEnvelope) -> Result<Value, SubmitError> {
        self.calls.lock().unwrap().push(envelope.clone());

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        let outcome = self.outcomes.lock().unwrap().pop_front();
        outcome.unwrap_or(Ok(Value::Null))
    }
}
