//! Implementations of the remote log operation.

pub mod error;
pub mod log_forward;
pub mod log_writer;
pub mod tracing_writer;

pub use error::SubmitError;
pub use log_forward::LogForward;
pub use log_writer::{LogWriter, LogWriterEnum};
pub use tracing_writer::TracingLogWriter;
