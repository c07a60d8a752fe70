//! Error reporting to the exception log backend.
//!
//! [`ErrorReporter`] turns native and response-shaped errors into exception
//! log records and submits them through a
//! [`LogWriter`](crate::exporters::LogWriter) in the background.
//!
//! # Example
//!
//! ```rust,no_run
//! # use exlog_client::exporters::TracingLogWriter;
//! # use exlog_client::{ErrorReporter, ReporterSettings};
//! # use exlog_common::NativeError;
//! #
//! # #[tokio::main]
//! # async fn main() {
//! let reporter = ErrorReporter::new(TracingLogWriter, ReporterSettings::default());
//! reporter.log_error(NativeError::new("TypeError", "x is undefined"), "accountList", Some("Account"));
//! reporter.close().await;
//! # }
//! ```

mod error_reporter;
mod location;

pub use error_reporter::{ErrorReporter, ReporterSettings};
pub use location::{Location, StaticLocation};
