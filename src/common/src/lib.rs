pub mod constants;
pub mod http_client;
pub mod types;

pub use types::envelope::LogEnvelope;
pub use types::fields::FieldMapping;
pub use types::payload::{ErrorPayload, NativeError, ResponseError, ResponseErrorBody};
pub use types::record::LogRecord;
pub use types::severity::Severity;
