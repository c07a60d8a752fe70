use crate::types::fields::FieldMapping;
use crate::types::record::LogRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Argument of the remote log operation:
/// `{"customExceptionLog": {"apiName": <channel>, "fields": {...}}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEnvelope {
    #[serde(rename = "customExceptionLog")]
    pub custom_exception_log: ExceptionLog,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionLog {
    pub api_name: String,
    pub fields: Map<String, Value>,
}

impl LogEnvelope {
    pub fn new(channel: &str, fields: Map<String, Value>) -> Self {
        Self {
            custom_exception_log: ExceptionLog {
                api_name: channel.to_string(),
                fields,
            },
        }
    }

    pub fn from_record(record: &LogRecord, channel: &str, mapping: &FieldMapping) -> Self {
        Self::new(channel, record.to_fields(mapping))
    }

    pub fn channel(&self) -> &str {
        &self.custom_exception_log.api_name
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.custom_exception_log.fields
    }

    /// String value of a field, `None` when absent or null.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields().get(key).and_then(Value::as_str)
    }
}
