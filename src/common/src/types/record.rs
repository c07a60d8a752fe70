use crate::constants::{NATIVE_ERROR_TYPE, RESPONSE_CONTEXT_PREFIX};
use crate::types::fields::FieldMapping;
use crate::types::payload::ErrorPayload;
use crate::types::severity::Severity;
use serde_json::{Map, Value};

/// One exception log entry, built per call and dropped once submitted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    pub object_type: Option<String>,
    pub record_url: String,
    pub severity_level: Severity,
    pub context_type: String,
    pub error_type: Option<String>,
    pub full_message: String,
    pub stack_trace: Option<String>,
}

impl LogRecord {
    /// Map a payload onto a record. Returns `None` for unclassified payloads.
    pub fn build(
        payload: &ErrorPayload,
        severity: Severity,
        context_type: &str,
        object_type: Option<&str>,
        record_url: &str,
    ) -> Option<Self> {
        let object_type = object_type.map(str::to_string);
        let record_url = record_url.to_string();

        match payload {
            ErrorPayload::Native(error) => Some(Self {
                object_type,
                record_url,
                severity_level: severity,
                context_type: error.name.clone(),
                error_type: Some(NATIVE_ERROR_TYPE.to_string()),
                full_message: error.message.clone(),
                stack_trace: error.stack.clone(),
            }),
            ErrorPayload::Response(response) => Some(Self {
                object_type,
                record_url,
                severity_level: severity,
                context_type: format!("{}{}", RESPONSE_CONTEXT_PREFIX, context_type),
                error_type: response.resolved_error_type().map(str::to_string),
                full_message: response.full_message(),
                stack_trace: response.body.stack_trace.clone(),
            }),
            ErrorPayload::Unclassified(_) => None,
        }
    }

    /// Render the record under the backend's field identifiers. Every key is
    /// always present; absent values become `null`.
    pub fn to_fields(&self, mapping: &FieldMapping) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert(mapping.object_type.clone(), opt(&self.object_type));
        fields.insert(
            mapping.record_url.clone(),
            Value::String(self.record_url.clone()),
        );
        fields.insert(
            mapping.severity_level.clone(),
            Value::String(self.severity_level.as_str().to_string()),
        );
        fields.insert(
            mapping.context_type.clone(),
            Value::String(self.context_type.clone()),
        );
        fields.insert(mapping.error_type.clone(), opt(&self.error_type));
        fields.insert(
            mapping.full_message.clone(),
            Value::String(self.full_message.clone()),
        );
        fields.insert(mapping.stack_trace.clone(), opt(&self.stack_trace));
        fields
    }
}

fn opt(value: &Option<String>) -> Value {
    value.clone().map(Value::String).unwrap_or(Value::Null)
}
