use crate::constants::{
    CONTEXT_TYPE_FIELD, ERROR_TYPE_FIELD, FULL_MESSAGE_FIELD, OBJECT_TYPE_FIELD,
    RECORD_URL_FIELD, SEVERITY_LEVEL_FIELD, STACK_TRACE_FIELD,
};
use serde::{Deserialize, Serialize};

/// Maps each logical record field to the identifier the backend schema uses
/// for it. Loaded from configuration so the formatting code never hard-codes
/// the host schema.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FieldMapping {
    pub object_type: String,
    pub record_url: String,
    pub severity_level: String,
    pub context_type: String,
    pub error_type: String,
    pub full_message: String,
    pub stack_trace: String,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            object_type: OBJECT_TYPE_FIELD.to_string(),
            record_url: RECORD_URL_FIELD.to_string(),
            severity_level: SEVERITY_LEVEL_FIELD.to_string(),
            context_type: CONTEXT_TYPE_FIELD.to_string(),
            error_type: ERROR_TYPE_FIELD.to_string(),
            full_message: FULL_MESSAGE_FIELD.to_string(),
            stack_trace: STACK_TRACE_FIELD.to_string(),
        }
    }
}
