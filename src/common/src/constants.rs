/// Platform event channel that receives exception log records.
pub const CUSTOM_EXCEPTION_LOG: &str = "Custom_Exception_Log__e";

/// Error type written for language-level (native) errors.
pub const NATIVE_ERROR_TYPE: &str = "JavaScript Error";

/// Prefix applied to the caller's context label for response-shaped errors.
pub const RESPONSE_CONTEXT_PREFIX: &str = "Lightning Component: ";

pub const FALLBACK_CONTEXT_TYPE: &str = "errorUtil.logError()";
pub const FALLBACK_OBJECT_TYPE: &str = "Error__c";

pub const DEFAULT_RECORD_URL: &str = "about:blank";
pub const DEFAULT_ERROR_NAME: &str = "Error";

// Schema identifiers of the Custom_Exception_Log__c fields
pub const OBJECT_TYPE_FIELD: &str = "Object_Type__c";
pub const RECORD_URL_FIELD: &str = "Record_URL__c";
pub const SEVERITY_LEVEL_FIELD: &str = "Severity_Level__c";
pub const CONTEXT_TYPE_FIELD: &str = "Context_Type__c";
pub const ERROR_TYPE_FIELD: &str = "Error_Type__c";
pub const FULL_MESSAGE_FIELD: &str = "Full_Message__c";
pub const STACK_TRACE_FIELD: &str = "Stack_Trace__c";
