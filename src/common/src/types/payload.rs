use crate::constants::DEFAULT_ERROR_NAME;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use tracing::debug;

/// A language-level error: a name, a message and (maybe) a stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeError {
    pub name: String,
    pub message: String,
    #[serde(default)]
    pub stack: Option<String>,
}

impl NativeError {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Build from a Rust error. The message is the error's `Display`; the
    /// source chain, when there is one, stands in for the stack.
    pub fn from_error<E>(name: &str, error: &E) -> Self
    where
        E: StdError + ?Sized,
    {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(format!("Caused by: {}", cause));
            source = cause.source();
        }

        Self {
            name: name.to_string(),
            message: error.to_string(),
            stack: (!chain.is_empty()).then(|| chain.join("\n")),
        }
    }
}

/// Body of a failed service response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseErrorBody {
    pub message: Option<String>,
    pub stack_trace: Option<String>,
    pub output: Value,
    pub exception_type: Option<String>,
    pub is_user_defined_exception: Option<bool>,
}

/// An error produced by a failed network or service call rather than thrown
/// by the language runtime.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseError {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub error_type: Option<String>,
    pub enhanced_error_type: Option<String>,
    pub ok: Option<bool>,
    pub body: ResponseErrorBody,
}

impl ResponseError {
    /// `errorType` when set and non-empty, otherwise `enhancedErrorType`.
    pub fn resolved_error_type(&self) -> Option<&str> {
        self.error_type
            .as_deref()
            .filter(|error_type| !error_type.is_empty())
            .or(self.enhanced_error_type.as_deref())
    }

    /// `"{status} | {statusText}: {message}\n\nDetail:\n{output as JSON}"`.
    /// Missing scalars render empty, a missing output renders as `null`.
    /// These placeholders deliberately replace the `undefined` text a
    /// JavaScript template would print.
    pub fn full_message(&self) -> String {
        let status = self.status.map(|s| s.to_string()).unwrap_or_default();
        let detail = serde_json::to_string(&self.body.output).unwrap_or_else(|_| "null".into());

        format!(
            "{} | {}: {}\n\nDetail:\n{}",
            status,
            self.status_text.as_deref().unwrap_or_default(),
            self.body.message.as_deref().unwrap_or_default(),
            detail
        )
    }
}

/// Everything the reporter knows how to log, decided up front instead of by
/// probing the value at log time.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorPayload {
    Native(NativeError),
    Response(ResponseError),
    /// Neither shape; the reporter sends nothing for these.
    Unclassified(Value),
}

impl ErrorPayload {
    /// Classify an untyped JSON value. An object owning `body` is a response
    /// error; an object with a string `message` and a `name` or `stack` is a
    /// native error; anything else is unclassified.
    pub fn classify(value: Value) -> Self {
        let Value::Object(map) = value else {
            return ErrorPayload::Unclassified(value);
        };

        if map.contains_key("body") {
            return ErrorPayload::Response(response_from_map(&map));
        }

        let message = str_field(&map, "message");
        let name = str_field(&map, "name");
        let stack = str_field(&map, "stack");
        match message {
            Some(message) if name.is_some() || stack.is_some() => {
                ErrorPayload::Native(NativeError {
                    name: name.unwrap_or_else(|| DEFAULT_ERROR_NAME.to_string()),
                    message,
                    stack,
                })
            }
            _ => ErrorPayload::Unclassified(Value::Object(map)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ErrorPayload::Native(_) => "native",
            ErrorPayload::Response(_) => "response",
            ErrorPayload::Unclassified(_) => "unclassified",
        }
    }
}

impl From<NativeError> for ErrorPayload {
    fn from(error: NativeError) -> Self {
        ErrorPayload::Native(error)
    }
}

impl From<ResponseError> for ErrorPayload {
    fn from(error: ResponseError) -> Self {
        ErrorPayload::Response(error)
    }
}

fn str_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn response_from_map(map: &Map<String, Value>) -> ResponseError {
    let body = match map.get("body") {
        Some(Value::Object(body)) => ResponseErrorBody {
            message: str_field(body, "message"),
            stack_trace: str_field(body, "stackTrace"),
            output: body.get("output").cloned().unwrap_or(Value::Null),
            exception_type: str_field(body, "exceptionType"),
            is_user_defined_exception: body
                .get("isUserDefinedException")
                .and_then(Value::as_bool),
        },
        Some(Value::String(text)) => ResponseErrorBody {
            message: Some(text.clone()),
            ..Default::default()
        },
        Some(Value::Null) | None => ResponseErrorBody::default(),
        // arrays and scalars are kept whole so they still show up under `Detail:`
        Some(other) => ResponseErrorBody {
            output: other.clone(),
            ..Default::default()
        },
    };

    ResponseError {
        status: map.get("status").and_then(status_code),
        status_text: str_field(map, "statusText"),
        error_type: str_field(map, "errorType"),
        enhanced_error_type: str_field(map, "enhancedErrorType"),
        ok: map.get("ok").and_then(Value::as_bool),
        body,
    }
}

/// Status as a number, a whole float or a numeric string.
fn status_code(value: &Value) -> Option<u16> {
    let status = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(text) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
    .and_then(|s| u16::try_from(s).ok());

    if status.is_none() && !value.is_null() {
        debug!("Discarding unusable response status {}", value);
    }
    status
}
