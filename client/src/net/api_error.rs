//! Error type produced by the REST layer for non-success responses.
//!
//! ERROR HANDLING
//! ==============
//! The body of a failed response is kept when it parses as JSON so the
//! notification adapter can show it verbatim; anything else is kept as text
//! and never shown as structured detail.

#[cfg(test)]
#[path = "api_error_test.rs"]
mod api_error_test;

use serde_json::Value;

/// Body attached to an [`ApiError`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ApiErrorBody {
    #[default]
    Empty,
    Text(String),
    Structured(Value),
}

/// A non-success HTTP response.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
    status: u16,
    request_id: Option<String>,
    body: ApiErrorBody,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self { message: message.into(), status, request_id: None, body: ApiErrorBody::Empty }
    }

    /// Build from a raw response. Uses the body's `message` field for the
    /// error message when the body is a JSON object carrying one.
    #[must_use]
    pub fn from_response(status: u16, request_id: Option<String>, body: &str) -> Self {
        let body = parse_body(body);
        let message = match &body {
            ApiErrorBody::Structured(value) => value
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| status_message(status), str::to_owned),
            _ => status_message(status),
        };
        Self { message, status, request_id, body }
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: ApiErrorBody) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &ApiErrorBody {
        &self.body
    }

    #[must_use]
    pub fn has_structured_detail(&self) -> bool {
        matches!(self.body, ApiErrorBody::Structured(_))
    }

    #[must_use]
    pub fn structured_detail(&self) -> Option<&Value> {
        match &self.body {
            ApiErrorBody::Structured(value) => Some(value),
            _ => None,
        }
    }
}

fn parse_body(raw: &str) -> ApiErrorBody {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ApiErrorBody::Empty;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => ApiErrorBody::Structured(value),
        Err(_) => ApiErrorBody::Text(trimmed.to_owned()),
    }
}

fn status_message(status: u16) -> String {
    format!("request failed: {status}")
}
