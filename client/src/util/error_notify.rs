//! Turn arbitrary failures into error notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens hand any failure to [`catch_notify`] (or
//! [`NotificationQueue::notify_error`]) instead of rendering their own error
//! UI. The adapter classifies the failure, builds a one-line summary plus an
//! expandable detail section, and pushes a dismissible error message.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or returns an error. Serialization problems degrade
//! to the best representation available (`Debug` output, then the plain
//! message).

#[cfg(test)]
#[path = "error_notify_test.rs"]
mod error_notify_test;

use std::error::Error;
use std::fmt::Debug;

use serde::Serialize;

use crate::net::api_error::ApiError;
use crate::state::notifications::{MessageDefinition, MessageType, NotificationContent, NotificationHandle, NotificationQueue};

/// Summary prefix used when the caller supplies none.
pub const DEFAULT_ERROR_TEXT: &str = "Failed to perform action";

const MAX_CAUSE_DEPTH: usize = 32;

/// An error reduced to name, message and cause chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorDetails {
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<Box<ErrorDetails>>,
}

impl ErrorDetails {
    /// Walk `err` and its `source()` chain.
    #[must_use]
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        Self::walk(err, None, 0)
    }

    /// Like [`ErrorDetails::from_error`], naming the top level after `E`.
    #[must_use]
    pub fn from_typed<E: Error + 'static>(err: &E) -> Self {
        Self::walk(err, Some(short_type_name::<E>()), 0)
    }

    fn walk(err: &(dyn Error + 'static), type_name: Option<String>, depth: usize) -> Self {
        let cause = match err.source() {
            Some(source) if depth < MAX_CAUSE_DEPTH => Some(Box::new(Self::walk(source, None, depth + 1))),
            _ => None,
        };
        let name = known_name(err)
            .map(str::to_owned)
            .or(type_name)
            .unwrap_or_else(|| debug_name(err));
        Self { name, message: err.to_string(), cause }
    }
}

/// Names for common library errors whose `Debug` output starts with a
/// variant rather than the type.
fn known_name(err: &(dyn Error + 'static)) -> Option<&'static str> {
    if err.is::<std::io::Error>() {
        Some("io::Error")
    } else if err.is::<serde_json::Error>() {
        Some("serde_json::Error")
    } else if err.is::<std::fmt::Error>() {
        Some("fmt::Error")
    } else if err.is::<ApiError>() {
        Some("ApiError")
    } else {
        None
    }
}

/// Last path segment of `T`'s type name, generics stripped.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path).to_owned()
}

/// Leading identifier of the `Debug` rendering. Used for chain entries whose
/// concrete type is unknown.
fn debug_name(err: &dyn Error) -> String {
    let debug = format!("{err:?}");
    let name: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() { "Error".to_owned() } else { name }
}

/// A failure as classified by the adapter.
#[derive(Clone, Debug, PartialEq)]
pub enum Failure {
    /// Non-success API response.
    Api(ApiError),
    /// Any other `std::error::Error`, with its cause chain.
    Error(ErrorDetails),
    /// A value that is not an error; holds its serialized form.
    Opaque(String),
}

impl Failure {
    /// Classify an error, recognising [`ApiError`] by downcast.
    #[must_use]
    pub fn classify(err: &(dyn Error + 'static)) -> Self {
        match err.downcast_ref::<ApiError>() {
            Some(api) => Self::Api(api.clone()),
            None => Self::Error(ErrorDetails::from_error(err)),
        }
    }

    /// Classify an error whose concrete type is known.
    #[must_use]
    pub fn from_error<E: Error + 'static>(err: &E) -> Self {
        match (err as &(dyn Error + 'static)).downcast_ref::<ApiError>() {
            Some(api) => Self::Api(api.clone()),
            None => Self::Error(ErrorDetails::from_typed(err)),
        }
    }

    /// Structural serialization of a non-error value.
    #[must_use]
    pub fn opaque<T: Serialize + Debug + ?Sized>(value: &T) -> Self {
        Self::Opaque(serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{value:#?}")))
    }

    /// Message carried by the failure, if it has one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api(api) => Some(api.message()),
            Self::Error(details) => Some(&details.message),
            Self::Opaque(_) => None,
        }
    }
}

impl From<ApiError> for Failure {
    fn from(value: ApiError) -> Self {
        Self::Api(value)
    }
}

impl From<ErrorDetails> for Failure {
    fn from(value: ErrorDetails) -> Self {
        Self::Error(value)
    }
}

impl From<Box<dyn Error + Send + Sync>> for Failure {
    fn from(value: Box<dyn Error + Send + Sync>) -> Self {
        Self::classify(&*value)
    }
}

impl From<std::io::Error> for Failure {
    fn from(value: std::io::Error) -> Self {
        Self::from_error(&value)
    }
}

impl From<serde_json::Value> for Failure {
    fn from(value: serde_json::Value) -> Self {
        Self::opaque(&value)
    }
}

impl From<&str> for Failure {
    fn from(value: &str) -> Self {
        Self::opaque(value)
    }
}

/// Expandable detail section of an error notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorDetailSection {
    /// Key/value pairs, plus the structured payload when the response had one.
    Api { fields: Vec<(String, String)>, payload: Option<String> },
    /// Preformatted text (serialized cause chain or opaque value).
    Code(String),
}

/// Rendered content of an error notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ErrorReport {
    pub summary: String,
    pub details: ErrorDetailSection,
}

impl ErrorReport {
    #[must_use]
    pub fn new(failure: &Failure, err_text: Option<&str>) -> Self {
        let prefix = err_text.unwrap_or(DEFAULT_ERROR_TEXT);
        let summary = match failure.message() {
            Some(message) => format!("{prefix}: {message}"),
            None => prefix.to_owned(),
        };

        let details = match failure {
            Failure::Api(api) => {
                let mut fields = vec![("Status".to_owned(), api.status().to_string())];
                if let Some(request_id) = api.request_id() {
                    fields.push(("Request ID".to_owned(), request_id.to_owned()));
                }
                let payload = api
                    .structured_detail()
                    .map(|value| serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()));
                ErrorDetailSection::Api { fields, payload }
            }
            Failure::Error(details) => ErrorDetailSection::Code(
                serde_json::to_string_pretty(details).unwrap_or_else(|_| format!("{}: {}", details.name, details.message)),
            ),
            Failure::Opaque(serialized) => ErrorDetailSection::Code(serialized.clone()),
        };

        Self { summary, details }
    }
}

/// Dismissible error notification for `failure`.
#[must_use]
pub fn error_message(failure: &Failure, err_text: Option<&str>) -> MessageDefinition {
    let report = ErrorReport::new(failure, err_text);
    leptos::logging::warn!("error notification: {}", report.summary);
    MessageDefinition::new(MessageType::Error, NotificationContent::Error(report)).dismissible(true)
}

/// Where [`catch_notify`] sends its notification.
#[derive(Clone, Debug)]
pub enum NotifyTarget {
    /// Add a new message.
    Queue(NotificationQueue),
    /// Replace the message behind an existing handle.
    Handle(NotificationHandle),
}

impl From<NotificationQueue> for NotifyTarget {
    fn from(value: NotificationQueue) -> Self {
        Self::Queue(value)
    }
}

impl From<NotificationHandle> for NotifyTarget {
    fn from(value: NotificationHandle) -> Self {
        Self::Handle(value)
    }
}

impl NotifyTarget {
    pub fn notify(&self, failure: &Failure, err_text: Option<&str>) {
        let message = error_message(failure, err_text);
        match self {
            Self::Queue(queue) => queue.add_once(message),
            Self::Handle(handle) => handle.update(message),
        }
    }
}

/// Build an error sink for `target`, e.g. for `Result::map_err` chains.
pub fn catch_notify<E, T>(target: T, err_text: Option<&str>) -> impl Fn(E) + Clone + use<E, T>
where
    E: Into<Failure>,
    T: Into<NotifyTarget>,
{
    let target = target.into();
    let err_text = err_text.map(str::to_owned);
    move |err: E| target.notify(&err.into(), err_text.as_deref())
}

impl NotificationQueue {
    /// Add an error notification for `failure`.
    pub fn notify_error(&self, failure: impl Into<Failure>, err_text: Option<&str>) {
        self.add_once(error_message(&failure.into(), err_text));
    }
}

impl NotificationHandle {
    /// Turn this handle's message into an error notification for `failure`.
    pub fn notify_error(&self, failure: impl Into<Failure>, err_text: Option<&str>) {
        self.update(error_message(&failure.into(), err_text));
    }
}
