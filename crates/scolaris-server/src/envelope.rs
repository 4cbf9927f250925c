//! Uniform response envelope.
//!
//! Every response body is `{message, data?, count?}`; `count` appears
//! on list responses only.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    /// A single-record response.
    pub fn record(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            count: None,
        }
    }
}

impl Envelope<()> {
    /// A message-only response.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: None,
            count: None,
        }
    }
}

impl<T: Serialize> Envelope<Vec<T>> {
    /// A list response; the count is the number of returned records.
    pub fn listing(message: impl Into<String>, data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            message: message.into(),
            data: Some(data),
            count: Some(count),
        }
    }
}
