//! Response normalization.
//!
//! The upstream answers either with a wrapped envelope
//! (`{"status": "success", "message": ..., "data": [...]}`) or with a bare
//! JSON array of records. Both shapes are attempted on every body, envelope
//! first.
//!
//! An envelope whose `status` is anything other than `"success"` is not
//! treated as a failure report: decoding falls through to the bare-list
//! attempt, which then rejects the object and surfaces `MalformedResponse`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::records::types::null_as_default;

const SUCCESS_STATUS: &str = "success";

/// Neither the envelope nor the bare-list decoding accepted the body.
#[derive(Debug, Error)]
#[error("failed to parse response: {source}, response body: {body}")]
pub struct MalformedResponse {
    /// Error from the bare-list attempt.
    pub source: serde_json::Error,
    /// Raw upstream body, kept for diagnostics.
    pub body: String,
}

/// Which shape the upstream body turned out to have.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape<T> {
    /// `{"status": "success", "data": [...]}`.
    Envelope(Vec<T>),
    /// `[...]`.
    BareList(Vec<T>),
}

impl<T> ResponseShape<T> {
    /// Candidate records, in upstream order.
    pub fn into_records(self) -> Vec<T> {
        match self {
            ResponseShape::Envelope(records) | ResponseShape::BareList(records) => records,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResponseShape::Envelope(records) | ResponseShape::BareList(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default, alias = "Status", deserialize_with = "null_as_default")]
    status: String,

    #[serde(default, alias = "Message", deserialize_with = "null_as_default")]
    #[allow(dead_code)]
    message: String,

    #[serde(alias = "Data")]
    data: Option<Vec<T>>,
}

/// Decode an upstream body into candidate records.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD before decoding.
pub fn normalize<T: DeserializeOwned>(body: &[u8]) -> Result<ResponseShape<T>, MalformedResponse> {
    let text = String::from_utf8_lossy(body);

    if let Ok(envelope) = serde_json::from_str::<Envelope<T>>(&text) {
        if envelope.status == SUCCESS_STATUS {
            return Ok(ResponseShape::Envelope(envelope.data.unwrap_or_default()));
        }
    }

    // Top-level `null` is accepted as an empty list.
    match serde_json::from_str::<Option<Vec<T>>>(&text) {
        Ok(records) => Ok(ResponseShape::BareList(records.unwrap_or_default())),
        Err(source) => Err(MalformedResponse {
            source,
            body: text.into_owned(),
        }),
    }
}
