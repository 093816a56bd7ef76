//! JSON codec for [`Action`] and [`Event`].
//!
//! The two directions use different carriers:
//!
//! ```text
//! Action: Rust value → JSON text                 (encode_action / decode_action)
//! Event:  Rust value → decoded JSON object value (encode_event / decode_event)
//! ```
//!
//! Actions travel as text because the host transport's entry point takes a
//! single string.  Events arrive already parsed, so they are decoded from a
//! [`serde_json::Value`].

use serde_json::Value;
use thiserror::Error;

use crate::protocol::messages::{Action, Event};

/// Errors that can occur while encoding or decoding a protocol message.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A message could not be serialized.
    #[error("failed to encode {kind}: {source}")]
    Encode {
        /// The `"type"` of the message being encoded.
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not a well-formed message: bad JSON, a missing `"type"`,
    /// or a known tag whose fields are missing or of the wrong type.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ── Actions ───────────────────────────────────────────────────────────────────

/// Encodes an [`Action`] as the JSON text handed to the host transport.
///
/// # Errors
///
/// Returns [`ProtocolError::Encode`] if serialization fails.
///
/// # Examples
///
/// ```rust
/// use nativefier_protocol::{encode_action, Action};
///
/// let text = encode_action(&Action::ChooseDirectory).unwrap();
/// assert_eq!(text, r#"{"type":"ChooseDirectory"}"#);
/// ```
pub fn encode_action(action: &Action) -> Result<String, ProtocolError> {
    serde_json::to_string(action).map_err(|source| ProtocolError::Encode {
        kind: action.kind(),
        source,
    })
}

/// Decodes the JSON text of an [`Action`], as received by the host.
///
/// # Errors
///
/// Returns [`ProtocolError::Malformed`] for invalid JSON, a missing or
/// unrecognised `"type"`, or missing fields.
pub fn decode_action(text: &str) -> Result<Action, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Encodes an [`Event`] as the decoded JSON object the host delivers.
///
/// # Errors
///
/// Returns [`ProtocolError::Encode`] if serialization fails.
pub fn encode_event(event: &Event) -> Result<Value, ProtocolError> {
    serde_json::to_value(event).map_err(|source| ProtocolError::Encode {
        kind: event.kind(),
        source,
    })
}

/// Decodes an [`Event`] from a JSON object delivered by the host.
///
/// An unrecognised `"type"` is not an error: it decodes to
/// [`Event::Unknown`].
///
/// # Errors
///
/// Returns [`ProtocolError::Malformed`] if the value is not an object, has
/// no string `"type"`, or a known tag is missing fields.
///
/// # Examples
///
/// ```rust
/// use nativefier_protocol::{decode_event, Event};
/// use serde_json::json;
///
/// let event = decode_event(json!({"type": "BuildComplete"})).unwrap();
/// assert_eq!(event, Event::BuildComplete);
///
/// let event = decode_event(json!({"type": "Telemetry"})).unwrap();
/// assert_eq!(event, Event::Unknown);
/// ```
pub fn decode_event(value: Value) -> Result<Event, ProtocolError> {
    Ok(serde_json::from_value(value)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
