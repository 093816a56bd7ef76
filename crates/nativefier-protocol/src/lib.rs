//! # nativefier-protocol
//!
//! The message protocol spoken between the nativefier front end and the
//! native host process that performs builds.
//!
//! Two closed sets of messages travel over an opaque host transport:
//!
//! - **Actions** flow front end → host.  They are serialized to JSON text and
//!   handed to the transport's single entry point.
//! - **Events** flow host → front end.  The host delivers them as already
//!   decoded JSON objects.
//!
//! Both are internally tagged: every message is a JSON object whose `"type"`
//! field names the variant, with the variant's fields flattened alongside.
//!
//! ```text
//! {"type":"Build","name":"Docs","url":"https://docs.rs","directory":"/tmp/out"}
//! {"type":"DirectoryChosen","path":"/home/me/Desktop"}
//! ```
//!
//! The protocol is uncorrelated: there are no request IDs, and a reply is
//! matched to a request only by what the front end currently displays.
//!
//! This crate has no I/O and no async runtime dependency.

pub mod protocol;

pub use protocol::codec::{decode_action, decode_event, encode_action, encode_event, ProtocolError};
pub use protocol::messages::{Action, Event};
