//! Protocol module containing message types and the JSON codec.

pub mod codec;
pub mod messages;

pub use codec::{decode_action, decode_event, encode_action, encode_event, ProtocolError};
pub use messages::*;
