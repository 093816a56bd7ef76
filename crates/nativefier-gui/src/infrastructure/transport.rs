//! [`HostTransport`] over a tokio channel.

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::domain::HostTransport;

/// Sends each action's text down an unbounded channel to the host task.
///
/// If the host has gone away the message is dropped: the transport has no
/// way to report failure.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: UnboundedSender<String>,
}

impl ChannelTransport {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }
}

impl HostTransport for ChannelTransport {
    fn invoke(&self, message: &str) {
        if self.tx.send(message.to_owned()).is_err() {
            debug!("host channel closed; action dropped");
        }
    }
}
