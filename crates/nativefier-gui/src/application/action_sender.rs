//! ActionSender: the outbound half of the bridge.

use nativefier_protocol::{encode_action, Action};
use tracing::{debug, error};

use crate::domain::HostTransport;

/// Encodes [`Action`]s and hands the text to a [`HostTransport`].
///
/// Nothing is validated and nothing is returned: the host's answer, if any,
/// comes back later through the event dispatcher.
#[derive(Debug)]
pub struct ActionSender<T> {
    transport: T,
}

impl<T: HostTransport> ActionSender<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Asks the host for its configuration.
    pub fn load_config(&self) {
        self.send(&Action::LoadConfig);
    }

    /// Asks the host to show its directory picker.
    pub fn choose_directory(&self) {
        self.send(&Action::ChooseDirectory);
    }

    /// Asks the host to build an app.  Empty fields are sent as-is.
    pub fn build(&self, name: String, url: String, directory: String) {
        self.send(&Action::Build {
            name,
            url,
            directory,
        });
    }

    fn send(&self, action: &Action) {
        match encode_action(action) {
            Ok(text) => {
                debug!(action = action.kind(), "sending action");
                self.transport.invoke(&text);
            }
            Err(e) => error!("{e}"),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
