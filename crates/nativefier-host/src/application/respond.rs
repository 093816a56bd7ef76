//! HostService: answers front-end actions with events.
//!
//! This is the host half of the collaborator contract:
//!
//! | action            | reply                                               |
//! |-------------------|-----------------------------------------------------|
//! | `LoadConfig`      | exactly one `ConfigLoaded`                          |
//! | `ChooseDirectory` | one `DirectoryChosen`; the default path if cancelled |
//! | `Build`           | one `BuildComplete` on success, nothing on failure  |
//!
//! Actions are handled one at a time in arrival order, so at most one build
//! is ever in flight.

use std::path::{Path, PathBuf};

use nativefier_protocol::{decode_action, Action, Event};
use tracing::{debug, error, info, warn};

use crate::domain::config::path_to_wire;
use crate::domain::{BuildRequest, BundleError, HostConfig};

/// Title shown on the native directory picker.
pub const PICKER_TITLE: &str = "Choose output directory";

/// Abstraction over the native directory picker.
///
/// Implementations live in `infrastructure::picker`; unit tests use the
/// mockall-generated `MockDirectoryPicker`.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryPicker: Send {
    /// Shows the picker starting at `default` and returns the chosen
    /// directory, or `None` if the user cancelled.
    fn choose(&mut self, title: &str, default: &Path) -> Option<PathBuf>;
}

/// Abstraction over the app bundler that performs a build.
#[cfg_attr(test, mockall::automock)]
pub trait AppBundler: Send {
    /// Builds the app described by `request`.
    ///
    /// # Errors
    ///
    /// Returns a [`BundleError`] if the app could not be produced.
    fn bundle(&mut self, request: &BuildRequest) -> Result<(), BundleError>;
}

/// The host side of the bridge.
pub struct HostService<P, B> {
    config: HostConfig,
    picker: P,
    bundler: B,
}

impl<P: DirectoryPicker, B: AppBundler> HostService<P, B> {
    /// Creates a host that reports `config` and delegates native work to
    /// `picker` and `bundler`.
    pub fn new(config: HostConfig, picker: P, bundler: B) -> Self {
        Self {
            config,
            picker,
            bundler,
        }
    }

    /// The configuration reported in `ConfigLoaded`.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// The bundler, for inspecting what was built.
    pub fn bundler(&self) -> &B {
        &self.bundler
    }

    /// Decodes the action text received from the transport and answers it.
    ///
    /// Undecodable text is logged and dropped: the front end never learns
    /// about it.
    pub fn respond(&mut self, raw: &str) -> Option<Event> {
        match decode_action(raw) {
            Ok(action) => self.handle(action),
            Err(e) => {
                warn!("dropping undecodable action {raw:?}: {e}");
                None
            }
        }
    }

    /// Answers one decoded action.
    pub fn handle(&mut self, action: Action) -> Option<Event> {
        debug!(action = action.kind(), "host received action");
        match action {
            Action::LoadConfig => Some(Event::ConfigLoaded {
                platform: self.config.platform.clone(),
                default_path: self.config.default_path_string(),
            }),

            Action::ChooseDirectory => {
                let path = self
                    .picker
                    .choose(PICKER_TITLE, &self.config.default_path)
                    .unwrap_or_else(|| {
                        debug!("directory picker cancelled; answering with the default path");
                        self.config.default_path.clone()
                    });
                Some(Event::DirectoryChosen {
                    path: path_to_wire(&path),
                })
            }

            Action::Build {
                name,
                url,
                directory,
            } => {
                let request = BuildRequest {
                    name,
                    url,
                    directory,
                };
                match self.bundler.bundle(&request) {
                    Ok(()) => {
                        info!("built {:?} into {:?}", request.name, request.directory);
                        Some(Event::BuildComplete)
                    }
                    Err(e) => {
                        error!("build of {:?} failed: {e}", request.name);
                        None
                    }
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
