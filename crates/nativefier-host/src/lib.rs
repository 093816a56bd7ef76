//! nativefier-host library entry point.
//!
//! The host is the native side of the bridge.  It receives serialized
//! [`Action`](nativefier_protocol::Action)s, performs the native work they
//! ask for, and answers with [`Event`](nativefier_protocol::Event)s:
//!
//! ```text
//! LoadConfig       ──►  ConfigLoaded { platform, default_path }
//! ChooseDirectory  ──►  DirectoryChosen { path }
//! Build            ──►  BuildComplete          (only on success)
//! ```
//!
//! # Layers
//!
//! - `domain/`         Host configuration and build requests (no I/O).
//! - `application/`    [`HostService`]: decodes actions and produces events,
//!   talking to the picker and bundler through traits.
//! - `infrastructure/` Picker and bundler implementations, and the loopback
//!   task that runs a host in-process behind a pair of channels.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::respond::{AppBundler, DirectoryPicker, HostService};
pub use domain::{BuildRequest, HostConfig};
pub use infrastructure::{spawn_loopback, DryRunBundler, FixedDirectoryPicker};
