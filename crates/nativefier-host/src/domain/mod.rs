//! Domain layer for nativefier-host.
//!
//! Plain data describing the host: its configuration and the build requests
//! it receives.  Nothing here touches the file system or a runtime.

pub mod build;
pub mod config;

pub use build::{BuildRequest, BundleError};
pub use config::HostConfig;
