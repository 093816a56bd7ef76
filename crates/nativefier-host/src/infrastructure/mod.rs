//! Infrastructure layer for nativefier-host.
//!
//! Contains the non-interactive adapters behind the application traits and
//! the loopback task that connects a [`crate::HostService`] to channels.
//!
//! **Dependency rule**: this layer may depend on `application` and `domain`,
//! but MUST NOT be imported by either of them.

pub mod bundler;
pub mod loopback;
pub mod picker;

pub use bundler::DryRunBundler;
pub use loopback::spawn_loopback;
pub use picker::FixedDirectoryPicker;
