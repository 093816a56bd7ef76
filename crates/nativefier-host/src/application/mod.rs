//! Application layer for nativefier-host.
//!
//! - **`respond`** – [`respond::HostService`] turns each action into at most
//!   one event.  It reaches native facilities only through the
//!   [`respond::DirectoryPicker`] and [`respond::AppBundler`] traits, so it
//!   runs in tests without dialogs or real builds.

pub mod respond;
