//! Domain layer for the front end: pure types with no I/O.
//!
//! - [`config`]     The host-provided configuration and the path style it implies.
//! - [`breadcrumb`] Splitting a directory path into ancestors and a leaf.
//! - [`view`]       Element identifiers, gestures, and the two seams the
//!   application layer talks through: [`view::ViewSurface`] and
//!   [`view::HostTransport`].

pub mod breadcrumb;
pub mod config;
pub mod view;

pub use breadcrumb::Breadcrumb;
pub use config::{Config, PathStyle};
pub use view::{ElementId, Gesture, HostTransport, ViewSurface};
