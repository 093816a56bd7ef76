//! nativefier-gui library crate.
//!
//! The front end of the nativefier desktop app: a form where the user picks
//! an output directory, names a project, enters a URL and asks a native host
//! to build it.  Everything here is presentation glue; the host does the
//! actual work.
//!
//! # Architecture
//!
//! ```text
//!  ┌──────────── nativefier-gui ────────────┐
//!  │ domain/          Config, Breadcrumb,   │
//!  │                  ElementId, Gesture,   │
//!  │                  ViewSurface,          │
//!  │                  HostTransport         │
//!  │ application/     ActionSender,         │       Action (JSON text)
//!  │                  EventDispatcher, Gui ─┼──────────────────────────► host
//!  │ infrastructure/  MemoryView,           │◄──────────────────────────
//!  │                  ChannelTransport,     │       Event (JSON object)
//!  │                  console               │
//!  └────────────────────────────────────────┘
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O and no async.
//! - `application` depends on `domain` and `nativefier-protocol` only.
//! - `infrastructure` adds tokio and the concrete view.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{ActionSender, EventDispatcher, Gui};
pub use domain::{Config, ElementId, Gesture, HostTransport, PathStyle, ViewSurface};
