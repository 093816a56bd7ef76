//! Infrastructure layer for the front end.
//!
//! - [`memory_view`] An in-memory element tree implementing the view surface.
//! - [`transport`]   Host transport over a tokio channel.
//! - [`console`]     A line-oriented console that drives the view and renders
//!   it as text.
//!
//! **Dependency rule**: this layer may depend on `application` and `domain`,
//! but MUST NOT be imported by them outside of tests.

pub mod console;
pub mod memory_view;
pub mod transport;

pub use console::{render_view, run_console, ConsoleCommand, ConsoleConfig};
pub use memory_view::MemoryView;
pub use transport::ChannelTransport;
