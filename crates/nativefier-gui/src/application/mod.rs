//! Application layer: the three collaborating components of the front end.
//!
//! ```text
//! gesture ─► Gui ─► ActionSender ─► HostTransport
//! host event ─► EventDispatcher ─► Gui ─► ViewSurface
//! ```
//!
//! - [`action_sender`]    Encodes outbound actions for the host.
//! - [`event_dispatcher`] Decodes inbound events, owns the [`Config`](crate::domain::Config).
//! - [`gui`]              The view controller.

pub mod action_sender;
pub mod event_dispatcher;
pub mod gui;

pub use action_sender::ActionSender;
pub use event_dispatcher::EventDispatcher;
pub use gui::Gui;
