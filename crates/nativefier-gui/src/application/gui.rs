//! Gui: the view controller.
//!
//! Owns the view surface and the action sender.  It is the only consumer of
//! decoded events (through [`EventDispatcher`](super::EventDispatcher)) and
//! the only place user gestures are turned into actions.
//!
//! # Directory rendering
//!
//! [`Gui::set_directory`] replaces the content of the directory control with
//! the path's breadcrumb and attaches the original path as data.  A later
//! `Build` gesture sends exactly that data back to the host.

use tracing::{debug, info};

use crate::application::action_sender::ActionSender;
use crate::domain::{Breadcrumb, Config, ElementId, Gesture, HostTransport, ViewSurface};

/// Text of the indicator appended for each finished build.
pub const BUILD_DONE: &str = "done";

/// The view controller.
pub struct Gui<V, T> {
    view: V,
    sender: ActionSender<T>,
}

impl<V: ViewSurface, T: HostTransport> Gui<V, T> {
    /// Wires gestures on `view` and asks the host for its configuration.
    ///
    /// This is the only constructor, so each controller boots exactly once:
    /// one binding per gesture target, then one `LoadConfig`.
    pub fn boot(mut view: V, transport: T) -> Self {
        view.bind(ElementId::Directory, Gesture::ChooseDirectory);
        view.bind(ElementId::Build, Gesture::Build);

        let gui = Self {
            view,
            sender: ActionSender::new(transport),
        };
        gui.sender.load_config();
        info!("front end booted; waiting for host configuration");
        gui
    }

    /// Reacts to a user gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture) {
        debug!(?gesture, "gesture");
        match gesture {
            Gesture::ChooseDirectory => self.sender.choose_directory(),
            Gesture::Build => {
                let name = self.view.field_value(ElementId::Name);
                let url = self.view.field_value(ElementId::Url);
                let directory = self
                    .view
                    .path_data(ElementId::Directory)
                    .unwrap_or_default();
                self.sender.build(name, url, directory);
            }
        }
    }

    /// Renders `path` as the current directory, split per `config`.
    pub fn set_directory(&mut self, config: &Config, path: &str) {
        let crumb = Breadcrumb::parse(path, config.path_style());
        let target = ElementId::Directory;

        self.view.clear(target);
        for ancestor in &crumb.ancestors {
            self.view.append_text(target, ancestor);
            self.view.append_separator(target);
        }
        self.view.append_text(target, &crumb.leaf);
        self.view.set_path_data(target, &crumb.path);
    }

    /// Appends one build-finished indicator.  Earlier ones are kept.
    pub fn build_complete(&mut self) {
        self.view.append_text(ElementId::BuildStatus, BUILD_DONE);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn transport(&self) -> &T {
        self.sender.transport()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
