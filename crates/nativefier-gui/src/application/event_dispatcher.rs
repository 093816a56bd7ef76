//! EventDispatcher: the inbound half of the bridge.
//!
//! | event             | effect                                                  |
//! |-------------------|---------------------------------------------------------|
//! | `ConfigLoaded`    | store config (first time only); render `default_path`  |
//! | `DirectoryChosen` | render `path`                                           |
//! | `BuildComplete`   | append a build-finished indicator                       |
//! | anything else     | nothing                                                 |
//!
//! Events are dispatched one at a time, in delivery order.

use nativefier_protocol::{decode_event, Event};
use serde_json::Value;
use tracing::debug;

use crate::application::gui::Gui;
use crate::domain::{Config, HostTransport, ViewSurface};

/// Routes host events to the view controller.
///
/// The dispatcher is the single writer of [`Config`]; the controller only
/// ever receives it by shared reference.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    config: Config,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decodes a host-delivered object and dispatches it.
    ///
    /// A known tag with missing or mistyped fields is dropped.  An unknown
    /// tag decodes to [`Event::Unknown`] and is ignored by [`dispatch`].
    ///
    /// [`dispatch`]: EventDispatcher::dispatch
    pub fn deliver<V: ViewSurface, T: HostTransport>(
        &mut self,
        gui: &mut Gui<V, T>,
        value: Value,
    ) {
        match decode_event(value) {
            Ok(event) => self.dispatch(gui, event),
            Err(e) => debug!("dropping event: {e}"),
        }
    }

    /// Routes one decoded event.
    pub fn dispatch<V: ViewSurface, T: HostTransport>(
        &mut self,
        gui: &mut Gui<V, T>,
        event: Event,
    ) {
        match event {
            Event::ConfigLoaded {
                platform,
                default_path,
            } => {
                debug!(%platform, %default_path, "config loaded");
                if !self.config.populate(&platform, &default_path) {
                    debug!("config already set; keeping the first one");
                }
                gui.set_directory(&self.config, &default_path);
            }
            Event::DirectoryChosen { path } => {
                debug!(%path, "directory chosen");
                gui.set_directory(&self.config, &path);
            }
            Event::BuildComplete => {
                debug!("build complete");
                gui.build_complete();
            }
            Event::Unknown => {}
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::MockHostTransport;
    use crate::domain::ElementId;
    use crate::infrastructure::memory_view::MemoryView;
    use serde_json::json;

    fn booted() -> Gui<MemoryView, MockHostTransport> {
        let mut transport = MockHostTransport::new();
        transport.expect_invoke().return_const(());
        Gui::boot(MemoryView::new(), transport)
    }

    #[test]
    fn test_windows_config_renders_drive_breadcrumb() {
        // Arrange
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();

        // Act
        dispatcher.deliver(
            &mut gui,
            json!({"type": "ConfigLoaded", "platform": "windows", "default_path": "C:\\a\\b"}),
        );

        // Assert
        let view = gui.view();
        assert_eq!(view.segments(ElementId::Directory), vec!["C:", "a", "b"]);
        assert_eq!(view.separator_count(ElementId::Directory), 2);
        assert_eq!(view.path_data(ElementId::Directory).as_deref(), Some("C:\\a\\b"));
        assert_eq!(dispatcher.config().platform(), Some("windows"));
    }

    #[test]
    fn test_linux_config_renders_root_as_empty_ancestor() {
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();

        dispatcher.deliver(
            &mut gui,
            json!({"type": "ConfigLoaded", "platform": "linux", "default_path": "/a/b/c"}),
        );

        assert_eq!(gui.view().segments(ElementId::Directory), vec!["", "a", "b", "c"]);
        assert_eq!(gui.view().separator_count(ElementId::Directory), 3);
    }

    #[test]
    fn test_directory_chosen_uses_stored_platform() {
        // Arrange
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.dispatch(
            &mut gui,
            Event::ConfigLoaded {
                platform: "windows".to_string(),
                default_path: "C:\\Users\\me\\Desktop".to_string(),
            },
        );

        // Act
        dispatcher.dispatch(
            &mut gui,
            Event::DirectoryChosen {
                path: "D:\\builds\\apps".to_string(),
            },
        );

        // Assert
        assert_eq!(gui.view().segments(ElementId::Directory), vec!["D:", "builds", "apps"]);
        assert_eq!(
            gui.view().path_data(ElementId::Directory).as_deref(),
            Some("D:\\builds\\apps")
        );
    }

    #[test]
    fn test_second_config_loaded_keeps_first_platform() {
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.dispatch(
            &mut gui,
            Event::ConfigLoaded {
                platform: "unix".to_string(),
                default_path: "/home/me".to_string(),
            },
        );

        dispatcher.dispatch(
            &mut gui,
            Event::ConfigLoaded {
                platform: "windows".to_string(),
                default_path: "C:\\x\\y".to_string(),
            },
        );

        // Still split on '/', so the backslash path is one segment.
        assert_eq!(dispatcher.config().platform(), Some("unix"));
        assert_eq!(dispatcher.config().default_path(), Some("/home/me"));
        assert_eq!(gui.view().segments(ElementId::Directory), vec!["C:\\x\\y"]);
    }

    #[test]
    fn test_unknown_tag_changes_nothing() {
        // Arrange
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.deliver(
            &mut gui,
            json!({"type": "ConfigLoaded", "platform": "unix", "default_path": "/srv"}),
        );
        dispatcher.deliver(&mut gui, json!({"type": "BuildComplete"}));
        let view_before = gui.view().clone();
        let config_before = dispatcher.config().clone();

        // Act
        dispatcher.deliver(&mut gui, json!({"type": "Unknown"}));
        dispatcher.deliver(&mut gui, json!({"type": "BuildFailed", "reason": "offline"}));

        // Assert
        assert_eq!(gui.view(), &view_before);
        assert_eq!(dispatcher.config(), &config_before);
    }

    #[test]
    fn test_malformed_known_event_is_dropped() {
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();
        let view_before = gui.view().clone();

        dispatcher.deliver(&mut gui, json!({"type": "ConfigLoaded", "platform": "unix"}));
        dispatcher.deliver(&mut gui, json!({"type": "DirectoryChosen", "path": 7}));
        dispatcher.deliver(&mut gui, json!(["not", "an", "object"]));

        assert_eq!(gui.view(), &view_before);
        assert!(!dispatcher.config().is_populated());
    }

    #[test]
    fn test_two_build_completes_give_two_indicators() {
        let mut gui = booted();
        let mut dispatcher = EventDispatcher::new();

        dispatcher.dispatch(&mut gui, Event::BuildComplete);
        dispatcher.dispatch(&mut gui, Event::BuildComplete);

        assert_eq!(gui.view().statuses().len(), 2);
    }
}
