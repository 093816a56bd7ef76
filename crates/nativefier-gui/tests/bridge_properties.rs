//! Integration tests for the front-end bridge through its public API.
//!
//! Outbound actions are captured with a [`ChannelTransport`] whose receiver
//! the test keeps; inbound events are delivered as JSON objects, the way the
//! host delivers them.

use nativefier_gui::infrastructure::{ChannelTransport, MemoryView};
use nativefier_gui::{ElementId, EventDispatcher, Gui, ViewSurface};
use serde_json::json;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn boot() -> (Gui<MemoryView, ChannelTransport>, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (Gui::boot(MemoryView::new(), ChannelTransport::new(tx)), rx)
}

fn sent(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut messages = Vec::new();
    while let Ok(message) = rx.try_recv() {
        messages.push(message);
    }
    messages
}

#[test]
fn test_boot_issues_one_load_config_and_binds_both_targets() {
    // Act
    let (gui, mut rx) = boot();

    // Assert
    assert_eq!(sent(&mut rx), vec![r#"{"type":"LoadConfig"}"#]);
    assert_eq!(gui.view().binding_count(), 2);
}

#[test]
fn test_full_form_round_trip_sends_rendered_path_back() {
    // Arrange
    let (mut gui, mut rx) = boot();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.deliver(
        &mut gui,
        json!({
            "type": "ConfigLoaded",
            "platform": "windows",
            "default_path": "C:\\Users\\me\\Desktop",
        }),
    );
    dispatcher.deliver(&mut gui, json!({"type": "DirectoryChosen", "path": "D:\\apps"}));
    gui.view_mut().set_field_value(ElementId::Name, "Chat");
    gui.view_mut().set_field_value(ElementId::Url, "https://chat.example.org");
    sent(&mut rx);

    // Act
    let gesture = gui.view().click(ElementId::Build).expect("build is bound");
    gui.handle_gesture(gesture);

    // Assert
    assert_eq!(
        sent(&mut rx),
        vec![concat!(
            r#"{"type":"Build","name":"Chat","url":"https://chat.example.org","#,
            r#""directory":"D:\\apps"}"#
        )]
    );
}

#[test]
fn test_retained_path_equals_input_for_any_shape() {
    let paths = ["", "/", "C:\\", "a//b", "\\\\srv\\share", "/trailing/", "plain"];
    for platform in ["windows", "unix"] {
        let (mut gui, _rx) = boot();
        let mut dispatcher = EventDispatcher::new();
        dispatcher.deliver(
            &mut gui,
            json!({"type": "ConfigLoaded", "platform": platform, "default_path": "x"}),
        );
        for path in paths {
            dispatcher.deliver(&mut gui, json!({"type": "DirectoryChosen", "path": path}));

            let view = gui.view();
            assert_eq!(view.path_data(ElementId::Directory).as_deref(), Some(path));
            assert_eq!(
                view.separator_count(ElementId::Directory),
                view.segments(ElementId::Directory).len() - 1,
                "{platform} {path:?}"
            );
        }
    }
}

#[test]
fn test_non_windows_platform_never_splits_on_backslash() {
    let (mut gui, _rx) = boot();
    let mut dispatcher = EventDispatcher::new();

    dispatcher.deliver(
        &mut gui,
        json!({"type": "ConfigLoaded", "platform": "darwin", "default_path": "C:\\a\\b"}),
    );

    assert_eq!(gui.view().segments(ElementId::Directory), vec!["C:\\a\\b"]);
    assert_eq!(gui.view().separator_count(ElementId::Directory), 0);
}

#[test]
fn test_status_indicators_accumulate() {
    let (mut gui, _rx) = boot();
    let mut dispatcher = EventDispatcher::new();

    for _ in 0..3 {
        dispatcher.deliver(&mut gui, json!({"type": "BuildComplete"}));
    }

    assert_eq!(gui.view().statuses(), vec!["done", "done", "done"]);
}
