//! Message types for the front-end/host protocol.
//!
//! # JSON discriminant
//!
//! Every message is a JSON object with a `"type"` field that identifies the
//! variant.  All other fields are flattened into the same object:
//!
//! ```json
//! {"type":"LoadConfig"}
//! {"type":"ConfigLoaded","platform":"unix","default_path":"/home/me/Desktop"}
//! ```
//!
//! Actions and events are separate enums so that sending a host-only message
//! from the front end (or the reverse) is a compile-time error.

use serde::{Deserialize, Serialize};

// ── Front end → host ──────────────────────────────────────────────────────────

/// An outbound intent sent from the front end to the host.
///
/// Actions are fire-and-forget.  The host may answer with zero or more
/// [`Event`]s later, but nothing ties a reply to the action that caused it.
///
/// # Serde representation
///
/// ```json
/// {"type":"LoadConfig"}
/// {"type":"ChooseDirectory"}
/// {"type":"Build","name":"Docs","url":"https://docs.rs","directory":"/tmp/out"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Ask the host for its platform and default output directory.
    ///
    /// Sent exactly once, when the front end boots.
    LoadConfig,

    /// Ask the host to open its native directory picker.
    ChooseDirectory,

    /// Ask the host to build an app.
    ///
    /// Field values are forwarded verbatim from the form; the front end does
    /// not trim or validate them.
    Build {
        /// Name of the app to produce.
        name: String,
        /// URL of the site the app wraps.
        url: String,
        /// Output directory, exactly as last rendered in the breadcrumb.
        directory: String,
    },
}

impl Action {
    /// The value of the `"type"` discriminant for this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LoadConfig => "LoadConfig",
            Action::ChooseDirectory => "ChooseDirectory",
            Action::Build { .. } => "Build",
        }
    }
}

// ── Host → front end ──────────────────────────────────────────────────────────

/// An inbound notification delivered by the host to the front end.
///
/// # Serde representation
///
/// ```json
/// {"type":"ConfigLoaded","platform":"windows","default_path":"C:\\Users\\me\\Desktop"}
/// {"type":"DirectoryChosen","path":"/home/me/out"}
/// {"type":"BuildComplete"}
/// ```
///
/// Any other `"type"` value decodes to [`Event::Unknown`] rather than
/// failing.  The host controls the protocol, so an unrecognised tag is
/// something newer than this front end and is dropped on the floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Answer to [`Action::LoadConfig`].
    ConfigLoaded {
        /// Host platform name.  `"windows"` selects backslash path splitting;
        /// anything else selects forward slashes.
        platform: String,
        /// Directory to show before the user picks one.
        default_path: String,
    },

    /// Answer to [`Action::ChooseDirectory`].
    DirectoryChosen {
        /// The directory the user picked.
        path: String,
    },

    /// Answer to a successful [`Action::Build`].
    BuildComplete,

    /// Any tag this front end does not know.
    #[serde(other)]
    Unknown,
}

impl Event {
    /// The value of the `"type"` discriminant for this event.
    ///
    /// [`Event::Unknown`] reports `"Unknown"`; the original tag is not kept.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ConfigLoaded { .. } => "ConfigLoaded",
            Event::DirectoryChosen { .. } => "DirectoryChosen",
            Event::BuildComplete => "BuildComplete",
            Event::Unknown => "Unknown",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_config_serializes_to_bare_type_object() {
        // Act
        let value = serde_json::to_value(Action::LoadConfig).unwrap();

        // Assert
        assert_eq!(value, json!({"type": "LoadConfig"}));
    }

    #[test]
    fn test_choose_directory_serializes_to_bare_type_object() {
        let value = serde_json::to_value(Action::ChooseDirectory).unwrap();
        assert_eq!(value, json!({"type": "ChooseDirectory"}));
    }

    #[test]
    fn test_build_fields_are_flattened_next_to_type() {
        // Arrange
        let action = Action::Build {
            name: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
            directory: "/tmp/out".to_string(),
        };

        // Act
        let value = serde_json::to_value(&action).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "type": "Build",
                "name": "Docs",
                "url": "https://docs.rs",
                "directory": "/tmp/out"
            })
        );
    }

    #[test]
    fn test_config_loaded_deserializes_from_host_object() {
        // Arrange: what the host delivers after LoadConfig
        let value = json!({
            "type": "ConfigLoaded",
            "platform": "windows",
            "default_path": "C:\\Users\\me\\Desktop"
        });

        // Act
        let event: Event = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(
            event,
            Event::ConfigLoaded {
                platform: "windows".to_string(),
                default_path: "C:\\Users\\me\\Desktop".to_string(),
            }
        );
    }

    #[test]
    fn test_build_complete_ignores_extra_fields() {
        let value = json!({"type": "BuildComplete", "elapsed_ms": 1200});
        let event: Event = serde_json::from_value(value).unwrap();
        assert_eq!(event, Event::BuildComplete);
    }

    #[test]
    fn test_unrecognised_event_tag_decodes_to_unknown() {
        // Arrange
        let value = json!({"type": "BuildFailed", "reason": "disk full"});

        // Act
        let event: Event = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(event, Event::Unknown);
    }

    #[test]
    fn test_directory_chosen_without_path_is_an_error() {
        let value = json!({"type": "DirectoryChosen"});
        let result: Result<Event, _> = serde_json::from_value(value);
        assert!(result.is_err(), "a known tag with missing fields must not decode");
    }

    #[test]
    fn test_unknown_action_tag_is_an_error() {
        // Actions have no catch-all: the host rejects what it does not understand.
        let result: Result<Action, _> = serde_json::from_str(r#"{"type":"Publish"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_matches_serialized_tag() {
        let actions = [
            Action::LoadConfig,
            Action::ChooseDirectory,
            Action::Build {
                name: String::new(),
                url: String::new(),
                directory: String::new(),
            },
        ];
        for action in actions {
            let value = serde_json::to_value(&action).unwrap();
            assert_eq!(value["type"], action.kind());
        }

        let events = [
            Event::ConfigLoaded {
                platform: "unix".to_string(),
                default_path: "/".to_string(),
            },
            Event::DirectoryChosen {
                path: "/".to_string(),
            },
            Event::BuildComplete,
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["type"], event.kind());
        }
    }
}
