//! Host configuration reported to the front end.
//!
//! [`HostConfig`] is what the host answers `LoadConfig` with.  It is built
//! once at startup, either detected from the running system or supplied on
//! the command line, and never changes afterwards.

use std::path::{Path, PathBuf};

/// Platform name reported on Windows hosts.
///
/// The front end splits paths on backslashes only for this exact value.
pub const PLATFORM_WINDOWS: &str = "windows";

/// Platform name reported on every other host.
pub const PLATFORM_UNIX: &str = "unix";

/// Everything the host tells the front end in `ConfigLoaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Platform name, see [`PLATFORM_WINDOWS`] and [`PLATFORM_UNIX`].
    pub platform: String,

    /// Directory shown before the user picks one, and the fallback when the
    /// directory picker is cancelled.
    pub default_path: PathBuf,
}

impl HostConfig {
    /// Detects the configuration of the machine this process runs on.
    ///
    /// | Field          | Value                                          |
    /// |----------------|------------------------------------------------|
    /// | `platform`     | `"windows"` on Windows, `"unix"` elsewhere     |
    /// | `default_path` | desktop directory, else home directory, else `.` |
    pub fn detect() -> Self {
        let default_path = dirs::desktop_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            platform: detect_platform().to_string(),
            default_path,
        }
    }

    /// Returns a copy with `platform` and/or `default_path` replaced.
    ///
    /// `None` keeps the current value.  Used to apply command-line overrides
    /// on top of [`HostConfig::detect`].
    pub fn with_overrides(
        mut self,
        platform: Option<String>,
        default_path: Option<PathBuf>,
    ) -> Self {
        if let Some(platform) = platform {
            self.platform = platform;
        }
        if let Some(default_path) = default_path {
            self.default_path = default_path;
        }
        self
    }

    /// The default path as the string sent over the wire.
    pub fn default_path_string(&self) -> String {
        path_to_wire(&self.default_path)
    }
}

/// Platform name for the compilation target.
pub fn detect_platform() -> &'static str {
    if cfg!(windows) {
        PLATFORM_WINDOWS
    } else {
        PLATFORM_UNIX
    }
}

/// Converts a path to the string form used in protocol messages.
///
/// Non-UTF-8 components are replaced rather than failing the whole message.
pub fn path_to_wire(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_platform_matches_target() {
        let cfg = HostConfig::detect();
        if cfg!(windows) {
            assert_eq!(cfg.platform, "windows");
        } else {
            assert_eq!(cfg.platform, "unix");
        }
    }

    #[test]
    fn test_detected_default_path_is_never_empty() {
        let cfg = HostConfig::detect();
        assert!(!cfg.default_path.as_os_str().is_empty());
    }

    #[test]
    fn test_overrides_replace_both_fields() {
        // Arrange
        let cfg = HostConfig {
            platform: "unix".to_string(),
            default_path: PathBuf::from("/home/me/Desktop"),
        };

        // Act
        let cfg = cfg.with_overrides(
            Some("windows".to_string()),
            Some(PathBuf::from("D:\\builds")),
        );

        // Assert
        assert_eq!(cfg.platform, "windows");
        assert_eq!(cfg.default_path_string(), "D:\\builds");
    }

    #[test]
    fn test_absent_overrides_keep_detected_values() {
        let detected = HostConfig::detect();
        let cfg = detected.clone().with_overrides(None, None);
        assert_eq!(cfg, detected);
    }
}
