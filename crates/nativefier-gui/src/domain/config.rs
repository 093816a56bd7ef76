//! Front-end configuration, as reported by the host.

/// Platform value for which paths are split on backslashes.
pub const WINDOWS_PLATFORM: &str = "windows";

/// How a directory path is split into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// Split on `\` alone.  `C:\a` gives `["C:", "a"]`: the drive keeps its
    /// colon instead of the colon being consumed as part of a `:\` separator.
    Windows,
    /// Split strictly on `/`.
    Posix,
}

impl PathStyle {
    /// The style for a reported platform.  Only the exact value `"windows"`
    /// selects [`PathStyle::Windows`]; anything else, including no platform
    /// at all, is [`PathStyle::Posix`].
    pub fn for_platform(platform: Option<&str>) -> Self {
        match platform {
            Some(WINDOWS_PLATFORM) => PathStyle::Windows,
            _ => PathStyle::Posix,
        }
    }

    /// Splits `path` into segments.  Always yields at least one segment.
    pub fn split(self, path: &str) -> Vec<&str> {
        match self {
            PathStyle::Windows => path.split('\\').collect(),
            PathStyle::Posix => path.split('/').collect(),
        }
    }
}

/// Configuration received in the first `ConfigLoaded` event.
///
/// Starts empty and is written at most once; see [`Config::populate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    platform: Option<String>,
    default_path: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the host's configuration if none has been stored yet.
    ///
    /// Returns `false`, leaving the config untouched, if it was already
    /// populated.
    pub fn populate(&mut self, platform: &str, default_path: &str) -> bool {
        if self.is_populated() {
            return false;
        }
        self.platform = Some(platform.to_owned());
        self.default_path = Some(default_path.to_owned());
        true
    }

    pub fn is_populated(&self) -> bool {
        self.platform.is_some()
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn default_path(&self) -> Option<&str> {
        self.default_path.as_deref()
    }

    /// The path style implied by the stored platform.
    pub fn path_style(&self) -> PathStyle {
        PathStyle::for_platform(self.platform())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
