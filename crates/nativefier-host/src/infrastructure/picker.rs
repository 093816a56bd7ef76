//! Directory picker that answers without showing a dialog.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::respond::DirectoryPicker;

/// A [`DirectoryPicker`] with a preset answer.
///
/// `FixedDirectoryPicker(None)` behaves like a picker the user always
/// cancels, so the host falls back to its default path.
#[derive(Debug, Clone, Default)]
pub struct FixedDirectoryPicker(pub Option<PathBuf>);

impl DirectoryPicker for FixedDirectoryPicker {
    fn choose(&mut self, title: &str, default: &Path) -> Option<PathBuf> {
        debug!(title, ?default, choice = ?self.0, "directory picker");
        self.0.clone()
    }
}
