//! Build requests and the errors a bundler can report.

use std::path::PathBuf;

use thiserror::Error;

/// One `Build` action, as received from the front end.
///
/// Fields are kept exactly as sent.  The front end does no validation, so any
/// of them may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Name of the app to produce.
    pub name: String,
    /// URL of the site the app wraps.
    pub url: String,
    /// Output directory.
    pub directory: String,
}

impl BuildRequest {
    /// The output directory as a path.
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.directory)
    }
}

/// Errors a bundler may return.
///
/// A failed build produces no event for the front end; the error only reaches
/// the host's log.
#[derive(Debug, Error)]
pub enum BundleError {
    /// The output directory does not exist or is not a directory.
    #[error("output directory {0:?} is not a directory")]
    MissingOutputDir(PathBuf),
}
