//! Bundler that validates a build request without producing an app.
//!
//! Packaging a real desktop app is out of scope for this workspace; the
//! dry-run bundler performs the checks that can fail before packaging starts
//! and records what would have been built.

use tracing::info;

use crate::application::respond::AppBundler;
use crate::domain::{BuildRequest, BundleError};

/// An [`AppBundler`] that checks the output directory and records requests.
#[derive(Debug, Default)]
pub struct DryRunBundler {
    completed: Vec<BuildRequest>,
}

impl DryRunBundler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that passed validation, in arrival order.
    pub fn requests(&self) -> &[BuildRequest] {
        &self.completed
    }
}

impl AppBundler for DryRunBundler {
    fn bundle(&mut self, request: &BuildRequest) -> Result<(), BundleError> {
        let out = request.output_dir();
        if !out.is_dir() {
            return Err(BundleError::MissingOutputDir(out));
        }
        info!(
            name = %request.name,
            url = %request.url,
            "dry run: would package app into {}",
            out.display()
        );
        self.completed.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(directory: String) -> BuildRequest {
        BuildRequest {
            name: "Docs".to_string(),
            url: "https://docs.rs".to_string(),
            directory,
        }
    }

    #[test]
    fn test_existing_directory_is_recorded() {
        // Arrange
        let dir = std::env::temp_dir();
        let req = request(dir.to_string_lossy().into_owned());
        let mut bundler = DryRunBundler::new();

        // Act
        let result = bundler.bundle(&req);

        // Assert
        assert!(result.is_ok());
        assert_eq!(bundler.requests(), &[req]);
    }

    #[test]
    fn test_missing_directory_fails_and_records_nothing() {
        let mut bundler = DryRunBundler::new();
        let req = request("/definitely/not/a/real/nativefier/dir".to_string());

        let result = bundler.bundle(&req);

        assert!(matches!(result, Err(BundleError::MissingOutputDir(_))));
        assert!(bundler.requests().is_empty());
    }

    #[test]
    fn test_empty_directory_fails() {
        let mut bundler = DryRunBundler::new();
        assert!(bundler.bundle(&request(String::new())).is_err());
    }
}
