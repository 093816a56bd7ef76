//! Breadcrumb: a directory path split for display.
//!
//! A path renders as its ancestors, each followed by a separator glyph, then
//! the leaf with no glyph after it:
//!
//! ```text
//! "/a/b/c" (posix)       →  "" > a > b > c
//! "C:\a\b" (windows)     →  C: > a > b
//! "relative" (either)    →  relative
//! ```

use crate::domain::config::PathStyle;

/// A path split into ancestors and leaf, with the original text kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Every segment except the last, in order.  Empty segments are kept.
    pub ancestors: Vec<String>,
    /// The last segment.  Empty when the path is empty or ends in a separator.
    pub leaf: String,
    /// The path exactly as given.
    pub path: String,
}

impl Breadcrumb {
    /// Splits `path` according to `style`.
    pub fn parse(path: &str, style: PathStyle) -> Self {
        let mut ancestors: Vec<String> = style.split(path).into_iter().map(str::to_owned).collect();
        let leaf = ancestors.pop().unwrap_or_default();
        Self {
            ancestors,
            leaf,
            path: path.to_owned(),
        }
    }

    /// Number of separator glyphs the breadcrumb renders with.
    pub fn separator_count(&self) -> usize {
        self.ancestors.len()
    }

    /// All segments, ancestors then leaf.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.ancestors
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.leaf.as_str()))
    }
}
