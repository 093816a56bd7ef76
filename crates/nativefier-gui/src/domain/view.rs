//! The seams between the view controller and the outside world.
//!
//! The controller never touches a concrete widget toolkit or host process.
//! It drives a [`ViewSurface`] (a handful of DOM-like primitives addressed by
//! [`ElementId`]) and hands serialized actions to a [`HostTransport`].

use std::fmt;

/// Stable identifiers of the elements the front end works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementId {
    /// The directory control.  Clicking it asks the host for a directory;
    /// its content is the rendered breadcrumb of the current path.
    Directory,
    /// The build trigger.
    Build,
    /// Project name text field.
    Name,
    /// Source URL text field.
    Url,
    /// Area that collects one indicator per finished build.
    BuildStatus,
}

impl ElementId {
    /// All elements, in page order.
    pub const ALL: [ElementId; 5] = [
        ElementId::Directory,
        ElementId::Build,
        ElementId::Name,
        ElementId::Url,
        ElementId::BuildStatus,
    ];

    /// The element's stable identifier string.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementId::Directory => "directory",
            ElementId::Build => "build",
            ElementId::Name => "name",
            ElementId::Url => "url",
            ElementId::BuildStatus => "build-status",
        }
    }

    /// Looks an element up by its identifier string.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.as_str() == id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User gestures the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Directory control clicked.
    ChooseDirectory,
    /// Build trigger clicked.
    Build,
}

/// DOM-like primitives the view controller renders through.
pub trait ViewSurface {
    /// Binds `gesture` to clicks on `target`, replacing any earlier binding.
    fn bind(&mut self, target: ElementId, gesture: Gesture);

    /// Removes all content of `target`.
    fn clear(&mut self, target: ElementId);

    /// Appends a text node to `target`.
    fn append_text(&mut self, target: ElementId, text: &str);

    /// Appends a separator glyph to `target`.
    fn append_separator(&mut self, target: ElementId);

    /// Attaches `path` to `target` as associated data.
    fn set_path_data(&mut self, target: ElementId, path: &str);

    /// The path data attached to `target`, if any.
    fn path_data(&self, target: ElementId) -> Option<String>;

    /// Current value of the input field `target`; empty if never set.
    fn field_value(&self, target: ElementId) -> String;
}

/// The host's single entry point for outbound messages.
///
/// Fire-and-forget: there is no reply and no error.  Anything the host
/// sends back arrives later, uncorrelated, as an event.
#[cfg_attr(test, mockall::automock)]
pub trait HostTransport {
    fn invoke(&self, message: &str);
}
