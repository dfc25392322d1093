//! Drag payloads and the pasteboard items they are extracted from.
//!
//! The platform layer converts the OS pasteboard into `PasteboardItem`s and
//! advertised type names; everything after that is decided here.

use std::path::{Path, PathBuf};

use super::constants::{PASTEBOARD_FILE_URL, PASTEBOARD_LEGACY_FILENAMES};

/// Ordered, non-empty sequence of absolute file paths taken from a drop.
///
/// Existence of the files is not checked; that is the upload subsystem's
/// business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    paths: Vec<PathBuf>,
}

impl DragPayload {
    /// Build a payload from paths, keeping only absolute ones.
    ///
    /// Returns `None` when nothing is left.
    pub fn new<I, P>(paths: I) -> Option<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths
            .into_iter()
            .map(Into::into)
            .filter(|p| p.is_absolute())
            .collect();
        if paths.is_empty() {
            None
        } else {
            Some(Self { paths })
        }
    }

    /// Extract the file references from pasteboard items.
    ///
    /// Only file-URL items count. Order is preserved.
    pub fn from_items(items: &[PasteboardItem]) -> Option<Self> {
        Self::new(items.iter().filter_map(PasteboardItem::file_path))
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a DragPayload {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// One item read from the drag pasteboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteboardItem {
    /// A `file://` URL, already resolved to a path.
    FileUrl(PathBuf),
    /// Anything else (text, web URLs, images...), kept for diagnostics.
    Other(String),
}

impl PasteboardItem {
    pub fn file<P: Into<PathBuf>>(path: P) -> Self {
        PasteboardItem::FileUrl(path.into())
    }

    fn file_path(&self) -> Option<&Path> {
        match self {
            PasteboardItem::FileUrl(p) => Some(p.as_path()),
            PasteboardItem::Other(_) => None,
        }
    }
}

/// What a drag advertises before it is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadDescriptor {
    types: Vec<String>,
}

impl PayloadDescriptor {
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            types: types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// True if at least one advertised type is a file reference.
    pub fn advertises_file_refs(&self) -> bool {
        self.types
            .iter()
            .any(|t| t == PASTEBOARD_FILE_URL || t == PASTEBOARD_LEGACY_FILENAMES)
    }
}

/// Answer to a drag entering the drop surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptDecision {
    /// Accept and show the copy cursor.
    Copy,
    Reject,
}

impl AcceptDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AcceptDecision::Copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_payload() {
        assert!(DragPayload::new(Vec::<PathBuf>::new()).is_none());
    }

    #[test]
    fn relative_paths_are_discarded() {
        let payload = DragPayload::new(["relative/file.txt", "/abs/file.txt"]).unwrap();
        assert_eq!(payload.paths(), &[PathBuf::from("/abs/file.txt")]);

        assert!(DragPayload::new(["only/relative.txt"]).is_none());
    }

    #[test]
    fn from_items_keeps_file_urls_in_order() {
        let items = vec![
            PasteboardItem::file("/Users/me/b.png"),
            PasteboardItem::Other("public.utf8-plain-text".into()),
            PasteboardItem::file("/Users/me/a.png"),
        ];
        let payload = DragPayload::from_items(&items).unwrap();
        let names: Vec<_> = payload.iter().map(|p| p.to_string_lossy().into_owned()).collect();
        assert_eq!(names, vec!["/Users/me/b.png", "/Users/me/a.png"]);
    }

    #[test]
    fn from_items_without_files_is_none() {
        let items = vec![
            PasteboardItem::Other("public.url".into()),
            PasteboardItem::Other("public.png".into()),
        ];
        assert!(DragPayload::from_items(&items).is_none());
    }

    #[test]
    fn descriptor_accepts_file_url_type() {
        let d = PayloadDescriptor::new(["public.utf8-plain-text", PASTEBOARD_FILE_URL]);
        assert!(d.advertises_file_refs());
    }

    #[test]
    fn descriptor_accepts_legacy_filenames_type() {
        let d = PayloadDescriptor::new([PASTEBOARD_LEGACY_FILENAMES]);
        assert!(d.advertises_file_refs());
    }

    #[test]
    fn descriptor_without_files_is_rejected() {
        assert!(!PayloadDescriptor::new(["public.url", "public.png"]).advertises_file_refs());
        assert!(!PayloadDescriptor::default().advertises_file_refs());
    }
}
