//! File kind classification (.aimesh_ngrid vs .ngrid_overlay).

use std::fmt;
use std::path::Path;

use super::error::{NavGridError, Result};

/// The two navgrid file kinds, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavGridKind {
    /// The cell grid (`.aimesh_ngrid`).
    Mesh,
    /// The companion overlay file (`.ngrid_overlay`).
    Overlay,
}

impl NavGridKind {
    /// Every recognized kind, in extension-table order.
    pub const ALL: [NavGridKind; 2] = [NavGridKind::Mesh, NavGridKind::Overlay];

    /// The file extension (without the dot) that selects this kind.
    pub const fn extension(self) -> &'static str {
        match self {
            NavGridKind::Mesh => "aimesh_ngrid",
            NavGridKind::Overlay => "ngrid_overlay",
        }
    }

    /// A short name used for debugging and logging.
    pub const fn debug_name(self) -> &'static str {
        match self {
            NavGridKind::Mesh => "AIMESH",
            NavGridKind::Overlay => "OVERLAY",
        }
    }

    /// Looks up the kind for an extension. Matching is case-sensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.extension() == ext)
    }

    /// Classifies a path by the text after the last `.` of its file name.
    ///
    /// # Errors
    /// Returns [`NavGridError::UnsupportedFormat`] when the name has no
    /// extension or the extension is not in the known set.
    pub fn classify(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(extension).ok_or_else(|| NavGridError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.to_string(),
        })
    }
}

impl fmt::Display for NavGridKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
