use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::cursor::ByteCursor;
use super::format;
use super::types::error::{NavGridError, Result};
use super::types::kind::NavGridKind;
use super::types::models::{DecodeOptions, MeshGrid, NavGrid, OverlayHeader};

/// An opened navgrid file: the whole file contents plus a read position.
///
/// The buffer is read once at open time and never modified. Decoders always
/// start from offset 0, so a file can be decoded more than once.
#[derive(Debug, Clone)]
pub struct NavGridFile {
    path: PathBuf,
    kind: NavGridKind,
    cursor: ByteCursor,
}

impl NavGridFile {
    /// Reads a navgrid file from the given path.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The extension is not `aimesh_ngrid` or `ngrid_overlay`
    /// - The file cannot be read
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let kind = NavGridKind::classify(path)?;
        let path = fs::canonicalize(path)?;
        info!("Opening {} file: {}", kind.debug_name(), path.display());

        let data = fs::read(&path)?;
        debug!("Read {} bytes", data.len());

        Ok(Self {
            path,
            kind,
            cursor: ByteCursor::new(data),
        })
    }

    /// Wraps an in-memory buffer, classifying it by `file_name`.
    pub fn from_bytes(file_name: impl AsRef<Path>, data: Vec<u8>) -> Result<Self> {
        let path = file_name.as_ref().to_path_buf();
        let kind = NavGridKind::classify(&path)?;
        Ok(Self {
            path,
            kind,
            cursor: ByteCursor::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name without its final extension.
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
    }

    pub fn extension(&self) -> &'static str {
        self.kind.extension()
    }

    pub fn kind(&self) -> NavGridKind {
        self.kind
    }

    /// Buffer length in bytes.
    pub fn size(&self) -> usize {
        self.cursor.len()
    }

    /// Current read position.
    pub fn pos(&self) -> u64 {
        self.cursor.tell()
    }

    /// Direct cursor access for diagnostic re-reads.
    pub fn cursor_mut(&mut self) -> &mut ByteCursor {
        &mut self.cursor
    }

    fn expect_kind(&self, expected: NavGridKind) -> Result<()> {
        if self.kind != expected {
            return Err(NavGridError::KindMismatch {
                expected,
                found: self.kind,
            });
        }
        Ok(())
    }
}

/// Opens a file; see [`NavGridFile::open`].
pub fn open(path: impl AsRef<Path>) -> Result<NavGridFile> {
    NavGridFile::open(path)
}

pub fn decode_mesh(file: &mut NavGridFile) -> Result<MeshGrid> {
    decode_mesh_with(file, DecodeOptions::default())
}

/// Decodes a `.aimesh_ngrid` file.
///
/// Versions without a known body layout succeed with empty cells and a
/// [`DecodeNotice::UnsupportedVersion`](super::types::models::DecodeNotice)
/// unless `options.strict_version` is set.
pub fn decode_mesh_with(file: &mut NavGridFile, options: DecodeOptions) -> Result<MeshGrid> {
    file.expect_kind(NavGridKind::Mesh)?;
    file.cursor.reset();
    format::mesh::parse(&mut file.cursor, options)
}

pub fn decode_overlay(file: &mut NavGridFile) -> Result<OverlayHeader> {
    decode_overlay_with(file, DecodeOptions::default())
}

/// Decodes the header of a `.ngrid_overlay` file.
pub fn decode_overlay_with(file: &mut NavGridFile, options: DecodeOptions) -> Result<OverlayHeader> {
    file.expect_kind(NavGridKind::Overlay)?;
    file.cursor.reset();
    format::overlay::parse(&mut file.cursor, options)
}

pub fn decode(file: &mut NavGridFile) -> Result<NavGrid> {
    decode_with(file, DecodeOptions::default())
}

/// Decodes a file with the decoder matching its kind.
pub fn decode_with(file: &mut NavGridFile, options: DecodeOptions) -> Result<NavGrid> {
    match file.kind {
        NavGridKind::Mesh => decode_mesh_with(file, options).map(NavGrid::Mesh),
        NavGridKind::Overlay => decode_overlay_with(file, options).map(NavGrid::Overlay),
    }
}
