//! Custom error types for the navgrid-reader crate.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::kind::NavGridKind;
use super::models::FormatVersion;

/// The logical decode step a read was issued from.
///
/// Carried by [`NavGridError::TruncatedInput`] and
/// [`NavGridError::MalformedStructure`] so a failure names the field that
/// could not be read, not just the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// A read issued directly on the cursor, outside any decoder step.
    Raw,
    Version,
    MapBounds,
    CellSize,
    CellCounts,
    CellRecords,
    VisionPathingFlags,
    RegionFlags,
    ReservedBlock,
    HeightGridHeader,
    HeightSamples,
    OverlayVersion,
}

impl fmt::Display for DecodeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DecodeStep::Raw => "raw read",
            DecodeStep::Version => "version",
            DecodeStep::MapBounds => "map bounds",
            DecodeStep::CellSize => "cell size",
            DecodeStep::CellCounts => "cell counts",
            DecodeStep::CellRecords => "cell records",
            DecodeStep::VisionPathingFlags => "vision-pathing flags",
            DecodeStep::RegionFlags => "region flags",
            DecodeStep::ReservedBlock => "reserved block",
            DecodeStep::HeightGridHeader => "height grid header",
            DecodeStep::HeightSamples => "height samples",
            DecodeStep::OverlayVersion => "overlay version",
        };
        f.write_str(name)
    }
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum NavGridError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file name does not carry one of the known navgrid extensions.
    #[error("Unsupported file type '{}' for {}. Valid extensions are aimesh_ngrid, ngrid_overlay", .extension, .path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// Fewer bytes remain than the current read requires.
    #[error("Truncated input while reading {step} at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        step: DecodeStep,
        offset: u64,
        needed: usize,
        available: usize,
    },

    /// Declared sizes or counts are inconsistent with the buffer.
    #[error("Malformed structure in {step}: {reason}")]
    MalformedStructure { step: DecodeStep, reason: String },

    /// A diagnostic seek pointed past the end of the buffer.
    #[error("Seek to offset {offset} is out of bounds (buffer length {len})")]
    SeekOutOfBounds { offset: u64, len: usize },

    /// A decoder was handed a file of the other kind.
    #[error("Expected a {expected} file, but found a {found} file")]
    KindMismatch {
        expected: NavGridKind,
        found: NavGridKind,
    },

    /// The version layout is not known. Only raised in strict mode; otherwise
    /// reported through [`DecodeNotice`](super::models::DecodeNotice).
    #[error("Unsupported {kind} version {version}")]
    UnsupportedVersion {
        kind: NavGridKind,
        version: FormatVersion,
    },
}

impl NavGridError {
    /// Relabels a cursor failure with the decode step that issued the read.
    pub(crate) fn in_step(self, step: DecodeStep) -> Self {
        match self {
            NavGridError::TruncatedInput { offset, needed, available, .. } => {
                NavGridError::TruncatedInput { step, offset, needed, available }
            }
            NavGridError::MalformedStructure { reason, .. } => {
                NavGridError::MalformedStructure { step, reason }
            }
            other => other,
        }
    }
}

/// Attaches a [`DecodeStep`] to the error side of a cursor read.
pub(crate) trait StepExt<T> {
    fn step(self, step: DecodeStep) -> Result<T>;
}

impl<T> StepExt<T> for Result<T> {
    fn step(self, step: DecodeStep) -> Result<T> {
        self.map_err(|e| e.in_step(step))
    }
}

/// A convenience `Result` type alias using the crate's `NavGridError` type.
pub type Result<T> = std::result::Result<T, NavGridError>;
