//! Core data structures for decoded navgrid components.
//!
//! This module defines the fundamental types produced by the decoders:
//! - Version and option types
//! - Cells and their flags
//! - The height grid
//! - The top-level mesh and overlay results

use std::fmt;
use std::ops::Sub;

use super::flags::CellFlags;

/// A three-component float vector as stored in the file (x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<Vec3> for (f32, f32, f32) {
    fn from(v: Vec3) -> Self {
        (v.x, v.y, v.z)
    }
}

/// The `(major, minor)` version pair read from the start of a file.
///
/// Layout branching is keyed on `major` only; `minor` is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatVersion {
    pub major: u8,
    pub minor: i16,
}

impl FormatVersion {
    pub const fn new(major: u8, minor: i16) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Options accepted by the `*_with` decode entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    /// Fail with `NavGridError::UnsupportedVersion` instead of returning a
    /// partial result carrying a [`DecodeNotice`].
    pub strict_version: bool,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self { strict_version: true }
    }
}

/// A non-fatal condition attached to a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeNotice {
    /// The version's body layout is not known; only the header was read.
    UnsupportedVersion(FormatVersion),
    /// The body of the file was intentionally left unread.
    BodyNotDecoded,
}

/// One traversability cell.
///
/// `index` is the cell's position in read order, and therefore in
/// [`MeshGrid::cells`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub index: usize,
    pub x: i16,
    pub z: i16,
    pub flags: CellFlags,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:05}] <<{:03}, {:03}>>", self.index, self.x, self.z)
    }
}

/// A raw height sample and its value normalized over the whole grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightSample {
    pub raw: f32,
    /// In `[0, 1]`; exactly `0.0` when every sample is equal or the raw
    /// value is not finite.
    pub normalized: f32,
}

/// Minimum and maximum over the finite samples of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl HeightRange {
    /// `max - min`, widened so the full `f32` range does not overflow.
    pub fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }
}

/// The secondary elevation grid. Its resolution is independent of the cell
/// grid's.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    pub count_x: u32,
    pub count_z: u32,
    pub offset_x: f32,
    pub offset_z: f32,
    pub samples: Vec<HeightSample>,
    /// `None` when the grid has no finite sample.
    pub range: Option<HeightRange>,
}

impl HeightGrid {
    /// Sample at grid position `(x, z)`, row-major (`z * count_x + x`).
    pub fn sample_at(&self, x: u32, z: u32) -> Option<&HeightSample> {
        if x >= self.count_x || z >= self.count_z {
            return None;
        }
        let index = z as usize * self.count_x as usize + x as usize;
        self.samples.get(index)
    }

    pub fn range(&self) -> Option<HeightRange> {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A decoded `.aimesh_ngrid` file.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshGrid {
    pub version: FormatVersion,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    /// World units per cell edge.
    pub cell_size: f32,
    pub count_x: u32,
    pub count_z: u32,
    /// Empty when the version's cell layout is not decoded.
    pub cells: Vec<Cell>,
    /// `None` when the version's body layout is not decoded.
    pub heights: Option<HeightGrid>,
    pub notice: Option<DecodeNotice>,
}

impl MeshGrid {
    /// Componentwise `bounds_max - bounds_min`.
    pub fn map_size(&self) -> Vec3 {
        self.bounds_max - self.bounds_min
    }

    /// The declared cell count, `count_x * count_z`.
    pub fn total_cell_count(&self) -> u64 {
        self.count_x as u64 * self.count_z as u64
    }

    /// Cell at grid position `(x, z)`, using `index = z * count_x + x`.
    pub fn cell_at(&self, x: u32, z: u32) -> Option<&Cell> {
        if x >= self.count_x || z >= self.count_z {
            return None;
        }
        let index = z as usize * self.count_x as usize + x as usize;
        self.cells.get(index)
    }

    /// Whether the full body was decoded (no notice attached).
    pub fn is_complete(&self) -> bool {
        self.notice.is_none()
    }
}

/// A decoded `.ngrid_overlay` file. Only the version header is read.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayHeader {
    pub version: FormatVersion,
    /// Always contains [`DecodeNotice::BodyNotDecoded`].
    pub notices: Vec<DecodeNotice>,
}

impl OverlayHeader {
    pub fn is_supported_version(&self) -> bool {
        !self
            .notices
            .iter()
            .any(|n| matches!(n, DecodeNotice::UnsupportedVersion(_)))
    }
}

/// Result of kind-dispatched decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum NavGrid {
    Mesh(MeshGrid),
    Overlay(OverlayHeader),
}
