//! # navgrid-reader
//!
//! A reader for navigation grid files (`.aimesh_ngrid` and `.ngrid_overlay`).
//!
//! Mesh files of major version 7 are decoded in full: map bounds, the cell
//! grid with its flag sets, and the height grid. Older majors (2, 3, 5) are
//! recognized but only their header is decoded. Overlay files are decoded up
//! to their version header.
//!
//! ```no_run
//! # fn main() -> navgrid_reader::Result<()> {
//! let mut file = navgrid_reader::open("map11.aimesh_ngrid")?;
//! let mesh = navgrid_reader::decode_mesh(&mut file)?;
//! for cell in mesh.cells.iter().take(3) {
//!     println!("{} {:?}", cell, cell.flags.vision_pathing);
//! }
//! # Ok(())
//! # }
//! ```
pub mod navgrid;

// Re-export the main types for convenience
pub use navgrid::{
    ByteCursor, DecodeStep, NavGridError, NavGridFile, NavGridKind, Result, decode, decode_mesh,
    decode_mesh_with, decode_overlay, decode_overlay_with, decode_with, open,
    flags::{
        CellFlags, FlagCategory, FlagSet, JungleQuadrant, JungleQuadrantKind, MainRegion,
        MainRegionKind, NearestLane, NearestLaneKind, PointOfInterest, PointOfInterestKind,
        ReservedFlags, RingSegment, RingSegmentKind, RiverRegionFlags, VisionPathingFlags,
    },
    models::{
        Cell, DecodeNotice, DecodeOptions, FormatVersion, HeightGrid, HeightRange, HeightSample,
        MeshGrid, NavGrid, OverlayHeader, Vec3,
    },
};
