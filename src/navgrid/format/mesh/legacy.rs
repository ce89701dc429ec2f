//! Mesh majors without a decoded body layout (2, 3, 5 and anything unknown).
//!
//! The cell records of these versions were never reverse-engineered, so no
//! cell data is produced. The header is returned as-is with an
//! `UnsupportedVersion` notice, and nothing after the cell counts is read.

use log::warn;

use super::MeshHeader;
use crate::navgrid::types::models::{DecodeNotice, MeshGrid};

pub fn parse(header: MeshHeader) -> MeshGrid {
    warn!(
        "Mesh version {} has no known cell layout; returning header only ({} cells declared)",
        header.version,
        header.total_cell_count()
    );

    MeshGrid {
        version: header.version,
        bounds_min: header.bounds_min,
        bounds_max: header.bounds_max,
        cell_size: header.cell_size,
        count_x: header.count_x,
        count_z: header.count_z,
        cells: Vec::new(),
        heights: None,
        notice: Some(DecodeNotice::UnsupportedVersion(header.version)),
    }
}
