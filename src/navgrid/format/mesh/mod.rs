//! # Mesh Decoding Dispatcher
//!
//! Reads the part of a `.aimesh_ngrid` file shared by every observed major
//! version (bounds, cell size, cell counts) and dispatches the body to the
//! version-specific decoder.
//!
//! ```text
//! [version]        ← format::version::read_mesh()
//! [2 x vec3f]      map bounds (min, max)
//! [f32]            cell size
//! [2 x u32]        cell counts (x, z)
//! [body]           ← v7::parse() | legacy::parse()
//! ```

use log::{debug, info};

use crate::navgrid::cursor::ByteCursor;
use crate::navgrid::format::version::{self, CURRENT_MESH_MAJOR};
use crate::navgrid::types::error::{DecodeStep, Result, StepExt};
use crate::navgrid::types::kind::NavGridKind;
use crate::navgrid::types::models::{DecodeOptions, FormatVersion, MeshGrid, Vec3};

pub mod legacy;
pub mod v7;

/// Fields that precede the version-specific body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshHeader {
    pub version: FormatVersion,
    pub bounds_min: Vec3,
    pub bounds_max: Vec3,
    pub cell_size: f32,
    pub count_x: u32,
    pub count_z: u32,
}

impl MeshHeader {
    pub fn total_cell_count(&self) -> u64 {
        self.count_x as u64 * self.count_z as u64
    }
}

/// Decodes a mesh from the start of the cursor.
pub fn parse(cursor: &mut ByteCursor, options: DecodeOptions) -> Result<MeshGrid> {
    let version = version::read_mesh(cursor)?;
    let header = parse_header(cursor, version)?;

    let mesh = if version.major == CURRENT_MESH_MAJOR {
        v7::parse(cursor, header)?
    } else {
        version::reject_if_strict(options.strict_version, NavGridKind::Mesh, version)?;
        legacy::parse(header)
    };

    info!(
        "Mesh decoded: version={}, {}x{} cells, {} decoded, cursor at {}/{}",
        mesh.version,
        mesh.count_x,
        mesh.count_z,
        mesh.cells.len(),
        cursor.tell(),
        cursor.len()
    );
    Ok(mesh)
}

fn parse_header(cursor: &mut ByteCursor, version: FormatVersion) -> Result<MeshHeader> {
    let bounds_min = cursor.read_vec3f().step(DecodeStep::MapBounds)?;
    let bounds_max = cursor.read_vec3f().step(DecodeStep::MapBounds)?;
    let cell_size = cursor.read_f32_le().step(DecodeStep::CellSize)?;
    let count_x = cursor.read_u32_le().step(DecodeStep::CellCounts)?;
    let count_z = cursor.read_u32_le().step(DecodeStep::CellCounts)?;

    debug!(
        "Map bounds: {:?} .. {:?}, cell size {}, cell counts {}x{}",
        bounds_min, bounds_max, cell_size, count_x, count_z
    );

    Ok(MeshHeader {
        version,
        bounds_min,
        bounds_max,
        cell_size,
        count_x,
        count_z,
    })
}
