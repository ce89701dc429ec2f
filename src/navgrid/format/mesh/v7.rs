//! Decoder for mesh major version 7.
//!
//! # Body Layout
//! ```text
//! [N x 48 bytes]  cell records (see `read_cell_record`)
//! [N x 2 bytes]   vision-pathing flags (LE i16)
//! [N x 4 bytes]   region flags: river, jungle|main, lane|poi, ring|reserved
//! [8 x 132 bytes] reserved block (skipped)
//! [height grid]   ← format::heights::parse()
//! ```
//!
//! Each section is read in full before the next one starts; the passes are
//! never interleaved.

use log::trace;

use super::MeshHeader;
use crate::navgrid::codec::flags::{self, RegionBytes};
use crate::navgrid::cursor::ByteCursor;
use crate::navgrid::format::heights;
use crate::navgrid::types::error::{DecodeStep, Result, StepExt};
use crate::navgrid::types::models::{Cell, MeshGrid};

/// Bytes consumed by one fixed cell record.
pub const CELL_RECORD_SIZE: u64 = 48;
pub const VISION_FLAG_SIZE: u64 = 2;
pub const REGION_FLAG_SIZE: u64 = 4;

pub const RESERVED_BLOCK_ROWS: usize = 8;
pub const RESERVED_BLOCK_ROW_SIZE: usize = 132;

/// Grid coordinates retained from a cell record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellCoords {
    x: i16,
    z: i16,
}

pub fn parse(cursor: &mut ByteCursor, header: MeshHeader) -> Result<MeshGrid> {
    let total = header.total_cell_count();

    cursor.ensure_records(DecodeStep::CellRecords, total, CELL_RECORD_SIZE)?;
    let mut coords = Vec::with_capacity(total as usize);
    for _ in 0..total {
        coords.push(read_cell_record(cursor)?);
    }
    trace!("{} cell records read, cursor at offset {}", coords.len(), cursor.tell());

    cursor.ensure_records(DecodeStep::VisionPathingFlags, total, VISION_FLAG_SIZE)?;
    let mut vision = Vec::with_capacity(coords.len());
    for _ in 0..total {
        vision.push(cursor.read_i16_le().step(DecodeStep::VisionPathingFlags)?);
    }
    trace!("Vision-pathing pass done, cursor at offset {}", cursor.tell());

    cursor.ensure_records(DecodeStep::RegionFlags, total, REGION_FLAG_SIZE)?;
    let mut regions = Vec::with_capacity(coords.len());
    for _ in 0..total {
        regions.push(read_region_bytes(cursor)?);
    }
    trace!("Region flag pass done, cursor at offset {}", cursor.tell());

    for _ in 0..RESERVED_BLOCK_ROWS {
        cursor.skip(RESERVED_BLOCK_ROW_SIZE).step(DecodeStep::ReservedBlock)?;
    }

    let heights = heights::parse(cursor)?;

    let cells = coords
        .into_iter()
        .zip(vision)
        .zip(regions)
        .enumerate()
        .map(|(index, ((coords, vision), region))| Cell {
            index,
            x: coords.x,
            z: coords.z,
            flags: flags::cell_flags(vision, region),
        })
        .collect();

    Ok(MeshGrid {
        version: header.version,
        bounds_min: header.bounds_min,
        bounds_max: header.bounds_max,
        cell_size: header.cell_size,
        count_x: header.count_x,
        count_z: header.count_z,
        cells,
        heights: Some(heights),
        notice: None,
    })
}

/// Reads one 48-byte cell record, keeping only the grid coordinates.
///
/// ```text
/// f32 center height      u32 session id       f32 arrival cost
/// u32 open flag          f32 heuristic        i16 x, i16 z
/// u32 actor list         u32 reserved         u32 secondary session id
/// f32 hint weight        i16 reserved         i16 arrival destination
/// i16 hint node 0        i16 hint node 1
/// ```
fn read_cell_record(cursor: &mut ByteCursor) -> Result<CellCoords> {
    let step = DecodeStep::CellRecords;
    let _center_height = cursor.read_f32_le().step(step)?;
    let _session_id = cursor.read_u32_le().step(step)?;
    let _arrival_cost = cursor.read_f32_le().step(step)?;
    let _is_open = cursor.read_bool().step(step)?;
    let _heuristic = cursor.read_f32_le().step(step)?;

    let x = cursor.read_i16_le().step(step)?;
    let z = cursor.read_i16_le().step(step)?;

    let _actor_list = cursor.read_u32_le().step(step)?;
    let _reserved_0 = cursor.read_u32_le().step(step)?;
    let _secondary_session_id = cursor.read_u32_le().step(step)?;
    let _hint_weight = cursor.read_f32_le().step(step)?;
    let _reserved_1 = cursor.read_i16_le().step(step)?;
    let _arrival_destination = cursor.read_i16_le().step(step)?;
    let _hint_node_0 = cursor.read_i16_le().step(step)?;
    let _hint_node_1 = cursor.read_i16_le().step(step)?;

    Ok(CellCoords { x, z })
}

fn read_region_bytes(cursor: &mut ByteCursor) -> Result<RegionBytes> {
    let bytes = cursor.read_bytes(REGION_FLAG_SIZE as usize).step(DecodeStep::RegionFlags)?;
    Ok(RegionBytes::from([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
