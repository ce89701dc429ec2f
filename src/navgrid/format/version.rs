//! Version header parsing for both navgrid kinds.
//!
//! # Header Shapes
//! ```text
//! Mesh:    [1 byte] major, then [2 bytes] minor (LE i16) unless major == 2
//! Overlay: [1 byte] major, [1 byte] minor
//! ```

use log::{debug, warn};

use crate::navgrid::cursor::ByteCursor;
use crate::navgrid::types::error::{DecodeStep, NavGridError, Result, StepExt};
use crate::navgrid::types::kind::NavGridKind;
use crate::navgrid::types::models::FormatVersion;

/// Mesh majors whose existence is known. Only 7 has a decoded body layout.
pub const KNOWN_MESH_MAJORS: [u8; 4] = [2, 3, 5, 7];

/// The mesh major with a fully known layout.
pub const CURRENT_MESH_MAJOR: u8 = 7;

/// The only overlay version with a known header.
pub const OVERLAY_VERSION: FormatVersion = FormatVersion::new(1, 1);

/// Reads the mesh version header.
pub fn read_mesh(cursor: &mut ByteCursor) -> Result<FormatVersion> {
    let major = cursor.read_u8().step(DecodeStep::Version)?;
    let minor = if major != 2 {
        cursor.read_i16_le().step(DecodeStep::Version)?
    } else {
        0
    };
    let version = FormatVersion::new(major, minor);
    debug!("Mesh version: {}", version);

    if !KNOWN_MESH_MAJORS.contains(&major) {
        warn!("Unsupported {} version {}", NavGridKind::Mesh.debug_name(), version);
    }
    Ok(version)
}

/// Reads the overlay version header.
pub fn read_overlay(cursor: &mut ByteCursor) -> Result<FormatVersion> {
    let major = cursor.read_u8().step(DecodeStep::OverlayVersion)?;
    let minor = cursor.read_u8().step(DecodeStep::OverlayVersion)?;
    let version = FormatVersion::new(major, minor as i16);
    debug!("Overlay version: {}", version);

    if version != OVERLAY_VERSION {
        warn!("Unsupported {} version {}", NavGridKind::Overlay.debug_name(), version);
    }
    Ok(version)
}

/// Fails in strict mode; otherwise the caller records a notice.
pub(crate) fn reject_if_strict(strict: bool, kind: NavGridKind, version: FormatVersion) -> Result<()> {
    if strict {
        return Err(NavGridError::UnsupportedVersion { kind, version });
    }
    Ok(())
}
