//! File format parsing layer for navgrid files.
//!
//! This module provides the mid-level parsing layer that bridges between the
//! [`ByteCursor`](crate::navgrid::cursor::ByteCursor) and the high-level
//! [`NavGridFile`](crate::navgrid::reader::NavGridFile).
//!
//! # Module Organization
//!
//! - [`version`]: Reads the version header of either kind
//! - [`mesh`]: Decodes `.aimesh_ngrid` files, dispatching on the major version
//! - [`heights`]: Decodes the height grid that closes a mesh body
//! - [`overlay`]: Decodes the `.ngrid_overlay` header
//!
//! # Architecture
//!
//! ```text
//! File Structure (mesh, major 7):
//! ┌─────────────────┐
//! │  Version        │ ← version::read_mesh()
//! ├─────────────────┤
//! │  Bounds/Counts  │ ← mesh::parse()
//! ├─────────────────┤
//! │  Cell records   │
//! │  Flag passes    │ ← mesh::v7::parse()
//! │  Reserved block │
//! ├─────────────────┤
//! │  Height grid    │ ← heights::parse()
//! └─────────────────┘
//! ```

pub mod heights;
pub mod mesh;
pub mod overlay;
pub mod version;
