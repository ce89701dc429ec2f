//! Core navgrid reader module

pub mod codec;
pub mod cursor;
pub mod format;
pub mod reader;
pub mod types;

pub use cursor::ByteCursor;
pub use reader::{
    NavGridFile, decode, decode_mesh, decode_mesh_with, decode_overlay, decode_overlay_with,
    decode_with, open,
};
pub use types::error::{DecodeStep, NavGridError, Result};
pub use types::flags;
pub use types::kind::NavGridKind;
pub use types::models;
