//! Foundational data structures, error types, and file kind definitions.

pub mod error;
pub mod flags;
pub mod kind;
pub mod models;
