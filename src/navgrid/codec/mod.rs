//! Codec layer for pure data transformations.
//!
//! # Submodules
//!
//! - [`flags`][]: Splitting packed flag bytes into typed flag sets

pub mod flags;
