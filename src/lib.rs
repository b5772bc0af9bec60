//! Falling-block puzzle simulation (workspace facade crate).
//!
//! Re-exports the `tetro_field::{core, types}` public API; the implementation
//! lives in dedicated crates under `crates/`.

pub use tetro_field_core as core;
pub use tetro_field_types as types;
