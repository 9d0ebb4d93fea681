//! Service layer: file-backed list storage and the hero store built on it.
//! - `storage` holds the generic, entity-agnostic pieces.
//! - `file` holds the per-entity stores used by the HTTP layer.

pub mod errors;
pub mod runtime;
pub mod storage;
pub mod file;
