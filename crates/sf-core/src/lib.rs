//! sf-core: stable foundation for sankeyflow.
//!
//! Contains:
//! - cell (explicit present-or-missing cell values)
//! - numeric (float helpers + tolerances)
//! - error (shared error types)

pub mod cell;
pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use cell::Cell;
pub use error::{CoreError, CoreResult};
pub use numeric::*;
