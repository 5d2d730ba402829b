// File: crates/bars-core/src/error.rs
// Summary: Error type for series construction and checked index access.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BarsError {
    /// A series must hold at least one bar.
    #[error("bar count must be positive")]
    NoBars,
    #[error("bar index {index} out of range for {len} bars")]
    IndexOutOfRange { index: usize, len: usize },
}
