//! Error taxonomy for the scheduling engine.
//!
//! Three categories, each a closed enum:
//!
//! - [`InputError`]: caller-correctable input (empty set, out-of-range cylinder,
//!   bad geometry). Raised by [`crate::validation`].
//! - [`UnknownAlgorithm`]: a policy name outside the six supported ones.
//! - [`BoundaryProtocolError`]: a malformed line at the textual boundary
//!   ([`crate::wire`]).
//!
//! [`ScheduleError`] wraps all three so `?` works across layers while the
//! caller can still match on the category.

use thiserror::Error;

/// Invalid head position, disk size, disk constant, or request set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// The request set was empty.
    #[error("no requests supplied")]
    EmptyRequestSet,
    /// A head position or request lies outside `0..disk_size`.
    #[error("cylinder {value} is out of bounds (valid range 0..{disk_size})")]
    OutOfBounds { value: i64, disk_size: i64 },
    /// The disk size is not positive or the head is not below it.
    #[error("invalid geometry: head position {head_position} with disk size {disk_size} (disk size must be positive and head below it)")]
    InvalidGeometry { disk_size: i64, head_position: i64 },
    /// An RPM, transfer rate, or seek rate is not a usable number.
    #[error("disk constant '{parameter}' must be a finite positive number, got {value}")]
    InvalidDiskConstant { parameter: &'static str, value: f64 },
}

/// A policy name that is not one of FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{name}' (expected one of FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK)")]
pub struct UnknownAlgorithm {
    pub name: String,
}

/// A textual response that cannot be decoded into a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryProtocolError {
    /// The line was blank.
    #[error("empty response")]
    EmptyResponse,
    /// The line did not split into exactly six fields.
    #[error("expected 6 '|'-separated fields, found {found}")]
    FieldCount { found: usize },
    /// A movement or sequence field failed to parse as an integer.
    #[error("field '{field}' is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },
    /// A timing field failed to parse or was negative or non-finite.
    #[error("field '{field}' is not a number: '{value}'")]
    InvalidFloat { field: &'static str, value: String },
    /// The sequence lacked a head position and at least one request.
    #[error("sequence must contain at least 2 cylinders, found {len}")]
    SequenceTooShort { len: usize },
}

/// Any failure surfaced by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
    #[error("boundary protocol error: {0}")]
    Protocol(#[from] BoundaryProtocolError),
}
