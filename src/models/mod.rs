//! Disk scheduling domain models.
//!
//! Provides the data types flowing through one engine invocation.
//! Everything is created per call and discarded afterwards.
//!
//! # Domain Mappings
//!
//! | u-diskseek | Disk controller | Textbook |
//! |------------|-----------------|----------|
//! | SchedulingRequest | Pending I/O queue | Request queue |
//! | SchedulingContext | Head + arm state | Initial head position |
//! | HeadPath | Arm trajectory | Seek chart |
//! | ScheduleResult | Access-time estimate | Total head movement |

mod geometry;
mod request;
mod result;
mod sequence;

pub use geometry::{
    DiskGeometry, DEFAULT_DISK_SIZE, DEFAULT_RPM, DEFAULT_SECTOR_SIZE, DEFAULT_SEEK_RATE_MS,
    DEFAULT_TRANSFER_RATE_BYTES_PER_MS,
};
pub use request::{Direction, SchedulingContext, SchedulingRequest};
pub use result::{ScheduleResult, TimingBreakdown};
pub use sequence::{HeadPath, Motion, PathStop, ServiceSequence, StopKind};
