//! Access-time model.
//!
//! Converts a head trajectory into seek, rotational, and transfer time
//! using fixed disk constants.
//!
//! # Formulas
//!
//! | Component | Definition |
//! |-----------|-----------|
//! | Seek | movement × seek rate (ms/cylinder) |
//! | Rotational latency | served × ½ revolution, revolution = 60 000 / RPM ms |
//! | Transfer | served × sector size / transfer rate (bytes/ms) |
//! | Total | seek + rotational + transfer |
//!
//! "Served" counts requests only; the synthetic starting position and
//! boundary stops never incur rotation or transfer cost.
//!
//! # Reference
//! Ruemmler & Wilkes (1994), "An Introduction to Disk Drive Modeling"

use crate::models::{DiskGeometry, HeadPath, TimingBreakdown};

/// Timing model bound to one disk geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingModel {
    geometry: DiskGeometry,
}

impl TimingModel {
    /// Creates a timing model for `geometry`.
    pub fn new(geometry: DiskGeometry) -> Self {
        Self { geometry }
    }

    /// The disk constants in use.
    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    /// Computes timing from raw movement and served-request counts.
    ///
    /// # Arguments
    /// * `total_movement` - Cylinders travelled, jumps included.
    /// * `served` - Number of requests served.
    pub fn calculate(&self, total_movement: u64, served: usize) -> TimingBreakdown {
        if served == 0 {
            return TimingBreakdown::default();
        }

        let g = &self.geometry;
        let served = served as f64;
        let seek_time_ms = total_movement as f64 * g.seek_rate_ms_per_cylinder;
        let rotational_latency_ms = served * g.average_rotational_latency_ms();
        let transfer_time_ms = served * g.sector_transfer_time_ms();

        TimingBreakdown {
            seek_time_ms,
            rotational_latency_ms,
            transfer_time_ms,
            total_time_ms: seek_time_ms + rotational_latency_ms + transfer_time_ms,
        }
    }

    /// Computes timing for a planned head path.
    pub fn for_path(&self, path: &HeadPath) -> TimingBreakdown {
        self.calculate(path.total_movement(), path.served_count())
    }
}

impl Default for TimingModel {
    fn default() -> Self {
        Self::new(DiskGeometry::default())
    }
}
