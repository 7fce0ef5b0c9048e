//! Schedule result (solution) model.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HeadPath, ServiceSequence};
use crate::policies::Algorithm;

/// Access-time breakdown for one service order.
///
/// All values in milliseconds and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TimingBreakdown {
    /// Head movement cost.
    pub seek_time_ms: f64,
    /// Waiting for the sector to rotate under the head.
    pub rotational_latency_ms: f64,
    /// Reading or writing the sector.
    pub transfer_time_ms: f64,
    /// Sum of the three components.
    pub total_time_ms: f64,
}

/// Outcome of running one policy over one validated input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Policy that produced this result.
    pub algorithm: Algorithm,
    /// Cylinders travelled, boundary visits and jumps included.
    pub total_movement: u64,
    /// Timing figures.
    pub timing: TimingBreakdown,
    /// Head position followed by served requests.
    pub sequence: ServiceSequence,
    /// Full head trajectory.
    pub path: HeadPath,
}

impl ScheduleResult {
    /// Head travel time in milliseconds.
    #[inline]
    pub fn seek_time_ms(&self) -> f64 {
        self.timing.seek_time_ms
    }

    /// Rotational wait across all served requests, in milliseconds.
    #[inline]
    pub fn rotational_latency_ms(&self) -> f64 {
        self.timing.rotational_latency_ms
    }

    /// Sector transfer time across all served requests, in milliseconds.
    #[inline]
    pub fn transfer_time_ms(&self) -> f64 {
        self.timing.transfer_time_ms
    }

    /// Sum of seek, rotational, and transfer time, in milliseconds.
    #[inline]
    pub fn total_time_ms(&self) -> f64 {
        self.timing.total_time_ms
    }
}

impl fmt::Display for ScheduleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(50);
        writeln!(f, "DISK ACCESS PERFORMANCE METRICS ({})", self.algorithm)?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<30}: {:.2} ms",
            "Seek Time (head movement)", self.timing.seek_time_ms
        )?;
        writeln!(
            f,
            "{:<30}: {:.2} ms",
            "Rotational Latency", self.timing.rotational_latency_ms
        )?;
        writeln!(
            f,
            "{:<30}: {:.2} ms",
            "Data Transfer Time", self.timing.transfer_time_ms
        )?;
        writeln!(f, "{} TOTAL {}", "─".repeat(30), "─".repeat(13))?;
        writeln!(
            f,
            "{:<30}: {:.2} ms",
            "TOTAL ACCESS TIME", self.timing.total_time_ms
        )?;
        writeln!(
            f,
            "{:<30}: {} cylinders",
            "Total Head Movement", self.total_movement
        )?;
        writeln!(f, "{rule}")?;
        writeln!(f, "SERVICE ORDER:")?;
        let order: Vec<String> = self
            .sequence
            .as_slice()
            .iter()
            .map(|c| c.to_string())
            .collect();
        write!(f, "{}", order.join(" → "))
    }
}
