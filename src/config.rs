//! Simulation configuration.
//!
//! Everything a caller used to keep as process-wide state (selected
//! policy, head position, direction, last entered requests, disk size)
//! travels as one explicit value into each engine call.
//!
//! # Example
//!
//! ```
//! use u_diskseek::config::SimulationConfig;
//! use u_diskseek::policies::Algorithm;
//! use u_diskseek::scheduler::DiskScheduler;
//!
//! let config = SimulationConfig::default()
//!     .with_algorithm(Algorithm::CLook)
//!     .with_head_position(53)
//!     .with_requests(vec![98, 183, 37, 122, 14, 124, 65, 67]);
//! let result = DiskScheduler::run_config(&config).unwrap();
//! assert_eq!(result.sequence.served().last(), Some(&37));
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Direction, DiskGeometry};
use crate::policies::Algorithm;

/// Input for one simulation run.
///
/// Head position and requests stay raw (`i64`) until validation so that
/// out-of-range values can be reported instead of silently clamped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Disk size and timing constants.
    #[serde(default)]
    pub geometry: DiskGeometry,
    /// Selected policy.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Initial head cylinder.
    #[serde(default)]
    pub head_position: i64,
    /// Initial direction of travel.
    #[serde(default)]
    pub direction: Direction,
    /// Pending cylinders in arrival order.
    #[serde(default)]
    pub requests: Vec<i64>,
}

impl SimulationConfig {
    /// Creates a config for a disk with `disk_size` cylinders.
    pub fn new(disk_size: u32) -> Self {
        Self {
            geometry: DiskGeometry::new(disk_size),
            ..Default::default()
        }
    }

    /// Sets the disk geometry.
    pub fn with_geometry(mut self, geometry: DiskGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the policy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the initial head position.
    pub fn with_head_position(mut self, head_position: i64) -> Self {
        self.head_position = head_position;
        self
    }

    /// Sets the initial direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the pending requests.
    pub fn with_requests(mut self, requests: Vec<i64>) -> Self {
        self.requests = requests;
        self
    }
}
