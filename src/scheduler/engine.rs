//! Disk scheduling engine.
//!
//! # Algorithm
//!
//! 1. Validate head position, disk size, and requests.
//! 2. Plan the head trajectory with the selected policy.
//! 3. Convert the trajectory into timing figures.
//! 4. Assemble movement, timing, sequence, and path into a result.
//!
//! Every call is a pure function of its arguments; the engine holds only
//! the immutable disk geometry.

use log::debug;

use super::{Comparison, TimingModel};
use crate::config::SimulationConfig;
use crate::error::ScheduleError;
use crate::models::{
    Direction, DiskGeometry, HeadPath, ScheduleResult, SchedulingContext, SchedulingRequest,
};
use crate::policies::Algorithm;
use crate::validation::{validate_geometry, validate_request};

/// Stateless scheduling engine bound to one disk geometry.
///
/// # Example
///
/// ```
/// use u_diskseek::models::{Direction, DiskGeometry};
/// use u_diskseek::policies::Algorithm;
/// use u_diskseek::scheduler::DiskScheduler;
///
/// let scheduler = DiskScheduler::new(DiskGeometry::new(200));
/// let result = scheduler
///     .schedule(Algorithm::Look, 50, Direction::Increasing, &[98, 183, 37, 122])
///     .unwrap();
/// assert_eq!(result.sequence.as_slice(), &[50, 98, 122, 183, 37]);
/// assert_eq!(result.total_movement, 133 + 146);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DiskScheduler {
    timing: TimingModel,
}

impl DiskScheduler {
    /// Creates a scheduler for `geometry`.
    pub fn new(geometry: DiskGeometry) -> Self {
        Self {
            timing: TimingModel::new(geometry),
        }
    }

    /// The disk geometry in use.
    pub fn geometry(&self) -> &DiskGeometry {
        self.timing.geometry()
    }

    /// Validates input against this scheduler's geometry.
    pub fn validate(
        &self,
        head_position: i64,
        direction: Direction,
        requests: &[i64],
    ) -> Result<(SchedulingContext, SchedulingRequest), ScheduleError> {
        let geometry = self.geometry();
        validate_geometry(geometry)?;
        Ok(validate_request(
            head_position,
            i64::from(geometry.disk_size),
            direction,
            requests,
        )?)
    }

    /// Validates input and runs one policy.
    pub fn schedule(
        &self,
        algorithm: Algorithm,
        head_position: i64,
        direction: Direction,
        requests: &[i64],
    ) -> Result<ScheduleResult, ScheduleError> {
        let (context, request) = self.validate(head_position, direction, requests)?;
        Ok(self.run(algorithm, &context, &request))
    }

    /// Like [`schedule`](Self::schedule), selecting the policy by name.
    ///
    /// Fails with [`ScheduleError::UnknownAlgorithm`] before validating
    /// anything else.
    pub fn schedule_named(
        &self,
        algorithm: &str,
        head_position: i64,
        direction: Direction,
        requests: &[i64],
    ) -> Result<ScheduleResult, ScheduleError> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.schedule(algorithm, head_position, direction, requests)
    }

    /// Runs the policy selected in `config` with the config's geometry.
    pub fn run_config(config: &SimulationConfig) -> Result<ScheduleResult, ScheduleError> {
        Self::new(config.geometry).schedule(
            config.algorithm,
            config.head_position,
            config.direction,
            &config.requests,
        )
    }

    /// Runs one policy over already-validated input.
    pub fn run(
        &self,
        algorithm: Algorithm,
        context: &SchedulingContext,
        requests: &SchedulingRequest,
    ) -> ScheduleResult {
        let path = algorithm.plan(context, requests);
        let result = self.assemble(algorithm, path);
        debug!(
            "{algorithm}: movement={} cylinders, total={:.2} ms",
            result.total_movement, result.timing.total_time_ms
        );
        result
    }

    /// Validates input once and runs all six policies in canonical order,
    /// ranked by total time.
    pub fn compare(
        &self,
        head_position: i64,
        direction: Direction,
        requests: &[i64],
    ) -> Result<Comparison, ScheduleError> {
        let (context, request) = self.validate(head_position, direction, requests)?;
        Ok(Comparison::run(self, &context, &request))
    }

    /// Like [`compare`](Self::compare), running the policies on worker
    /// threads.
    pub fn compare_parallel(
        &self,
        head_position: i64,
        direction: Direction,
        requests: &[i64],
    ) -> Result<Comparison, ScheduleError> {
        let (context, request) = self.validate(head_position, direction, requests)?;
        Ok(Comparison::run_parallel(self, &context, &request))
    }

    fn assemble(&self, algorithm: Algorithm, path: HeadPath) -> ScheduleResult {
        let total_movement = path.total_movement();
        let timing = self.timing.calculate(total_movement, path.served_count());
        ScheduleResult {
            algorithm,
            total_movement,
            timing,
            sequence: path.service_sequence(),
            path,
        }
    }
}
