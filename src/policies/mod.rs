//! Head scheduling policies.
//!
//! Provides the six classic disk scheduling policies (FCFS, SSTF, SCAN,
//! LOOK, C-SCAN, C-LOOK) and a closed [`Algorithm`] enum for selecting
//! one by name.
//!
//! # Usage
//!
//! ```
//! use u_diskseek::models::Direction;
//! use u_diskseek::policies::{rules, Algorithm, SeekPolicy};
//! use u_diskseek::validation::validate_request;
//!
//! let (ctx, req) = validate_request(50, 200, Direction::Increasing, &[98, 37, 122]).unwrap();
//! let path = rules::Look.plan(&ctx, &req);
//! assert_eq!(path.service_sequence().as_slice(), &[50, 98, 122, 37]);
//!
//! let algo: Algorithm = "LOOK".parse().unwrap();
//! assert_eq!(algo.plan(&ctx, &req), path);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 5.4.3

mod algorithm;
pub mod rules;
mod sweep;

pub use algorithm::Algorithm;

use crate::models::{HeadPath, SchedulingContext, SchedulingRequest, ServiceSequence};
use std::fmt::Debug;

/// A policy that orders pending requests for service.
///
/// Implementations are pure: the same context and requests always yield
/// the same path, and every request is served exactly once.
pub trait SeekPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "SSTF", "C-LOOK").
    fn name(&self) -> &'static str;

    /// Plans the full head trajectory for `requests`.
    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath;

    /// Service order: head position followed by each request once.
    fn sequence(
        &self,
        context: &SchedulingContext,
        requests: &SchedulingRequest,
    ) -> ServiceSequence {
        self.plan(context, requests).service_sequence()
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
