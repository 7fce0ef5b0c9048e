//! Disk head scheduling engine.
//!
//! Simulates how a disk controller orders pending cylinder requests under
//! competing head-scheduling policies and estimates the resulting access
//! latency. Every call is a deterministic, stateless computation.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `DiskGeometry`, `SchedulingContext`,
//!   `SchedulingRequest`, `HeadPath`, `ServiceSequence`, `ScheduleResult`
//! - **`validation`**: Input integrity checks (bounds, geometry, empty sets)
//! - **`policies`**: FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK and the closed
//!   `Algorithm` selector
//! - **`scheduler`**: Engine facade, timing model, and policy comparison
//! - **`wire`**: Six-field line encoding for text-based callers
//! - **`workload`**: Random request generation
//! - **`config`**: Explicit per-run configuration
//! - **`error`**: Error taxonomy
//!
//! # Example
//!
//! ```
//! use u_diskseek::models::Direction;
//! use u_diskseek::scheduler::DiskScheduler;
//!
//! let scheduler = DiskScheduler::default();
//! let ranking = scheduler
//!     .compare(50, Direction::Increasing, &[98, 183, 37, 122, 14, 124, 65, 67])
//!     .unwrap();
//! assert_eq!(ranking.best().unwrap().algorithm.name(), "SSTF");
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Ruemmler & Wilkes (1994), "An Introduction to Disk Drive Modeling"

pub mod config;
pub mod error;
pub mod models;
pub mod policies;
pub mod scheduler;
pub mod validation;
pub mod wire;
pub mod workload;

pub use error::ScheduleError;
