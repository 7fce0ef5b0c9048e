//! Scheduling engine, timing model, and policy comparison.
//!
//! # Engine
//!
//! `DiskScheduler` validates input, runs one policy, and assembles the
//! result. It is a thin pure facade over [`crate::policies`].
//!
//! # Timing
//!
//! `TimingModel` computes seek, rotational latency, transfer, and total
//! access time from a head path and fixed disk constants.
//!
//! # Comparison
//!
//! `Comparison` runs all six policies over one input, sequentially or on
//! worker threads, and ranks them by total time.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11
//! - Ruemmler & Wilkes (1994), "An Introduction to Disk Drive Modeling"

mod comparison;
mod engine;
mod timing;

pub use comparison::Comparison;
pub use engine::DiskScheduler;
pub use timing::TimingModel;
