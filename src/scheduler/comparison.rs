//! Side-by-side comparison of all policies.
//!
//! Runs the six policies over one validated input and ranks them.
//!
//! # Ranking
//!
//! 1. Total access time, ascending
//! 2. Total head movement, ascending
//! 3. Canonical policy order (FCFS, SSTF, SCAN, LOOK, C-SCAN, C-LOOK)

use std::cmp::Ordering;
use std::fmt;
use std::thread;

use log::debug;
use serde::{Deserialize, Serialize};

use super::DiskScheduler;
use crate::models::{ScheduleResult, SchedulingContext, SchedulingRequest};
use crate::policies::Algorithm;

/// Results of all policies, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    ranked: Vec<ScheduleResult>,
}

impl Comparison {
    /// Ranks arbitrary results.
    pub fn rank(mut results: Vec<ScheduleResult>) -> Self {
        results.sort_by(compare_results);
        Self { ranked: results }
    }

    /// Runs every policy sequentially.
    pub fn run(
        scheduler: &DiskScheduler,
        context: &SchedulingContext,
        requests: &SchedulingRequest,
    ) -> Self {
        let results = Algorithm::ALL
            .into_iter()
            .map(|algorithm| scheduler.run(algorithm, context, requests))
            .collect();
        Self::rank(results)
    }

    /// Runs every policy on its own scoped thread.
    ///
    /// Results arrive in completion order and are re-ranked, so the
    /// outcome is identical to [`run`](Self::run).
    pub fn run_parallel(
        scheduler: &DiskScheduler,
        context: &SchedulingContext,
        requests: &SchedulingRequest,
    ) -> Self {
        let (result_tx, result_rx) = crossbeam_channel::bounded(Algorithm::ALL.len());

        thread::scope(|scope| {
            for algorithm in Algorithm::ALL {
                let result_tx = result_tx.clone();
                scope.spawn(move || {
                    // Capacity covers every policy, so this never blocks,
                    // and the receiver outlives the scope.
                    let _ = result_tx.send(scheduler.run(algorithm, context, requests));
                });
            }
        });
        drop(result_tx);

        let results: Vec<ScheduleResult> = result_rx.iter().collect();
        debug!("parallel comparison collected {} results", results.len());
        Self::rank(results)
    }

    /// Results, best first.
    #[inline]
    pub fn results(&self) -> &[ScheduleResult] {
        &self.ranked
    }

    /// The best-ranked result.
    pub fn best(&self) -> Option<&ScheduleResult> {
        self.ranked.first()
    }

    /// Result of a specific policy.
    pub fn get(&self, algorithm: Algorithm) -> Option<&ScheduleResult> {
        self.ranked.iter().find(|r| r.algorithm == algorithm)
    }

    /// Policies in ranked order.
    pub fn ranking(&self) -> Vec<Algorithm> {
        self.ranked.iter().map(|r| r.algorithm).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleResult> {
        self.ranked.iter()
    }
}

impl<'a> IntoIterator for &'a Comparison {
    type Item = &'a ScheduleResult;
    type IntoIter = std::slice::Iter<'a, ScheduleResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn compare_results(a: &ScheduleResult, b: &ScheduleResult) -> Ordering {
    a.timing
        .total_time_ms
        .total_cmp(&b.timing.total_time_ms)
        .then(a.total_movement.cmp(&b.total_movement))
        .then(a.algorithm.cmp(&b.algorithm))
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "═".repeat(50);
        writeln!(f, "ALGORITHM COMPARISON RESULTS")?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<10}{:<8}{:<8}{:<8}{:<10}Movement",
            "Algorithm", "Seek", "Rot", "Xfer", "Total"
        )?;
        writeln!(f, "{}", "─".repeat(50))?;
        for r in &self.ranked {
            writeln!(
                f,
                "{:<10}{:<8.2}{:<8.2}{:<8.2}{:<10.2}{}",
                r.algorithm.name(),
                r.timing.seek_time_ms,
                r.timing.rotational_latency_ms,
                r.timing.transfer_time_ms,
                r.timing.total_time_ms,
                r.total_movement
            )?;
        }
        write!(f, "{rule}")?;
        if let Some(best) = self.best() {
            write!(
                f,
                "\nBEST: {} ({:.2} ms, {} cylinders)",
                best.algorithm, best.timing.total_time_ms, best.total_movement
            )?;
        }
        Ok(())
    }
}
