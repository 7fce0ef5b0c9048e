//! Service order and head trajectory.
//!
//! A policy produces a [`HeadPath`]: every point the head stops at, in
//! order, including boundary visits and wrap-around jumps. The
//! [`ServiceSequence`] is the projection of that path onto served
//! requests, prefixed with the starting head position.
//!
//! ```text
//! C-SCAN, head 50, increasing, disk 200:
//!
//!   path:     50 → 65 → … → 183 → 199 ⇢ 0 → 14 → 37
//!                                 ^bdry ^jump
//!   sequence: 50, 65, …, 183, 14, 37
//! ```

use serde::{Deserialize, Serialize};

/// Why the head stopped at a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopKind {
    /// Initial head position.
    Start,
    /// A pending request was served here.
    Request,
    /// A disk boundary, visited without serving anything.
    Boundary,
}

/// How the head reached a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Continuous travel across the intervening cylinders.
    Sweep,
    /// A return jump that serves nothing on the way.
    Jump,
}

/// One point on the head trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStop {
    pub cylinder: u32,
    pub kind: StopKind,
    pub motion: Motion,
}

/// Ordered head trajectory starting at the initial head position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadPath {
    stops: Vec<PathStop>,
}

impl HeadPath {
    /// Starts a path at `head`.
    pub fn new(head: u32) -> Self {
        Self {
            stops: vec![PathStop {
                cylinder: head,
                kind: StopKind::Start,
                motion: Motion::Sweep,
            }],
        }
    }

    /// Current head position.
    #[inline]
    pub fn position(&self) -> u32 {
        // `new` always pushes the start stop
        self.stops.last().map_or(0, |s| s.cylinder)
    }

    /// Sweeps to `cylinder` and serves it.
    pub fn serve(&mut self, cylinder: u32) {
        self.push(cylinder, StopKind::Request, Motion::Sweep);
    }

    /// Sweeps to the boundary `cylinder`. No-op if already there.
    pub fn visit_boundary(&mut self, cylinder: u32) {
        if self.position() != cylinder {
            self.push(cylinder, StopKind::Boundary, Motion::Sweep);
        }
    }

    /// Jumps to the boundary `cylinder` without serving on the way.
    pub fn jump_to_boundary(&mut self, cylinder: u32) {
        self.push(cylinder, StopKind::Boundary, Motion::Jump);
    }

    /// Jumps to `cylinder` and serves it on arrival.
    pub fn jump_and_serve(&mut self, cylinder: u32) {
        self.push(cylinder, StopKind::Request, Motion::Jump);
    }

    fn push(&mut self, cylinder: u32, kind: StopKind, motion: Motion) {
        self.stops.push(PathStop {
            cylinder,
            kind,
            motion,
        });
    }

    /// All stops, starting with the initial head position.
    #[inline]
    pub fn stops(&self) -> &[PathStop] {
        &self.stops
    }

    /// Stop cylinders in visiting order.
    pub fn cylinders(&self) -> Vec<u32> {
        self.stops.iter().map(|s| s.cylinder).collect()
    }

    /// Number of served requests.
    pub fn served_count(&self) -> usize {
        self.stops
            .iter()
            .filter(|s| s.kind == StopKind::Request)
            .count()
    }

    /// Sum of absolute distances between consecutive stops, jumps included.
    pub fn total_movement(&self) -> u64 {
        self.stops
            .windows(2)
            .map(|w| u64::from(w[0].cylinder.abs_diff(w[1].cylinder)))
            .sum()
    }

    /// Projects the path onto the starting position plus served requests.
    pub fn service_sequence(&self) -> ServiceSequence {
        ServiceSequence {
            cylinders: self
                .stops
                .iter()
                .filter(|s| matches!(s.kind, StopKind::Start | StopKind::Request))
                .map(|s| s.cylinder)
                .collect(),
        }
    }
}

/// Starting head position followed by every request in service order.
///
/// Length is always `requests + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceSequence {
    cylinders: Vec<u32>,
}

impl ServiceSequence {
    /// Starting head position (element 0).
    #[inline]
    pub fn head(&self) -> u32 {
        self.cylinders.first().copied().unwrap_or_default()
    }

    /// Served requests in order (elements 1..).
    #[inline]
    pub fn served(&self) -> &[u32] {
        self.cylinders.get(1..).unwrap_or(&[])
    }

    /// All elements, head first.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.cylinders
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    /// Movement implied by the sequence alone, ignoring boundary visits.
    pub fn direct_movement(&self) -> u64 {
        self.cylinders
            .windows(2)
            .map(|w| u64::from(w[0].abs_diff(w[1])))
            .sum()
    }
}

impl From<ServiceSequence> for Vec<u32> {
    fn from(seq: ServiceSequence) -> Self {
        seq.cylinders
    }
}
