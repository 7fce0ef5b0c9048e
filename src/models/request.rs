//! Validated scheduling input: head state and pending requests.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Initial direction of head travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward higher cylinder numbers.
    #[default]
    Increasing,
    /// Toward cylinder 0.
    Decreasing,
}

impl Direction {
    /// Converts the legacy integer flag: `1` is increasing, anything else
    /// is decreasing.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Self::Increasing
        } else {
            Self::Decreasing
        }
    }

    /// Legacy integer flag (`1` increasing, `0` decreasing).
    pub fn flag(self) -> i64 {
        match self {
            Self::Increasing => 1,
            Self::Decreasing => 0,
        }
    }

    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increasing => f.write_str("increasing"),
            Self::Decreasing => f.write_str("decreasing"),
        }
    }
}

/// Head state for one scheduling run.
///
/// Only obtainable through [`crate::validation::validate_request`], so
/// `head_position < disk_size` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchedulingContext {
    head_position: u32,
    direction: Direction,
    disk_size: u32,
}

impl SchedulingContext {
    pub(crate) fn new(head_position: u32, direction: Direction, disk_size: u32) -> Self {
        debug_assert!(head_position < disk_size);
        Self {
            head_position,
            direction,
            disk_size,
        }
    }

    /// Starting cylinder of the head.
    #[inline]
    pub fn head_position(&self) -> u32 {
        self.head_position
    }

    /// Initial direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of cylinders.
    #[inline]
    pub fn disk_size(&self) -> u32 {
        self.disk_size
    }

    /// Boundary cylinder reached by travelling in `direction`.
    #[inline]
    pub fn edge(&self, direction: Direction) -> u32 {
        match direction {
            Direction::Increasing => self.disk_size - 1,
            Direction::Decreasing => 0,
        }
    }
}

/// Pending cylinder requests in arrival order.
///
/// Non-empty, every cylinder below the disk size. Repeats are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SchedulingRequest {
    cylinders: Vec<u32>,
}

impl SchedulingRequest {
    pub(crate) fn new(cylinders: Vec<u32>) -> Self {
        debug_assert!(!cylinders.is_empty());
        Self { cylinders }
    }

    /// Cylinders in arrival order.
    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        &self.cylinders
    }

    /// Number of requests.
    #[inline]
    pub fn len(&self) -> usize {
        self.cylinders.len()
    }

    /// Always `false` for a validated request set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cylinders.is_empty()
    }

    /// Cylinders in ascending order.
    pub fn sorted(&self) -> Vec<u32> {
        let mut sorted = self.cylinders.clone();
        sorted.sort_unstable();
        sorted
    }

    /// Lowest requested cylinder.
    pub fn min(&self) -> Option<u32> {
        self.cylinders.iter().copied().min()
    }

    /// Highest requested cylinder.
    pub fn max(&self) -> Option<u32> {
        self.cylinders.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flag() {
        assert_eq!(Direction::from_flag(1), Direction::Increasing);
        assert_eq!(Direction::from_flag(0), Direction::Decreasing);
        assert_eq!(Direction::from_flag(-3), Direction::Decreasing);
        assert_eq!(Direction::Increasing.flag(), 1);
        assert_eq!(Direction::Decreasing.flag(), 0);
        assert_eq!(Direction::Increasing.reversed(), Direction::Decreasing);
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::Decreasing).unwrap();
        assert_eq!(json, "\"decreasing\"");
        let d: Direction = serde_json::from_str("\"increasing\"").unwrap();
        assert_eq!(d, Direction::Increasing);
    }

    #[test]
    fn test_context_edges() {
        let ctx = SchedulingContext::new(50, Direction::Increasing, 200);
        assert_eq!(ctx.edge(Direction::Increasing), 199);
        assert_eq!(ctx.edge(Direction::Decreasing), 0);
    }

    #[test]
    fn test_request_sorted_keeps_arrival_order() {
        let req = SchedulingRequest::new(vec![98, 14, 183, 14]);
        assert_eq!(req.sorted(), vec![14, 14, 98, 183]);
        assert_eq!(req.as_slice(), &[98, 14, 183, 14]);
        assert_eq!(req.min(), Some(14));
        assert_eq!(req.max(), Some(183));
        assert_eq!(req.len(), 4);
    }
}
