//! Shared sweep discipline for the SCAN family.
//!
//! SCAN, LOOK, C-SCAN and C-LOOK differ only in two choices:
//!
//! | Policy | Turn point | After the turn |
//! |--------|-----------|----------------|
//! | SCAN   | boundary  | reverse |
//! | LOOK   | last request | reverse |
//! | C-SCAN | boundary  | jump to opposite boundary, keep direction |
//! | C-LOOK | last request | jump to farthest request, keep direction |
//!
//! The head is driven by a small state machine:
//!
//! ```text
//! SweepingForward ──(turn)──┬─ reverse ──> SweepingBackward ──> Done
//!        │                  └─ wrap ─────> Wrapping ──> SweepingForward ──> Done
//!        └──(LOOK family, nothing behind)──> Done
//! ```
//!
//! Requests at the head position count as ahead of it. SCAN and C-SCAN
//! always travel to the boundary, and C-SCAN always jumps back to the
//! opposite boundary, even when nothing is left to serve behind the head.
//! LOOK and C-LOOK finish as soon as the last request is served.

use log::trace;

use crate::models::{Direction, HeadPath, SchedulingContext, SchedulingRequest};

/// Where the forward sweep turns around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TurnPoint {
    /// Travel on to the disk boundary.
    Boundary,
    /// Turn at the farthest pending request.
    LastRequest,
}

/// What the head does after the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Turnaround {
    /// Sweep back, serving in the opposite direction.
    Reverse,
    /// Jump back and sweep again in the original direction.
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SweepState {
    SweepingForward,
    SweepingBackward,
    Wrapping,
    Done,
}

/// A configured sweep discipline.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Sweep {
    pub turn: TurnPoint,
    pub turnaround: Turnaround,
}

impl Sweep {
    /// Runs the sweep over `requests` starting from the context's head.
    pub(crate) fn run(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        let head = context.head_position();
        let forward = context.direction();
        let sorted = requests.sorted();

        // Split into the requests ahead of the head (in travel order) and
        // those behind it (ascending for now).
        let (mut ahead, mut behind): (Vec<u32>, Vec<u32>) = match forward {
            Direction::Increasing => sorted.into_iter().partition(|&c| c >= head),
            Direction::Decreasing => sorted.into_iter().partition(|&c| c <= head),
        };
        if forward == Direction::Decreasing {
            ahead.reverse();
        }
        // Order `behind` the way it will be served after the turn.
        let serve_behind_ascending = match self.turnaround {
            Turnaround::Reverse => forward == Direction::Decreasing,
            Turnaround::Wrap => forward == Direction::Increasing,
        };
        if !serve_behind_ascending {
            behind.reverse();
        }

        let mut path = HeadPath::new(head);
        let mut state = SweepState::SweepingForward;
        let mut wrapped = false;

        while state != SweepState::Done {
            trace!("sweep state {state:?} at cylinder {}", path.position());
            state = match state {
                SweepState::SweepingForward if wrapped => {
                    for &c in &behind {
                        path.serve(c);
                    }
                    SweepState::Done
                }
                SweepState::SweepingForward => {
                    for &c in &ahead {
                        path.serve(c);
                    }
                    match (self.turn, self.turnaround) {
                        (TurnPoint::Boundary, Turnaround::Wrap) => {
                            path.visit_boundary(context.edge(forward));
                            SweepState::Wrapping
                        }
                        (TurnPoint::Boundary, Turnaround::Reverse) => {
                            path.visit_boundary(context.edge(forward));
                            if behind.is_empty() {
                                SweepState::Done
                            } else {
                                SweepState::SweepingBackward
                            }
                        }
                        (TurnPoint::LastRequest, _) if behind.is_empty() => SweepState::Done,
                        (TurnPoint::LastRequest, Turnaround::Reverse) => {
                            SweepState::SweepingBackward
                        }
                        (TurnPoint::LastRequest, Turnaround::Wrap) => SweepState::Wrapping,
                    }
                }
                SweepState::SweepingBackward => {
                    for &c in &behind {
                        path.serve(c);
                    }
                    SweepState::Done
                }
                SweepState::Wrapping => {
                    wrapped = true;
                    match self.turn {
                        TurnPoint::Boundary => {
                            path.jump_to_boundary(context.edge(forward.reversed()));
                        }
                        TurnPoint::LastRequest => {
                            // Land directly on the farthest request behind
                            // the head; it is served on arrival.
                            let first = behind.remove(0);
                            path.jump_and_serve(first);
                        }
                    }
                    SweepState::SweepingForward
                }
                SweepState::Done => SweepState::Done,
            };
        }

        path
    }
}
