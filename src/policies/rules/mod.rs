//! Built-in head scheduling policies.
//!
//! # Categories
//!
//! - **Arrival order**: FCFS
//! - **Greedy**: SSTF
//! - **Elevator (reversing)**: SCAN, LOOK
//! - **Circular (one-way)**: C-SCAN, C-LOOK
//!
//! Every policy serves each pending request exactly once; they differ only
//! in the order and in the extra travel (boundary visits, return jumps)
//! they add on the way.
//!
//! # References
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 11.2
//! - Denning (1967), "Effects of Scheduling on File Memory Operations"

use super::sweep::{Sweep, TurnPoint, Turnaround};
use super::SeekPolicy;
use crate::models::{HeadPath, SchedulingContext, SchedulingRequest};

// ======================== Arrival order ========================

/// First-Come, First-Served.
///
/// Serves requests in arrival order. Fair and starvation-free, but
/// ignores head position entirely.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl SeekPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        let mut path = HeadPath::new(context.head_position());
        for &c in requests.as_slice() {
            path.serve(c);
        }
        path
    }

    fn description(&self) -> &'static str {
        "First-Come, First-Served"
    }
}

// ======================== Greedy ========================

/// Shortest Seek Time First.
///
/// Repeatedly serves the pending request closest to the current head
/// position. Ties go to the lower cylinder number, so results are
/// reproducible. Can starve requests far from a busy region.
///
/// # Complexity
/// O(n²) for n requests.
#[derive(Debug, Clone, Copy)]
pub struct Sstf;

impl SeekPolicy for Sstf {
    fn name(&self) -> &'static str {
        "SSTF"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        let mut path = HeadPath::new(context.head_position());
        let mut pending = requests.as_slice().to_vec();

        while !pending.is_empty() {
            let position = path.position();
            let nearest = pending
                .iter()
                .enumerate()
                .min_by_key(|&(_, &c)| (c.abs_diff(position), c))
                .map(|(i, _)| i);
            match nearest {
                Some(i) => path.serve(pending.swap_remove(i)),
                None => break,
            }
        }

        path
    }

    fn description(&self) -> &'static str {
        "Shortest Seek Time First"
    }
}

// ======================== Elevator ========================

/// SCAN (elevator).
///
/// Sweeps toward the disk edge in the initial direction, serving requests
/// on the way, travels on to the boundary, then reverses and serves the
/// rest.
#[derive(Debug, Clone, Copy)]
pub struct Scan;

impl SeekPolicy for Scan {
    fn name(&self) -> &'static str {
        "SCAN"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        Sweep {
            turn: TurnPoint::Boundary,
            turnaround: Turnaround::Reverse,
        }
        .run(context, requests)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the disk boundary"
    }
}

/// LOOK.
///
/// Like SCAN, but reverses at the last pending request instead of the
/// disk boundary.
#[derive(Debug, Clone, Copy)]
pub struct Look;

impl SeekPolicy for Look {
    fn name(&self) -> &'static str {
        "LOOK"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        Sweep {
            turn: TurnPoint::LastRequest,
            turnaround: Turnaround::Reverse,
        }
        .run(context, requests)
    }

    fn description(&self) -> &'static str {
        "Elevator sweep to the last pending request"
    }
}

// ======================== Circular ========================

/// Circular SCAN.
///
/// Sweeps one way to the boundary, jumps to the opposite boundary, and
/// keeps sweeping in the same direction. The jump counts as movement.
/// Gives more uniform wait times than SCAN.
#[derive(Debug, Clone, Copy)]
pub struct CScan;

impl SeekPolicy for CScan {
    fn name(&self) -> &'static str {
        "C-SCAN"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        Sweep {
            turn: TurnPoint::Boundary,
            turnaround: Turnaround::Wrap,
        }
        .run(context, requests)
    }

    fn description(&self) -> &'static str {
        "Circular sweep with boundary wrap"
    }
}

/// Circular LOOK.
///
/// Like C-SCAN, but turns at the last pending request and jumps straight
/// to the farthest pending request on the other side.
#[derive(Debug, Clone, Copy)]
pub struct CLook;

impl SeekPolicy for CLook {
    fn name(&self) -> &'static str {
        "C-LOOK"
    }

    fn plan(&self, context: &SchedulingContext, requests: &SchedulingRequest) -> HeadPath {
        Sweep {
            turn: TurnPoint::LastRequest,
            turnaround: Turnaround::Wrap,
        }
        .run(context, requests)
    }

    fn description(&self) -> &'static str {
        "Circular sweep with request-to-request wrap"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Direction, Motion, StopKind};
    use crate::validation::validate_request;
    use proptest::prelude::*;

    const SAMPLE: [i64; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    fn sample(direction: Direction) -> (SchedulingContext, SchedulingRequest) {
        validate_request(50, 200, direction, &SAMPLE).unwrap()
    }

    fn all_policies() -> Vec<Box<dyn SeekPolicy>> {
        vec![
            Box::new(Fcfs),
            Box::new(Sstf),
            Box::new(Scan),
            Box::new(Look),
            Box::new(CScan),
            Box::new(CLook),
        ]
    }

    #[test]
    fn test_fcfs() {
        let (ctx, req) = sample(Direction::Increasing);
        let seq = Fcfs.sequence(&ctx, &req);
        assert_eq!(seq.as_slice(), &[50, 98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(Fcfs.plan(&ctx, &req).total_movement(), 643);
    }

    #[test]
    fn test_fcfs_ignores_direction() {
        let (inc, req) = sample(Direction::Increasing);
        let (dec, _) = sample(Direction::Decreasing);
        assert_eq!(Fcfs.plan(&inc, &req), Fcfs.plan(&dec, &req));
    }

    #[test]
    fn test_sstf() {
        let (ctx, req) = sample(Direction::Increasing);
        let path = Sstf.plan(&ctx, &req);
        assert_eq!(
            path.service_sequence().as_slice(),
            &[50, 37, 14, 65, 67, 98, 122, 124, 183]
        );
        assert_eq!(path.total_movement(), 13 + 23 + 51 + 2 + 31 + 24 + 2 + 59);
    }

    #[test]
    fn test_sstf_tie_prefers_lower_cylinder() {
        let (ctx, req) = validate_request(50, 200, Direction::Increasing, &[60, 40]).unwrap();
        let seq = Sstf.sequence(&ctx, &req);
        assert_eq!(seq.as_slice(), &[50, 40, 60]);

        let (ctx, req) = validate_request(50, 200, Direction::Decreasing, &[40, 60]).unwrap();
        assert_eq!(Sstf.sequence(&ctx, &req).as_slice(), &[50, 40, 60]);
    }

    #[test]
    fn test_scan_increasing() {
        let (ctx, req) = sample(Direction::Increasing);
        let path = Scan.plan(&ctx, &req);
        assert_eq!(
            path.cylinders(),
            vec![50, 65, 67, 98, 122, 124, 183, 199, 37, 14]
        );
        assert_eq!(path.stops()[7].kind, StopKind::Boundary);
        // 50→199, 199→14
        assert_eq!(path.total_movement(), 149 + 185);
        assert_eq!(
            path.service_sequence().as_slice(),
            &[50, 65, 67, 98, 122, 124, 183, 37, 14]
        );
    }

    #[test]
    fn test_scan_decreasing() {
        let (ctx, req) = sample(Direction::Decreasing);
        let path = Scan.plan(&ctx, &req);
        assert_eq!(
            path.cylinders(),
            vec![50, 37, 14, 0, 65, 67, 98, 122, 124, 183]
        );
        assert_eq!(path.total_movement(), 50 + 183);
    }

    #[test]
    fn test_look_increasing() {
        let (ctx, req) = sample(Direction::Increasing);
        let path = Look.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![50, 65, 67, 98, 122, 124, 183, 37, 14]);
        assert!(path.stops().iter().all(|s| s.kind != StopKind::Boundary));
        assert_eq!(path.total_movement(), 133 + 169);
    }

    #[test]
    fn test_look_decreasing() {
        let (ctx, req) = sample(Direction::Decreasing);
        let path = Look.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![50, 37, 14, 65, 67, 98, 122, 124, 183]);
        assert_eq!(path.total_movement(), 36 + 169);
    }

    #[test]
    fn test_cscan_increasing() {
        let (ctx, req) = sample(Direction::Increasing);
        let path = CScan.plan(&ctx, &req);
        assert_eq!(
            path.cylinders(),
            vec![50, 65, 67, 98, 122, 124, 183, 199, 0, 14, 37]
        );
        assert_eq!(path.total_movement(), 149 + 199 + 37);
        assert_eq!(
            path.service_sequence().as_slice(),
            &[50, 65, 67, 98, 122, 124, 183, 14, 37]
        );
    }

    #[test]
    fn test_cscan_decreasing() {
        let (ctx, req) = sample(Direction::Decreasing);
        let path = CScan.plan(&ctx, &req);
        assert_eq!(
            path.cylinders(),
            vec![50, 37, 14, 0, 199, 183, 124, 122, 98, 67, 65]
        );
        assert_eq!(path.total_movement(), 50 + 199 + 134);
    }

    #[test]
    fn test_clook_increasing() {
        let (ctx, req) = sample(Direction::Increasing);
        let path = CLook.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![50, 65, 67, 98, 122, 124, 183, 14, 37]);
        assert_eq!(path.total_movement(), 133 + 169 + 23);
    }

    #[test]
    fn test_cscan_all_requests_behind() {
        let (ctx, req) = validate_request(150, 200, Direction::Increasing, &[40, 10]).unwrap();
        let path = CScan.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![150, 199, 0, 10, 40]);
        assert_eq!(path.stops()[1].kind, StopKind::Boundary);
        assert_eq!(path.stops()[2].motion, Motion::Jump);
        // 150→199, 199⇢0, 0→40
        assert_eq!(path.total_movement(), 49 + 199 + 40);
    }

    #[test]
    fn test_clook_all_requests_behind() {
        let (ctx, req) = validate_request(150, 200, Direction::Increasing, &[40, 10]).unwrap();
        let path = CLook.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![150, 10, 40]);
        assert_eq!(path.stops()[1].motion, Motion::Jump);
        assert_eq!(path.stops()[1].kind, StopKind::Request);
        assert!(path.stops().iter().all(|s| s.kind != StopKind::Boundary));
        assert_eq!(path.total_movement(), 140 + 30);
    }

    #[test]
    fn test_scan_decreasing_all_requests_behind() {
        let (ctx, req) = validate_request(50, 200, Direction::Decreasing, &[120, 80]).unwrap();
        let path = Scan.plan(&ctx, &req);
        assert_eq!(path.cylinders(), vec![50, 0, 80, 120]);
        assert_eq!(path.stops()[1].kind, StopKind::Boundary);
        assert_eq!(path.total_movement(), 50 + 120);
    }

    #[test]
    fn test_scan_family_all_requests_ahead() {
        let (ctx, req) = validate_request(150, 200, Direction::Decreasing, &[40, 10]).unwrap();
        let scan = Scan.plan(&ctx, &req);
        assert_eq!(scan.cylinders(), vec![150, 40, 10, 0]);
        assert_eq!(scan.total_movement(), 150);

        let cscan = CScan.plan(&ctx, &req);
        assert_eq!(cscan.cylinders(), vec![150, 40, 10, 0, 199]);
        assert_eq!(cscan.total_movement(), 150 + 199);

        assert_eq!(Look.plan(&ctx, &req).total_movement(), 140);
        assert_eq!(CLook.plan(&ctx, &req).total_movement(), 140);
    }

    #[test]
    fn test_single_request_at_head() {
        for policy in all_policies() {
            let (ctx, req) = validate_request(0, 1, Direction::Increasing, &[0]).unwrap();
            let path = policy.plan(&ctx, &req);
            assert_eq!(path.total_movement(), 0, "{}", policy.name());
            assert_eq!(path.service_sequence().as_slice(), &[0, 0]);
        }
    }

    #[test]
    fn test_duplicates_kept() {
        for policy in all_policies() {
            let (ctx, req) =
                validate_request(100, 200, Direction::Increasing, &[150, 20, 150, 20]).unwrap();
            let seq = policy.sequence(&ctx, &req);
            let mut served = seq.served().to_vec();
            served.sort_unstable();
            assert_eq!(served, vec![20, 20, 150, 150], "{}", policy.name());
        }
    }

    fn arb_input() -> impl Strategy<Value = (i64, i64, bool, Vec<i64>)> {
        (1i64..400).prop_flat_map(|size| {
            (
                Just(size),
                0..size,
                any::<bool>(),
                prop::collection::vec(0..size, 1..30),
            )
        })
    }

    proptest! {
        #[test]
        fn sequence_is_permutation_of_requests(
            (size, head, inc, requests) in arb_input(),
        ) {
            let direction = if inc { Direction::Increasing } else { Direction::Decreasing };
            let (ctx, req) = validate_request(head, size, direction, &requests).unwrap();
            let expected = req.sorted();

            for policy in all_policies() {
                let seq = policy.sequence(&ctx, &req);
                prop_assert_eq!(seq.len(), requests.len() + 1);
                prop_assert_eq!(seq.head(), head as u32);
                let mut served = seq.served().to_vec();
                served.sort_unstable();
                prop_assert_eq!(&served, &expected);
            }
        }

        #[test]
        fn movement_at_least_request_span(
            (size, head, inc, requests) in arb_input(),
        ) {
            let direction = if inc { Direction::Increasing } else { Direction::Decreasing };
            let (ctx, req) = validate_request(head, size, direction, &requests).unwrap();
            let span = u64::from(req.max().unwrap() - req.min().unwrap());

            for policy in all_policies() {
                let path = policy.plan(&ctx, &req);
                prop_assert!(path.total_movement() >= span);
                prop_assert!(path.cylinders().iter().all(|&c| c < size as u32));
            }
        }

        #[test]
        fn sstf_always_picks_nearest(
            (size, head, _inc, requests) in arb_input(),
        ) {
            let (ctx, req) = validate_request(head, size, Direction::Increasing, &requests).unwrap();
            let seq = Sstf.sequence(&ctx, &req);

            let mut pending = req.as_slice().to_vec();
            let mut position = seq.head();
            for &next in seq.served() {
                let best = pending
                    .iter()
                    .map(|&c| (c.abs_diff(position), c))
                    .min()
                    .unwrap();
                prop_assert_eq!((next.abs_diff(position), next), best);
                let idx = pending.iter().position(|&c| c == next).unwrap();
                pending.swap_remove(idx);
                position = next;
            }
        }

        #[test]
        fn look_never_exceeds_scan(
            (size, head, inc, requests) in arb_input(),
        ) {
            let direction = if inc { Direction::Increasing } else { Direction::Decreasing };
            let (ctx, req) = validate_request(head, size, direction, &requests).unwrap();
            prop_assert!(Look.plan(&ctx, &req).total_movement() <= Scan.plan(&ctx, &req).total_movement());
            prop_assert!(CLook.plan(&ctx, &req).total_movement() <= CScan.plan(&ctx, &req).total_movement());
        }
    }
}
