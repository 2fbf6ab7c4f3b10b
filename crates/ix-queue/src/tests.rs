//! Unit tests for ix-queue.

use ix_core::{Event, EventError, EventKind, LanePair, SimRng, SimTime};

use crate::{EventQueue, ScheduleRequest, initialize};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(m: f64) -> SimTime {
    SimTime::new(m).unwrap()
}

fn lane(from: u32, to: u32) -> LanePair {
    LanePair::new(from, to)
}

/// Pop everything, in order.
fn drain(queue: &mut EventQueue) -> Vec<Event> {
    let mut out = Vec::new();
    while !queue.is_empty() {
        out.push(queue.pop_next().unwrap());
    }
    out
}

/// Adjacent events never step backwards under the canonical order.
fn assert_sorted(queue: &EventQueue) {
    let events: Vec<&Event> = queue.iter().collect();
    for pair in events.windows(2) {
        assert!(
            !pair[1].precedes(pair[0]),
            "out of order: {} before {}",
            pair[0],
            pair[1]
        );
    }
}

// ── EventQueue basics ─────────────────────────────────────────────────────────

#[cfg(test)]
mod queue_basics {
    use super::*;

    #[test]
    fn pop_empty_fails() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.pop_next(), Err(EventError::EmptyQueue));
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(9.0), lane(0, 1)));
        q.insert(Event::arrival(t(1.0), lane(0, 1)));
        q.insert(Event::arrival(t(4.5), lane(0, 1)));
        let times: Vec<f64> = drain(&mut q).iter().map(|e| e.time().minutes()).collect();
        assert_eq!(times, vec![1.0, 4.5, 9.0]);
    }

    #[test]
    fn equal_time_ordered_by_kind_not_insertion() {
        // Inserted in reverse priority order: a time-only comparator would
        // leave them in this order.
        let mut q = EventQueue::new();
        q.insert(Event::termination(t(5.0)));
        q.insert(Event::end_of_phase(t(5.0)));
        q.insert(Event::departure(t(5.0), lane(1, 1)));
        q.insert(Event::arrival(t(5.0), lane(1, 1)));
        let kinds: Vec<EventKind> = drain(&mut q).iter().map(Event::kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::Arrival, EventKind::Departure, EventKind::EndOfPhase, EventKind::Termination]
        );
    }

    #[test]
    fn identical_keys_are_stable() {
        let mut q = EventQueue::new();
        for from in 0..10 {
            q.insert(Event::departure(t(3.0), lane(from, 0)));
        }
        let froms: Vec<u32> = drain(&mut q).iter().map(|e| e.lane().unwrap().from).collect();
        assert_eq!(froms, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn stable_across_interleaved_pops() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(2.0), lane(0, 0)));
        q.insert(Event::arrival(t(2.0), lane(1, 0)));
        assert_eq!(q.pop_next().unwrap().lane(), Some(lane(0, 0)));
        q.insert(Event::arrival(t(2.0), lane(2, 0)));
        assert_eq!(q.pop_next().unwrap().lane(), Some(lane(1, 0)));
        assert_eq!(q.pop_next().unwrap().lane(), Some(lane(2, 0)));
    }

    #[test]
    fn peek_first_n_does_not_mutate() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(2.0), lane(0, 1)));
        q.insert(Event::arrival(t(1.0), lane(0, 1)));
        q.insert(Event::termination(t(10.0)));

        let first_two = q.peek_first_n(2);
        assert_eq!(first_two.len(), 2);
        assert_eq!(first_two[0].time(), t(1.0));
        assert_eq!(first_two[1].time(), t(2.0));
        assert_eq!(q.len(), 3);
        assert_eq!(q.peek_first_n(50).len(), 3);
        assert_eq!(q.peek().map(Event::time), Some(t(1.0)));
    }

    #[test]
    fn clear_empties() {
        let mut q = EventQueue::new();
        q.insert(Event::end_of_phase(t(1.0)));
        q.insert(Event::termination(t(2.0)));
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.pop_next().is_err());
    }

    #[test]
    fn display_one_line_per_event() {
        let mut q = EventQueue::new();
        q.insert(Event::termination(t(20.0)));
        q.insert(Event::arrival(t(5.0), lane(0, 1)));
        assert_eq!(q.to_string(), "Arrival\t5.0\t[0, 1]\nTermination\t20.0\n");
    }
}

// ── Bulk removal ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod removal {
    use super::*;

    fn mixed_queue() -> EventQueue {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(1.0), lane(0, 1)));
        q.insert(Event::end_of_phase(t(2.0)));
        q.insert(Event::departure(t(3.0), lane(0, 1)));
        q.insert(Event::end_of_phase(t(4.0)));
        q.insert(Event::departure(t(5.0), lane(2, 3)));
        q.insert(Event::departure(t(6.0), lane(0, 1)));
        q.insert(Event::termination(t(10.0)));
        q
    }

    #[test]
    fn remove_all_of_kind_leaves_none_and_keeps_order() {
        let mut q = mixed_queue();
        let others_before: Vec<Event> =
            q.iter().filter(|e| e.kind() != EventKind::EndOfPhase).copied().collect();

        assert_eq!(q.remove_all_of_kind(EventKind::EndOfPhase), 2);
        assert!(q.iter().all(|e| e.kind() != EventKind::EndOfPhase));
        assert_eq!(q.iter().copied().collect::<Vec<_>>(), others_before);
        assert_sorted(&q);
    }

    #[test]
    fn remove_all_of_kind_absent_is_noop() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(1.0), lane(0, 1)));
        assert_eq!(q.remove_all_of_kind(EventKind::EndOfPhase), 0);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn remove_in_lane_matches_kind_and_lane_exactly() {
        let mut q = mixed_queue();
        assert_eq!(q.remove_all_of_kind_in_lane(EventKind::Departure, lane(0, 1)).unwrap(), 2);

        let remaining: Vec<Event> = q.iter().copied().collect();
        // The Arrival in (0, 1) and the Departure in (2, 3) survive.
        assert!(remaining.contains(&Event::arrival(t(1.0), lane(0, 1))));
        assert!(remaining.contains(&Event::departure(t(5.0), lane(2, 3))));
        assert_eq!(remaining.len(), 5);
        assert_sorted(&q);
    }

    #[test]
    fn remove_in_lane_reversed_pair_is_different_lane() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(1.0), lane(1, 0)));
        assert_eq!(q.remove_all_of_kind_in_lane(EventKind::Arrival, lane(0, 1)).unwrap(), 0);
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn remove_in_lane_rejects_laneless_kind() {
        let mut q = mixed_queue();
        let before = q.len();
        for kind in [EventKind::EndOfPhase, EventKind::Termination] {
            let err = q.remove_all_of_kind_in_lane(kind, lane(0, 1)).unwrap_err();
            assert!(matches!(err, EventError::InvalidArgument(_)));
        }
        assert_eq!(q.len(), before);
    }

    /// Arrival@5(0,1), Arrival@5(2,3): removing (0,1) leaves (2,3) next.
    #[test]
    fn scenario_d() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(5.0), lane(0, 1)));
        q.insert(Event::arrival(t(5.0), lane(2, 3)));
        assert_eq!(q.remove_all_of_kind_in_lane(EventKind::Arrival, lane(0, 1)).unwrap(), 1);
        assert_eq!(q.pop_next().unwrap(), Event::arrival(t(5.0), lane(2, 3)));
        assert!(q.is_empty());
    }
}

// ── Invariant under random mutation ───────────────────────────────────────────

#[cfg(test)]
mod invariant {
    use super::*;

    #[test]
    fn sorted_after_random_mixed_operations() {
        let mut rng = SimRng::new(2024);
        let mut q = EventQueue::new();

        for step in 0..2_000 {
            let op: u8 = rng.random::<u8>() % 10;
            // Coarse times force plenty of exact ties.
            let time = t(f64::from(rng.random::<u8>() % 20));
            let l = lane(u32::from(rng.random::<u8>() % 3), u32::from(rng.random::<u8>() % 3));
            match op {
                0..=3 => q.insert(Event::arrival(time, l)),
                4 | 5 => q.insert(Event::departure(time, l)),
                6 => q.insert(Event::end_of_phase(time)),
                7 => {
                    q.remove_all_of_kind(EventKind::EndOfPhase);
                }
                8 => {
                    q.remove_all_of_kind_in_lane(EventKind::Departure, l).unwrap();
                }
                _ => {
                    let _ = q.pop_next();
                }
            }
            if step % 50 == 0 {
                assert_sorted(&q);
            }
        }
        assert_sorted(&q);

        let popped = drain(&mut q);
        for pair in popped.windows(2) {
            assert!(!pair[1].precedes(&pair[0]));
        }
    }
}

// ── Scheduling surface ────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduling {
    use super::*;

    #[test]
    fn schedule_vehicle_and_phase_end() {
        let mut q = EventQueue::new();
        q.schedule(ScheduleRequest::departure(3.0, lane(0, 1))).unwrap();
        q.schedule(ScheduleRequest::phase_end(2.0)).unwrap();
        q.schedule(ScheduleRequest::arrival(3.0, lane(4, 5))).unwrap();
        let kinds: Vec<EventKind> = drain(&mut q).iter().map(Event::kind).collect();
        assert_eq!(kinds, vec![EventKind::EndOfPhase, EventKind::Arrival, EventKind::Departure]);
    }

    /// Departure without a lane is rejected.
    #[test]
    fn scenario_c() {
        let mut q = EventQueue::new();
        let err = q.schedule_kind(EventKind::Departure, 3.0, None).unwrap_err();
        assert!(matches!(err, EventError::InvalidArgument(_)));
        assert!(q.is_empty());
    }

    #[test]
    fn phase_end_with_lane_rejected() {
        let mut q = EventQueue::new();
        assert!(q.schedule_kind(EventKind::EndOfPhase, 3.0, Some(lane(0, 1))).is_err());
        assert!(q.is_empty());
    }

    #[test]
    fn termination_never_schedulable() {
        let mut q = EventQueue::new();
        assert!(q.schedule_kind(EventKind::Termination, 3.0, None).is_err());
        assert!(q.schedule_kind(EventKind::Termination, 3.0, Some(lane(0, 1))).is_err());
        assert!(q.is_empty());
    }

    #[test]
    fn mis_kinded_vehicle_request_rejected() {
        let mut q = EventQueue::new();
        let req = ScheduleRequest::Vehicle { kind: EventKind::EndOfPhase, time: 1.0, lane: lane(0, 0) };
        assert!(matches!(q.schedule(req), Err(EventError::InvalidArgument(_))));
        assert!(q.is_empty());
    }

    #[test]
    fn negative_time_rejected() {
        let mut q = EventQueue::new();
        assert!(q.schedule(ScheduleRequest::phase_end(-1.0)).is_err());
        assert!(q.schedule_kind(EventKind::Arrival, f64::NAN, Some(lane(0, 0))).is_err());
        assert!(q.is_empty());
    }

    #[test]
    fn reschedule_is_delete_then_insert() {
        let mut q = EventQueue::new();
        q.schedule(ScheduleRequest::phase_end(10.0)).unwrap();
        q.remove_all_of_kind(EventKind::EndOfPhase);
        q.schedule(ScheduleRequest::phase_end(4.0)).unwrap();
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_next().unwrap(), Event::end_of_phase(t(4.0)));
    }
}

// ── Initialisation and constructors ───────────────────────────────────────────

#[cfg(test)]
mod init {
    use ix_arrivals::{ArrivalGenerator, ArrivalRecord, RateMatrix};

    use super::*;

    /// Explicit arrivals with a tie at t=5.
    #[test]
    fn scenario_a() {
        let records: Vec<ArrivalRecord> =
            vec![(5.0, 0, 1).into(), (5.0, 2, 3).into(), (10.0, 1, 2).into()];
        let mut q = EventQueue::from_schedule(t(20.0), &records).unwrap();
        assert_eq!(
            drain(&mut q),
            vec![
                Event::arrival(t(5.0), lane(0, 1)),
                Event::arrival(t(5.0), lane(2, 3)),
                Event::end_of_phase(t(5.0)),
                Event::arrival(t(10.0), lane(1, 2)),
                Event::termination(t(20.0)),
            ]
        );
    }

    /// No arrivals: the first phase ends at time zero.
    #[test]
    fn scenario_b() {
        let mut q = EventQueue::from_schedule(t(15.0), &[]).unwrap();
        assert_eq!(
            drain(&mut q),
            vec![Event::end_of_phase(t(0.0)), Event::termination(t(15.0))]
        );
    }

    #[test]
    fn initialize_uses_earliest_not_first_inserted() {
        let mut q = EventQueue::new();
        q.insert(Event::arrival(t(8.0), lane(0, 0)));
        q.insert(Event::arrival(t(3.0), lane(0, 0)));
        initialize(&mut q, t(30.0));
        let eop: Vec<&Event> = q.iter().filter(|e| e.kind() == EventKind::EndOfPhase).collect();
        assert_eq!(eop.len(), 1);
        assert_eq!(eop[0].time(), t(3.0));
    }

    #[test]
    fn from_rates_seeds_phase_end_and_termination() {
        let rates = RateMatrix::from_rows(vec![vec![0.0, 120.0], vec![60.0, 0.0]]).unwrap();
        let q = EventQueue::from_rates(t(90.0), &rates, &mut SimRng::new(11));
        assert_sorted(&q);

        let first = *q.peek().unwrap();
        assert_eq!(first.kind(), EventKind::Arrival);

        let eop: Vec<&Event> = q.iter().filter(|e| e.kind() == EventKind::EndOfPhase).collect();
        assert_eq!(eop.len(), 1);
        assert_eq!(eop[0].time(), first.time());

        let last = q.iter().last().unwrap();
        assert_eq!(*last, Event::termination(t(90.0)));
        assert!(q.iter().filter(|e| e.kind() == EventKind::Arrival).all(|e| e.time() < t(90.0)));
    }

    #[test]
    fn from_generator_matches_from_rates() {
        let rates = RateMatrix::from_rows(vec![vec![30.0, 30.0]]).unwrap();
        let a = EventQueue::from_rates(t(60.0), &rates, &mut SimRng::new(5));
        let b = EventQueue::from_generator(t(60.0), &ArrivalGenerator::Rates(rates), &mut SimRng::new(5))
            .unwrap();
        assert_eq!(a.peek_first_n(usize::MAX), b.peek_first_n(usize::MAX));
    }

    #[test]
    fn from_schedule_rejects_bad_time() {
        let records = vec![ArrivalRecord::new(f64::NAN, 0, 1)];
        assert!(EventQueue::from_schedule(t(10.0), &records).is_err());
    }
}
