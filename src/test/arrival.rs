use super::{Scripted, assert_close};
use crate::net::PacketId;
use crate::process::ArrivalProcess;
use crate::queue::{DropTailQueue, PacketQueue};
use crate::sim::{BufferCapacity, SimTime, TimeScale};

#[test]
fn arrival_before_setup_never_fires() {
    let mut arrivals = ArrivalProcess::new(Scripted::new([0.0; 0]));
    let mut q = DropTailQueue::unbounded();
    assert!(!arrivals.arrival(SimTime(1e9), &mut q));
    assert!(q.is_empty());
    assert_eq!(arrivals.next_arrival(), SimTime::INFINITY);
}

#[test]
fn first_arrival_is_at_time_zero_and_schedules_next_gap() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(2.0, &[0.75]));
    arrivals.setup(2.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::unbounded();

    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    assert_eq!(q.len(), 1);
    assert_close(arrivals.next_arrival().ticks(), 0.75);

    let pkt = q.dequeue().expect("pkt");
    assert_eq!(pkt.id(), PacketId(0));
    assert_eq!(pkt.arrival(), SimTime::ZERO);
}

#[test]
fn arrival_is_noop_before_next_arrival_time() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(1.0, &[1.0, 1.0]));
    arrivals.setup(1.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::unbounded();

    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    let next = arrivals.next_arrival();
    assert!(!arrivals.arrival(SimTime(0.5), &mut q));
    assert_eq!(arrivals.next_arrival(), next);
    assert_eq!(q.len(), 1);
}

#[test]
fn noop_arrival_does_not_consume_draws() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(1.0, &[1.0]));
    arrivals.setup(1.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::unbounded();
    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    for t in [0.1, 0.2, 0.9] {
        assert!(!arrivals.arrival(SimTime(t), &mut q));
    }
    assert_eq!(q.len(), 1);
}

#[test]
fn inverse_transform_uses_one_minus_u() {
    // U = 0 gives a zero gap; U = 1 - e^-1 gives a gap of 1/lambda.
    let mut arrivals = ArrivalProcess::new(Scripted::new([0.0, 1.0 - (-1.0f64).exp()]));
    arrivals.setup(4.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::unbounded();

    assert!(!arrivals.arrival(SimTime(3.0), &mut q));
    assert_eq!(arrivals.next_arrival(), SimTime(3.0));
    assert!(!arrivals.arrival(SimTime(3.0), &mut q));
    assert_close(arrivals.next_arrival().ticks(), 3.25);
    assert_eq!(q.len(), 2);
}

#[test]
fn gap_is_converted_to_ticks() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(1.0, &[0.002]));
    arrivals.setup(1.0, TimeScale::new(1e-6));
    let mut q = DropTailQueue::unbounded();
    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    assert!((arrivals.next_arrival().ticks() - 2_000.0).abs() < 1e-6);
}

#[test]
fn full_queue_drops_but_still_draws_next_arrival() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(1.0, &[0.5, 0.5, 0.5]));
    arrivals.setup(1.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::new(BufferCapacity::Packets(1));

    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    let t1 = arrivals.next_arrival();
    assert!(arrivals.arrival(t1, &mut q));
    assert_eq!(q.len(), 1);
    assert!(arrivals.next_arrival() > t1);

    // The dropped packet still consumed an id.
    q.dequeue().expect("pkt");
    let t2 = arrivals.next_arrival();
    assert!(!arrivals.arrival(t2, &mut q));
    assert_eq!(q.dequeue().expect("pkt").id(), PacketId(2));
}

#[test]
fn zero_capacity_rejects_every_arrival() {
    let mut arrivals = ArrivalProcess::new(Scripted::new([0.0; 5]));
    arrivals.setup(1.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::new(BufferCapacity::Packets(0));
    for _ in 0..5 {
        assert!(arrivals.arrival(SimTime::ZERO, &mut q));
    }
    assert!(q.is_empty());
}

#[test]
fn setup_resets_clock_and_ids() {
    let mut arrivals = ArrivalProcess::new(Scripted::gaps(1.0, &[5.0, 5.0]));
    arrivals.setup(1.0, TimeScale::SECONDS);
    let mut q = DropTailQueue::unbounded();
    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));

    arrivals.setup(1.0, TimeScale::SECONDS);
    assert_eq!(arrivals.next_arrival(), SimTime::ZERO);
    q.reset(BufferCapacity::Unbounded);
    assert!(!arrivals.arrival(SimTime::ZERO, &mut q));
    assert_eq!(q.dequeue().expect("pkt").id(), PacketId(0));
}
