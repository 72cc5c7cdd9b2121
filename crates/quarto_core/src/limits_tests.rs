use super::*;
use std::thread;

#[test]
fn test_depth_only() {
    let limits = SearchLimits::depth(5);
    assert_eq!(limits.depth, 5);
    assert!(limits.move_time.is_none());
    assert!(limits.max_nodes.is_none());
    assert!(!limits.is_stopped());
    assert!(!limits.out_of_budget(CLOCK_INTERVAL * 1000));
}

#[test]
fn test_time_only_leaves_depth_open() {
    let limits = SearchLimits::time(Duration::from_millis(100));
    assert_eq!(limits.depth, u8::MAX);
    assert_eq!(limits.move_time, Some(Duration::from_millis(100)));
}

#[test]
fn test_node_budget() {
    let limits = SearchLimits::depth(8).with_max_nodes(500);
    limits.start();
    assert!(!limits.out_of_budget(499));
    assert!(limits.out_of_budget(500));
    assert!(limits.is_stopped());
    // Later checks see the raised signal whatever the count.
    assert!(limits.out_of_budget(1));
}

#[test]
fn test_move_time_expires() {
    let limits = SearchLimits::depth_and_time(4, Duration::from_millis(10));
    limits.start();
    assert!(!limits.out_of_budget(CLOCK_INTERVAL));

    thread::sleep(Duration::from_millis(20));
    // The clock is only read on the interval.
    assert!(!limits.out_of_budget(CLOCK_INTERVAL + 1));
    assert!(limits.out_of_budget(CLOCK_INTERVAL * 2));
}

#[test]
fn test_clones_share_the_signal() {
    let limits = SearchLimits::depth(4);
    let worker = limits.clone();
    limits.start();
    worker.signal.raise();
    assert!(limits.is_stopped());

    limits.start();
    assert!(!worker.is_stopped());
}

#[test]
fn test_elapsed_before_start() {
    let signal = StopSignal::default();
    assert_eq!(signal.elapsed(), Duration::ZERO);
}
