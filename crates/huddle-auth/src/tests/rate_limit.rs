use crate::{RateLimitConfig, SendRateLimiter};

use std::time::Duration;

use uuid::Uuid;

#[test]
fn given_fresh_sender_when_incremented_then_counts_from_one() {
    let limiter = SendRateLimiter::default();
    let sender = Uuid::new_v4();

    assert_eq!(limiter.increment_and_check(sender).unwrap(), 1);
    assert_eq!(limiter.increment_and_check(sender).unwrap(), 2);
    assert_eq!(limiter.increment_and_check(sender).unwrap(), 3);
}

#[test]
fn given_two_senders_when_incremented_then_counters_are_independent() {
    let limiter = SendRateLimiter::default();
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    for _ in 0..3 {
        limiter.increment_and_check(a).unwrap();
    }

    assert_eq!(limiter.increment_and_check(b).unwrap(), 1);
    assert_eq!(limiter.increment_and_check(a).unwrap(), 4);
}

#[test]
fn given_rejected_attempt_when_incremented_again_then_still_counts() {
    let limiter = SendRateLimiter::default();
    let sender = Uuid::new_v4();

    // The 4th increment is over the default limit of 3 but still recorded
    for _ in 0..4 {
        limiter.increment_and_check(sender).unwrap();
    }

    assert_eq!(limiter.increment_and_check(sender).unwrap(), 5);
}

#[test]
fn given_elapsed_window_when_incremented_then_counter_resets() {
    let limiter = SendRateLimiter::new(RateLimitConfig {
        max_requests: 3,
        window_secs: 1,
    });
    let sender = Uuid::new_v4();

    for _ in 0..4 {
        limiter.increment_and_check(sender).unwrap();
    }

    std::thread::sleep(Duration::from_millis(1100));

    assert_eq!(limiter.increment_and_check(sender).unwrap(), 1);
}

#[test]
fn given_concurrent_senders_when_incremented_then_no_count_is_lost() {
    use std::sync::Arc;

    let limiter = Arc::new(SendRateLimiter::default());
    let sender = Uuid::new_v4();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let limiter = limiter.clone();
            std::thread::spawn(move || limiter.increment_and_check(sender).unwrap())
        })
        .collect();

    let mut counts: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    counts.sort_unstable();

    // Each increment observed a distinct post-increment count
    assert_eq!(counts, (1..=8).collect::<Vec<u32>>());
}
