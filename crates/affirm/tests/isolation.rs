//! A failing assertion halts only the test that made it.
//!
//! These tests drive the libtest [`Harness`] reporter: the failing check runs
//! on its own thread, standing in for a test scheduled by the harness, while
//! the surrounding test keeps going.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use affirm::{assert_close, assert_equal, assert_failure, assert_success, init_tracing, Harness};
use pretty_assertions::assert_eq;

#[test]
#[should_panic(expected = "got 1 instead of 2")]
fn harness_fails_the_calling_test() {
    init_tracing();
    assert_equal(1, 2, &Harness);
}

#[test]
#[should_panic(expected = "expected an error")]
fn harness_fails_on_missing_error() {
    assert_failure(Ok::<_, std::fmt::Error>(3), &Harness);
}

#[test]
fn harness_passes_when_checks_hold() {
    init_tracing();
    assert_equal("same", "same", &Harness);
    assert_close([1.0, 2.0], [1.0, 2.0 + 1e-12], 1e-9, &Harness);
    let parsed: u8 = assert_success("7".parse::<u8>(), &Harness);
    assert_eq!(parsed, 7);
}

#[test]
fn failing_test_stops_and_sibling_completes() {
    let after_failure = Arc::new(AtomicBool::new(false));
    let sibling_done = Arc::new(AtomicBool::new(false));

    let failing = {
        let after_failure = Arc::clone(&after_failure);
        thread::spawn(move || {
            assert_equal(vec![1, 2], vec![1, 3], &Harness);
            after_failure.store(true, Ordering::SeqCst);
        })
    };
    let sibling = {
        let sibling_done = Arc::clone(&sibling_done);
        thread::spawn(move || {
            assert_equal(vec![1, 2], vec![1, 2], &Harness);
            sibling_done.store(true, Ordering::SeqCst);
        })
    };

    let payload = failing.join().expect_err("failing check must halt its thread");
    sibling.join().unwrap();

    assert!(!after_failure.load(Ordering::SeqCst));
    assert!(sibling_done.load(Ordering::SeqCst));

    let message = payload.downcast_ref::<String>().unwrap();
    assert!(message.contains(file!()));
    assert!(message.contains("got [1, 2] instead of [1, 3]"));
}

#[test]
fn harness_message_names_the_failing_line() {
    let line = line!() + 2;
    let handle = thread::spawn(|| {
        assert_close(0.0, 1.0, 0.25, &Harness);
    });
    let payload = handle.join().unwrap_err();
    let message = payload.downcast_ref::<String>().unwrap();
    let expected_prefix = format!("{}:{line}: ", file!());
    assert!(message.starts_with(&expected_prefix));
    assert!(message.contains("max deviation 1 exceeds tolerance 0.25"));
}
