//! Failure reporting and test abort.
//!
//! Every checker funnels mismatches through [`raise`], which logs the call
//! site, records the failure on a [`Reporter`] and halts the current test.
//!
//! # Reporters
//!
//! - [`Harness`]: for tests run by libtest. Halting panics on the test's own
//!   thread, so libtest marks that test failed and sibling tests keep running.
//! - [`Recorder`]: keeps failures in memory. Inside [`capture`], halting
//!   unwinds with a private payload that becomes an `Err`, which makes failing
//!   assertions observable from a passing test. Used directly, halting panics
//!   with the failure message like [`Harness`] does.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};

use crate::{AssertionFailure, CallSite, FailureKind, UsageError};

/// The host framework's per-test context.
pub trait Reporter {
    /// Record the failure against the current test.
    fn record(&self, failure: &AssertionFailure);

    /// Stop executing the current test.
    fn halt(&self, failure: AssertionFailure) -> !;
}

/// Reporter for tests run by the standard test harness.
#[derive(Copy, Clone, Debug, Default)]
pub struct Harness;

impl Reporter for Harness {
    fn record(&self, failure: &AssertionFailure) {
        tracing::debug!(kind = %failure.kind(), "{}", failure.message());
    }

    #[track_caller]
    fn halt(&self, failure: AssertionFailure) -> ! {
        panic!("{failure}")
    }
}

/// Unwind payload used by [`Recorder::halt`].
struct Halted(AssertionFailure);

/// Reporter that keeps every recorded failure in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    failures: RefCell<Vec<AssertionFailure>>,
    /// Set only by [`capture`], which catches the silent unwind.
    captured: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn captured() -> Self {
        Recorder {
            failures: RefCell::default(),
            captured: true,
        }
    }

    /// Failures recorded so far, oldest first.
    pub fn failures(&self) -> Vec<AssertionFailure> {
        self.failures.borrow().clone()
    }
}

impl Reporter for Recorder {
    fn record(&self, failure: &AssertionFailure) {
        self.failures.borrow_mut().push(failure.clone());
    }

    #[track_caller]
    fn halt(&self, failure: AssertionFailure) -> ! {
        if self.captured {
            panic::resume_unwind(Box::new(Halted(failure)))
        }
        panic!("{failure}")
    }
}

/// Run `check` against a fresh [`Recorder`].
///
/// Returns the closure's value if no assertion halted it, or the failure
/// that did. Any other panic, usage errors included, propagates unchanged.
///
/// ```
/// use affirm::{assert_equal, capture, FailureKind};
///
/// let failure = capture(|r| assert_equal(1, 2, r)).unwrap_err();
/// assert_eq!(failure.kind(), FailureKind::NotEqual);
/// assert!(failure.message().starts_with("got 1 instead of 2"));
/// ```
pub fn capture<T>(check: impl FnOnce(&Recorder) -> T) -> Result<T, AssertionFailure> {
    let recorder = Recorder::captured();
    match panic::catch_unwind(AssertUnwindSafe(|| check(&recorder))) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<Halted>() {
            Ok(halted) => Err(halted.0),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Report a mismatch located at the checker's caller and halt the test.
#[cold]
#[track_caller]
pub(crate) fn raise<R: Reporter + ?Sized>(reporter: &R, kind: FailureKind, message: String) -> ! {
    let site = CallSite::caller();
    tracing::error!(
        file = site.file,
        line = site.line,
        column = site.column,
        %kind,
        "assertion failed at {site}"
    );
    let failure = AssertionFailure::new(kind, message).at(site);
    reporter.record(&failure);
    reporter.halt(failure)
}

/// Abort on a malformed check. Never routed through a [`Reporter`], so
/// [`capture`] cannot turn it into an assertion failure.
#[cold]
#[track_caller]
pub(crate) fn misuse(error: UsageError) -> ! {
    let site = CallSite::caller();
    tracing::error!(file = site.file, line = site.line, %error, "assertion misused");
    panic!("{}{error} at {site}", crate::USAGE_ERROR_PREFIX)
}
