//! Assertion helpers for unit tests.
//!
//! Each check compares an actual value against an expected one and, on
//! mismatch, reports through a [`Reporter`] with the file and line of the
//! statement that called the check, then halts the current test.
//!
//! # Checks
//!
//! - [`assert_equal`]: exact or structural equality.
//! - [`assert_close`]: maximum elementwise deviation of floats within a
//!   tolerance, for scalars and sequences alike.
//! - [`assert_success`] / [`assert_failure`]: absence or presence of an error.
//!
//! # Failure tiers
//!
//! A failed check produces an [`AssertionFailure`] and stops only the calling
//! test. A malformed check, such as a negative tolerance, is a [`UsageError`]
//! and aborts with a message starting with [`USAGE_ERROR_PREFIX`].
//!
//! ```
//! use affirm::{assert_close, assert_equal, assert_success, Harness};
//!
//! assert_equal(2 + 2, 4, &Harness);
//! assert_close(0.1 + 0.2, 0.3, 1e-12, &Harness);
//! let n: i32 = assert_success("42".parse::<i32>(), &Harness);
//! assert_equal(n, 42, &Harness);
//! ```
//!
//! # Logging
//!
//! Failures are emitted as `tracing` events at `error` level with the call
//! site as fields. Call [`init_tracing`] to print them, filtered by `RUST_LOG`.

mod close;
mod equal;
mod failure;
mod location;
mod outcome;
mod reporter;

use std::sync::Once;

pub use close::{assert_close, Approx, Element};
#[allow(deprecated)]
pub use close::assert_equal_within;
pub use equal::assert_equal;
pub use failure::{AssertionFailure, FailureKind, UsageError, USAGE_ERROR_PREFIX};
pub use location::CallSite;
pub use outcome::{assert_failure, assert_success};
pub use reporter::{capture, Harness, Recorder, Reporter};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for failure output.
///
/// Safe to call from every test. Does nothing unless `RUST_LOG` is set, and
/// leaves an already installed global subscriber in place.
/// Enable with `RUST_LOG=affirm=error` or `RUST_LOG=affirm=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}
