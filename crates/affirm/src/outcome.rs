//! Presence or absence of a failure signal.
//!
//! The signal is a `Result`: `Ok` means no failure occurred, `Err` carries the
//! failure payload. Both checks hand the interesting half back to the caller.

use std::fmt::Display;

use crate::reporter::raise;
use crate::{FailureKind, Reporter};

/// Assert that no error occurred and return the success value.
///
/// ```
/// use affirm::{assert_success, Harness};
///
/// let port: u16 = assert_success("8080".parse::<u16>(), &Harness);
/// assert_eq!(port, 8080);
/// ```
#[track_caller]
pub fn assert_success<T, E, R>(signal: Result<T, E>, reporter: &R) -> T
where
    E: Display,
    R: Reporter + ?Sized,
{
    match signal {
        Ok(value) => value,
        Err(error) => raise(
            reporter,
            FailureKind::UnexpectedError,
            format!("got an error '{error}'"),
        ),
    }
}

/// Assert that an error occurred and return it.
///
/// The success type needs no bounds; the report only names the missing error.
#[track_caller]
pub fn assert_failure<T, E, R>(signal: Result<T, E>, reporter: &R) -> E
where
    R: Reporter + ?Sized,
{
    match signal {
        Err(error) => error,
        Ok(_) => raise(
            reporter,
            FailureKind::MissingError,
            "expected an error".to_string(),
        ),
    }
}
