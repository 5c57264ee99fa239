use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_without_location_is_the_message() {
    let failure = AssertionFailure::new(FailureKind::NotEqual, "got 1 instead of 2");
    assert_eq!(failure.to_string(), "got 1 instead of 2");
    assert_eq!(failure.location(), None);
}

#[test]
fn display_with_location_prefixes_file_and_line() {
    let site = CallSite {
        file: "tests/math.rs",
        line: 12,
        column: 5,
    };
    let failure = AssertionFailure::new(FailureKind::MissingError, "expected an error").at(site);
    assert_eq!(failure.to_string(), "tests/math.rs:12: expected an error");
    assert_eq!(failure.location(), Some(site));
    assert_eq!(failure.kind(), FailureKind::MissingError);
}

#[test]
fn kind_display_matches_as_str() {
    for kind in [
        FailureKind::NotEqual,
        FailureKind::LengthMismatch,
        FailureKind::ToleranceExceeded,
        FailureKind::UnexpectedError,
        FailureKind::MissingError,
    ] {
        assert_eq!(kind.to_string(), kind.as_str());
    }
}

#[test]
fn usage_error_names_the_bad_tolerance() {
    let error = UsageError::InvalidTolerance { epsilon: -0.5 };
    assert_eq!(
        error.to_string(),
        "tolerance must be a non-negative number, got -0.5"
    );
}
