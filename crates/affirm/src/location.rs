//! Source locations of assertion call sites.
//!
//! Locations are captured at compile time through `#[track_caller]`. Every
//! function between the test body and [`CallSite::caller`] must carry the
//! attribute, otherwise the captured location points inside this crate.

use std::fmt;
use std::panic::Location;

/// The file, line and column of the statement that invoked an assertion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallSite {
    /// Capture the location of the nearest caller not marked `#[track_caller]`.
    #[inline]
    #[track_caller]
    pub fn caller() -> Self {
        Self::from(Location::caller())
    }
}

impl From<&'static Location<'static>> for CallSite {
    fn from(location: &'static Location<'static>) -> Self {
        CallSite {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
