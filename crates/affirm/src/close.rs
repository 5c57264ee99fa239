//! Approximate closeness of floating-point scalars and sequences.
//!
//! A check passes when the largest absolute elementwise deviation is at most
//! the tolerance. The whole input is scanned before deciding, so a failure
//! always reports the true worst element.
//!
//! # Shapes
//!
//! [`Approx`] abstracts over the shape of the compared values. Scalars are
//! seen as one-element sequences; slices, arrays and `Vec`s expose their
//! elements directly. Actual and expected share one type, and the tolerance
//! has that type's element type, so these are rejected at compile time:
//!
//! ```compile_fail
//! use affirm::{assert_close, Harness};
//!
//! // different declared types
//! assert_close(1.0_f32, 1.0_f64, 1e-6, &Harness);
//! ```
//!
//! ```compile_fail
//! use affirm::{assert_close, Harness};
//!
//! // integers are not a supported element type
//! assert_close(1_i32, 2_i32, 0, &Harness);
//! ```
//!
//! # Special values
//!
//! - Infinities of the same sign have zero deviation.
//! - Opposite infinities deviate by infinity, which only an infinite
//!   tolerance accepts.
//! - A NaN deviation (NaN on either side) always exceeds the tolerance.

use std::fmt::{Debug, Display};

use crate::reporter::{misuse, raise};
use crate::{FailureKind, Reporter, UsageError};

mod sealed {
    pub trait Sealed {}
}

/// Floating-point element types supported by [`assert_close`].
pub trait Element: sealed::Sealed + Copy + PartialOrd + Debug + Display {
    const ZERO: Self;

    /// Absolute deviation between two elements.
    fn deviation(self, other: Self) -> Self;

    fn is_nan(self) -> bool;

    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                #[allow(clippy::float_cmp, reason = "equal infinities have zero deviation")]
                fn deviation(self, other: Self) -> Self {
                    if self == other {
                        0.0
                    } else {
                        (self - other).abs()
                    }
                }

                #[inline]
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    f64::from(self)
                }
            }

            impl Approx for $ty {
                type Elem = $ty;

                #[inline]
                fn samples(&self) -> &[$ty] {
                    std::slice::from_ref(self)
                }
            }
        )*
    };
}

impl_element!(f32, f64);

/// A value that can be compared elementwise within a tolerance.
pub trait Approx: Debug {
    type Elem: Element;

    /// The elements to compare. Scalars yield a single element.
    fn samples(&self) -> &[Self::Elem];
}

impl<E: Element> Approx for [E] {
    type Elem = E;

    #[inline]
    fn samples(&self) -> &[E] {
        self
    }
}

impl<E: Element, const N: usize> Approx for [E; N] {
    type Elem = E;

    #[inline]
    fn samples(&self) -> &[E] {
        self
    }
}

impl<E: Element> Approx for Vec<E> {
    type Elem = E;

    #[inline]
    fn samples(&self) -> &[E] {
        self
    }
}

impl<A: Approx + ?Sized> Approx for &A {
    type Elem = A::Elem;

    #[inline]
    fn samples(&self) -> &[A::Elem] {
        (**self).samples()
    }
}

/// The largest deviation found and where.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Deviation<E> {
    index: usize,
    delta: E,
}

impl<E: Element> Deviation<E> {
    fn exceeds(self, epsilon: E) -> bool {
        self.delta.is_nan() || self.delta > epsilon
    }

    /// Keep whichever of two deviations is worse. The first NaN wins.
    fn worse(self, other: Self) -> Self {
        if self.delta.is_nan() {
            self
        } else if other.delta.is_nan() || other.delta > self.delta {
            other
        } else {
            self
        }
    }
}

/// Worst elementwise deviation, or `None` for empty input.
fn max_deviation<E: Element>(actual: &[E], expected: &[E]) -> Option<Deviation<E>> {
    actual
        .iter()
        .zip(expected)
        .enumerate()
        .map(|(index, (&a, &e))| Deviation {
            index,
            delta: a.deviation(e),
        })
        .reduce(Deviation::worse)
}

/// Assert that `actual` and `expected` differ by at most `epsilon`
/// elementwise.
///
/// Sequences of different length fail regardless of their contents. A
/// negative or NaN `epsilon` is a usage error and aborts with a message
/// starting with [`USAGE_ERROR_PREFIX`](crate::USAGE_ERROR_PREFIX).
///
/// ```
/// use affirm::{assert_close, Harness};
///
/// assert_close(1.0, 1.0 + 1e-16, 1e-15, &Harness);
/// assert_close([1.0, 1.0 + 1e-16], [1.0, 1.0], 1e-15, &Harness);
/// assert_close(&vec![0.5_f32], &vec![0.5], 0.0, &Harness);
/// ```
#[track_caller]
#[allow(
    clippy::needless_pass_by_value,
    reason = "operands are owned so literals and temporaries can be passed directly"
)]
pub fn assert_close<V, R>(actual: V, expected: V, epsilon: V::Elem, reporter: &R)
where
    V: Approx,
    R: Reporter + ?Sized,
{
    if epsilon.is_nan() || epsilon < <V::Elem as Element>::ZERO {
        misuse(UsageError::InvalidTolerance {
            epsilon: epsilon.to_f64(),
        });
    }

    let (got, want) = (actual.samples(), expected.samples());
    if got.len() != want.len() {
        raise(
            reporter,
            FailureKind::LengthMismatch,
            format!(
                "got {actual:?} instead of {expected:?} (length {} vs {})",
                got.len(),
                want.len()
            ),
        );
    }

    match max_deviation(got, want) {
        Some(worst) if worst.exceeds(epsilon) => raise(
            reporter,
            FailureKind::ToleranceExceeded,
            format!(
                "got {} instead of {} at index {} (max deviation {} exceeds tolerance {})",
                got[worst.index], want[worst.index], worst.index, worst.delta, epsilon
            ),
        ),
        _ => tracing::trace!(check = "assert_close", len = got.len(), "passed"),
    }
}

/// Former name of [`assert_close`], with the same max-deviation semantics.
#[deprecated(since = "0.2.0", note = "use `assert_close`")]
#[track_caller]
pub fn assert_equal_within<V, R>(actual: V, expected: V, epsilon: V::Elem, reporter: &R)
where
    V: Approx,
    R: Reporter + ?Sized,
{
    assert_close(actual, expected, epsilon, reporter);
}
