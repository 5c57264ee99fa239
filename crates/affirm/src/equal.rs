//! Exact and structural equality.
//!
//! Both values share one type parameter, so comparing different kinds is a
//! type error rather than a runtime failure:
//!
//! ```compile_fail
//! use affirm::{assert_equal, Harness};
//!
//! assert_equal(1, vec![1], &Harness);
//! ```
//!
//! Absence is modelled with `Option`. `None` equals `None`; `None` against
//! `Some(_)` fails in either order. Sequences, structs and smart pointers
//! compare through their `PartialEq` impls, which are structural for `Vec`,
//! slices, derived records and `Box`/`Rc`/`&`.

use std::any::type_name;
use std::fmt::Debug;

use crate::reporter::raise;
use crate::{FailureKind, Reporter};

/// Assert that `actual` equals `expected`.
///
/// On mismatch the report embeds both values and the compared type.
///
/// ```
/// use affirm::{assert_equal, Harness};
///
/// assert_equal(vec![1_u32, 2, 3], vec![1, 2, 3], &Harness);
/// assert_equal(None::<i32>, None, &Harness);
/// ```
#[track_caller]
#[allow(
    clippy::needless_pass_by_value,
    reason = "operands are owned so literals and temporaries can be passed directly"
)]
pub fn assert_equal<T, R>(actual: T, expected: T, reporter: &R)
where
    T: PartialEq + Debug,
    R: Reporter + ?Sized,
{
    if actual == expected {
        tracing::trace!(check = "assert_equal", "passed");
        return;
    }

    raise(
        reporter,
        FailureKind::NotEqual,
        format!(
            "got {actual:?} instead of {expected:?} (type {})",
            type_name::<T>()
        ),
    )
}
