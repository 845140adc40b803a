//! Three-way selectors keyed by a string discriminant.

use tracing::{debug, trace};

use super::constants::*;
use super::error::TernaryError;
use super::options::{Choice, ThirdOptions};

/// Returns `a` for `"true"`, `b` for `"false"` and `c` for `third`.
///
/// The literals are checked before `third`, so a `third` of `"true"` or `"false"`
/// never selects `c`. Anything else fails with [`TernaryError::NoMatch`], carrying
/// `message` unless it is empty.
///
/// ```
/// assert_eq!(ternary::third("strict", "strict", "foo", "bar", "baz", ""), Ok("baz"));
/// ```
pub fn third<T>(
    value: &str,
    third: &str,
    a: T,
    b: T,
    c: T,
    message: &str,
) -> Result<T, TernaryError> {
    let choice = if value == TRUE_LABEL {
        Choice::True
    } else if value == FALSE_LABEL {
        Choice::False
    } else if value == third {
        Choice::Third
    } else {
        trace!(value, third, "value matched no option");
        return Err(TernaryError::no_match(message));
    };
    Ok(choice.pick(a, b, c))
}

/// Like [`third`], but each branch is selected by a set of labels.
///
/// `options` is validated first: its third set must be present, and no set may
/// hold an empty label. Unset true/false sets fall back to `"true"` / `"false"`.
/// `value` is then looked up in the true, false and third sets in that order.
pub fn third_ext<T, S: AsRef<str>>(
    value: &str,
    options: &ThirdOptions<S>,
    a: T,
    b: T,
    c: T,
    message: &str,
) -> Result<T, TernaryError> {
    let resolved = options.resolve().map_err(|e| {
        debug!(error = %e, "rejected three-way options");
        e
    })?;

    match resolved.choose(value) {
        Some(choice) => Ok(choice.pick(a, b, c)),
        None => {
            trace!(value, "value matched no option");
            Err(TernaryError::no_match(message))
        }
    }
}
