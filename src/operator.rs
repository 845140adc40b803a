//! Two-way selectors.
//!
//! Free functions for call sites that read better with the condition first,
//! and the [`TernaryOperator`] extension trait for method-call style:
//!
//! ```
//! use ternary::TernaryOperator;
//!
//! let width = 12;
//! assert_eq!((width > 10).q("wide", "narrow"), "wide");
//! ```

/// Returns `a` when `condition` holds, otherwise `b`.
#[inline]
pub fn if_<T>(condition: bool, a: T, b: T) -> T {
    condition.q(a, b)
}

/// Selects between `a` and `b` like [`if_`], then passes the selected value to `f`.
///
/// `f` runs exactly once and never sees the other value.
#[inline]
pub fn if_func<T, R, F>(condition: bool, a: T, b: T, f: F) -> R
where
    F: FnOnce(T) -> R,
{
    condition.q_map(a, b, f)
}

/// Calls `when_true` if `condition` holds, otherwise `when_false`, and returns its result.
///
/// The producer that is not selected is dropped without being called.
#[inline]
pub fn iff<T, F, G>(condition: bool, when_true: F, when_false: G) -> T
where
    F: FnOnce() -> T,
    G: FnOnce() -> T,
{
    condition.q_with(when_true, when_false)
}

pub trait TernaryOperator {
    fn q<V>(&self, if_true: V, if_false: V) -> V;

    fn q_map<V, R, F>(&self, if_true: V, if_false: V, f: F) -> R
    where
        F: FnOnce(V) -> R;

    fn q_with<V, F, G>(&self, if_true: F, if_false: G) -> V
    where
        F: FnOnce() -> V,
        G: FnOnce() -> V;
}

impl TernaryOperator for bool {
    #[inline]
    fn q<V>(&self, if_true: V, if_false: V) -> V {
        if *self {
            if_true
        } else {
            if_false
        }
    }

    #[inline]
    fn q_map<V, R, F>(&self, if_true: V, if_false: V, f: F) -> R
    where
        F: FnOnce(V) -> R,
    {
        f(self.q(if_true, if_false))
    }

    #[inline]
    fn q_with<V, F, G>(&self, if_true: F, if_false: G) -> V
    where
        F: FnOnce() -> V,
        G: FnOnce() -> V,
    {
        if *self {
            if_true()
        } else {
            if_false()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::cell::Cell;
    use std::collections::HashMap;

    use proptest::prelude::*;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Named {
        foo: String,
    }

    fn named(s: &str) -> Named {
        Named { foo: s.to_string() }
    }

    #[test]
    fn if_selects_for_every_value_category() {
        assert_eq!(if_(true, "foo", "bar"), "foo");
        assert_eq!(if_(false, "foo", "bar"), "bar");
        assert_eq!(if_(true, 1, 2), 1);
        assert_eq!(if_(false, 1, 2), 2);
        assert_eq!(if_(true, 1.1, 2.2), 1.1);
        assert_eq!(if_(false, 1.1, 2.2), 2.2);
        assert!(if_(true, true, false));
        assert!(!if_(false, true, false));
        assert_eq!(if_(true, named("foo"), named("bar")), named("foo"));
        assert_eq!(if_(false, named("foo"), named("bar")), named("bar"));
        assert_eq!(if_(true, vec!["foo"], vec!["bar"]), vec!["foo"]);
        assert_eq!(if_(false, vec!["foo"], vec!["bar"]), vec!["bar"]);

        let foo = HashMap::from([("foo", "foo")]);
        let bar = HashMap::from([("foo", "bar")]);
        assert_eq!(if_(true, foo.clone(), bar.clone()), foo);
        assert_eq!(if_(false, foo, bar.clone()), bar);
    }

    #[test]
    fn if_selects_opaque_values() {
        let a: Box<dyn Any> = Box::new("foo");
        let b: Box<dyn Any> = Box::new("bar");
        let got = if_(false, a, b);
        assert_eq!(got.downcast_ref::<&str>(), Some(&"bar"));
    }

    #[test]
    fn if_func_applies_transform_to_selected_value() {
        let double = |x: i32| x * 2;
        assert_eq!(if_func(false, 1, 2, double), 4);
        assert_eq!(if_func(true, 1, 2, double), 2);
        assert_eq!(if_func(true, 7, 8, |e| format!("{:?}", e)), "7");
    }

    #[test]
    fn iff_runs_only_the_selected_branch() {
        let true_calls = Cell::new(0);
        let false_calls = Cell::new(0);
        let got = iff(
            true,
            || {
                true_calls.set(true_calls.get() + 1);
                "foo"
            },
            || {
                false_calls.set(false_calls.get() + 1);
                "bar"
            },
        );
        assert_eq!(got, "foo");
        assert_eq!(true_calls.get(), 1);
        assert_eq!(false_calls.get(), 0);
    }

    #[test]
    fn iff_never_evaluates_a_panicking_branch() {
        let got = iff(false, || -> u8 { panic!("unselected branch ran") }, || 3);
        assert_eq!(got, 3);
    }

    #[test]
    fn method_forms_match_free_functions() {
        assert_eq!(true.q(1, 2), 1);
        assert_eq!((1 > 2).q(1, 2), 2);
        assert_eq!(false.q_map("a", "bb", str::len), 2);
        assert_eq!(true.q_with(|| "x", || "y"), "x");
    }

    proptest! {
        #[test]
        fn if_returns_first_iff_condition(c: bool, a: i64, b: i64) {
            prop_assert_eq!(if_(c, a, b), if c { a } else { b });
        }

        #[test]
        fn if_func_is_transform_of_if(c: bool, a: i32, b: i32) {
            let calls = Cell::new(0);
            let f = |x: i32| {
                calls.set(calls.get() + 1);
                i64::from(x) - 1
            };
            prop_assert_eq!(if_func(c, a, b, f), i64::from(if_(c, a, b)) - 1);
            prop_assert_eq!(calls.get(), 1);
        }

        #[test]
        fn iff_invokes_exactly_one_producer(c: bool, a: String, b: String) {
            let true_calls = Cell::new(0);
            let false_calls = Cell::new(0);
            let got = iff(
                c,
                || { true_calls.set(true_calls.get() + 1); a.clone() },
                || { false_calls.set(false_calls.get() + 1); b.clone() },
            );
            prop_assert_eq!(got, if c { a.clone() } else { b.clone() });
            prop_assert_eq!(true_calls.get(), usize::from(c));
            prop_assert_eq!(false_calls.get(), usize::from(!c));
        }
    }
}
