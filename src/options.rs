//! Label sets for the three-way selector.
//!
//! A [`ThirdOptions`] is what the caller hands in. [`ThirdOptions::resolve`]
//! validates it and fills in the default `"true"` / `"false"` labels, borrowing
//! the caller's sets instead of rewriting them.

use super::constants::*;
use super::error::InvalidConfiguration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThirdOptions<S = String> {
    pub true_options: Option<Vec<S>>,
    pub false_options: Option<Vec<S>>,
    pub third_options: Option<Vec<S>>,
}

impl<S> Default for ThirdOptions<S> {
    fn default() -> Self {
        ThirdOptions {
            true_options: None,
            false_options: None,
            third_options: None,
        }
    }
}

impl<S: AsRef<str>> ThirdOptions<S> {
    /// Options selecting the third value for any of `third`, with the default true/false labels.
    pub fn new<I: IntoIterator<Item = S>>(third: I) -> Self {
        ThirdOptions {
            third_options: Some(third.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn with_true_options<I: IntoIterator<Item = S>>(mut self, labels: I) -> Self {
        self.true_options = Some(labels.into_iter().collect());
        self
    }

    pub fn with_false_options<I: IntoIterator<Item = S>>(mut self, labels: I) -> Self {
        self.false_options = Some(labels.into_iter().collect());
        self
    }

    pub fn resolve(&self) -> Result<ResolvedOptions<'_, S>, InvalidConfiguration> {
        let third = match self.third_options.as_deref() {
            Some(labels) if !is_unset(labels) => Labels::Given(labels),
            _ => return Err(InvalidConfiguration::ThirdOptionsMissing),
        };
        let truthy = Labels::or_default(self.true_options.as_deref(), DEFAULT_TRUE_OPTIONS);
        let falsy = Labels::or_default(self.false_options.as_deref(), DEFAULT_FALSE_OPTIONS);

        if truthy.has_empty() || falsy.has_empty() || third.has_empty() {
            return Err(InvalidConfiguration::EmptyLabel);
        }

        Ok(ResolvedOptions {
            truthy,
            falsy,
            third,
        })
    }
}

// nil, empty, or a lone "" placeholder
fn is_unset<S: AsRef<str>>(labels: &[S]) -> bool {
    match labels {
        [] => true,
        [only] => only.as_ref().is_empty(),
        _ => false,
    }
}

#[derive(Copy, Clone, Debug)]
enum Labels<'a, S> {
    Given(&'a [S]),
    Default(&'static [&'static str]),
}

impl<'a, S: AsRef<str>> Labels<'a, S> {
    fn or_default(given: Option<&'a [S]>, default: &'static [&'static str]) -> Self {
        match given {
            Some(labels) if !is_unset(labels) => Labels::Given(labels),
            _ => Labels::Default(default),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Labels::Given(labels) => Box::new(labels.iter().map(|l| l.as_ref())),
            Labels::Default(labels) => Box::new(labels.iter().copied()),
        }
    }

    fn contains(&self, value: &str) -> bool {
        match self {
            Labels::Given(labels) => labels.iter().any(|l| l.as_ref() == value),
            Labels::Default(labels) => labels.iter().any(|l| *l == value),
        }
    }

    fn has_empty(&self) -> bool {
        self.contains("")
    }
}

/// Which of the three candidate values a discriminant selects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    True,
    False,
    Third,
}

impl Choice {
    #[inline]
    pub fn pick<T>(self, a: T, b: T, c: T) -> T {
        match self {
            Choice::True => a,
            Choice::False => b,
            Choice::Third => c,
        }
    }
}

/// Validated label sets with defaults applied.
#[derive(Copy, Clone, Debug)]
pub struct ResolvedOptions<'a, S> {
    truthy: Labels<'a, S>,
    falsy: Labels<'a, S>,
    third: Labels<'a, S>,
}

impl<'a, S: AsRef<str>> ResolvedOptions<'a, S> {
    /// First set containing `value`, checked true, false, then third.
    pub fn choose(&self, value: &str) -> Option<Choice> {
        if self.truthy.contains(value) {
            Some(Choice::True)
        } else if self.falsy.contains(value) {
            Some(Choice::False)
        } else if self.third.contains(value) {
            Some(Choice::Third)
        } else {
            None
        }
    }

    /// Labels that appear in more than one set. Such labels always resolve to the
    /// earliest set, so a non-empty result usually means a misconfiguration.
    pub fn overlapping_labels(&self) -> Vec<&str> {
        let sets = [&self.truthy, &self.falsy, &self.third];
        let mut overlaps: Vec<&str> = vec![];
        for (si, set) in sets.into_iter().enumerate() {
            for label in set.iter() {
                let elsewhere = sets[si + 1..].iter().any(|other| other.contains(label));
                if elsewhere && !overlaps.contains(&label) {
                    overlaps.push(label);
                }
            }
        }
        overlaps
    }
}
