use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Compute `0 + 1 + ... + n` for non-negative `n` by iterating and
/// accumulating. A negative `n` reflects to the positive case through a
/// single self-referential call, so `sum(-15) == sum(15)`.
///
/// The O(n) loop is the operation the benchmarks time, so it must not be
/// replaced by the closed form. Overflow for very large `n` is not guarded.
pub fn sum(n: i64) -> i64 {
    if n > 0 {
        let mut total = 0;
        for k in 0..=n {
            total += k;
        }
        total
    } else if n == 0 {
        0
    } else {
        sum(-n)
    }
}

fn fold_sum(n: i64) -> i64 {
    if n > 0 {
        (0..=n).sum()
    } else if n == 0 {
        0
    } else {
        fold_sum(-n)
    }
}

fn recursive_sum(n: i64) -> i64 {
    if n > 0 {
        n + recursive_sum(n - 1)
    } else if n == 0 {
        0
    } else {
        recursive_sum(-n)
    }
}

fn memoized_sum(n: i64, cache: &mut HashMap<i64, i64>) -> i64 {
    match cache.get(&n) {
        Some(total) => *total,
        None => {
            let total = if n > 0 {
                n + memoized_sum(n - 1, cache)
            } else if n == 0 {
                0
            } else {
                memoized_sum(-n, cache)
            };
            cache.insert(n, total);
            total
        }
    }
}

fn closed_form_sum(n: i64) -> i64 {
    if n > 0 {
        n * (n + 1) / 2
    } else if n == 0 {
        0
    } else {
        closed_form_sum(-n)
    }
}

/// A summation implementation. Every strategy honors the same contract as
/// [`sum`], including the un-negated reflection of negative inputs, so their
/// results can be compared against each other on any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Loop,
    Fold,
    Recursive,
    Memoized,
    ClosedForm,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Loop,
        Strategy::Fold,
        Strategy::Recursive,
        Strategy::Memoized,
        Strategy::ClosedForm,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Loop => "loop",
            Strategy::Fold => "fold",
            Strategy::Recursive => "recursive",
            Strategy::Memoized => "memoized",
            Strategy::ClosedForm => "closed-form",
        }
    }

    pub fn eval(self, n: i64) -> i64 {
        match self {
            Strategy::Loop => sum(n),
            Strategy::Fold => fold_sum(n),
            Strategy::Recursive => recursive_sum(n),
            Strategy::Memoized => {
                // Fresh cache per call; the timings cover the recursion, not
                // a warm lookup.
                let mut cache = HashMap::new();
                memoized_sum(n, &mut cache)
            }
            Strategy::ClosedForm => closed_form_sum(n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy '{0}'; expected one of loop, fold, recursive, memoized, closed-form")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "loop" => Ok(Strategy::Loop),
            "fold" => Ok(Strategy::Fold),
            "recursive" => Ok(Strategy::Recursive),
            "memoized" => Ok(Strategy::Memoized),
            "closed-form" => Ok(Strategy::ClosedForm),
            other => Err(ParseStrategyError(other.to_string())),
        }
    }
}
