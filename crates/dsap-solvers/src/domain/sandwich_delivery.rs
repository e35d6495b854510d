//! Maximum sandwiches deliverable
//!
//! Delivering on a day that follows a run of `r` consecutive delivery days
//! yields `min(orders[day], max_deliverable[r])` and extends the run;
//! resting yields nothing and resets the run to zero.
//!
//! Two consecutive rest days are never better than delivering on the
//! second of them, so after a rest (or at the start) the next day always
//! delivers, and the last day always delivers. With `best(day, r)` the most
//! sandwiches from `day` onwards given a run of `r` before it:
//!
//! ```text
//! best(last, r) = gain(last, r)
//! best(day, 0)  = gain(day, 0) + best(day + 1, 1)
//! best(day, r)  = max(gain(day, r) + best(day + 1, r + 1), best(day + 1, 0))
//! ```

use crate::domain::strategy::Strategy;
use log::trace;

/// Daily orders and the per-run-length delivery caps
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandwichContext {
    orders: Vec<i32>,
    max_deliverable: Vec<i32>,
}

impl SandwichContext {
    /// Returns `None` unless both sequences cover the same number of days
    pub fn new(orders: Vec<i32>, max_deliverable: Vec<i32>) -> Option<Self> {
        (orders.len() == max_deliverable.len()).then_some(Self {
            orders,
            max_deliverable,
        })
    }

    pub(crate) fn from_checked_parts(orders: Vec<i32>, max_deliverable: Vec<i32>) -> Self {
        debug_assert_eq!(orders.len(), max_deliverable.len());
        Self {
            orders,
            max_deliverable,
        }
    }

    pub fn days(&self) -> usize {
        self.orders.len()
    }

    pub fn orders(&self) -> &[i32] {
        &self.orders
    }

    /// Cap indexed by the length of the run preceding the day
    pub fn max_deliverable(&self) -> &[i32] {
        &self.max_deliverable
    }

    /// Sandwiches delivered on `day` after a run of `run` delivery days
    ///
    /// Runs longer than the cap table use its last entry.
    #[inline]
    fn gain(&self, day: usize, run: usize) -> i64 {
        let cap_index = run.min(self.max_deliverable.len().saturating_sub(1));
        i64::from(self.orders[day].min(self.max_deliverable[cap_index]))
    }
}

/// Most sandwiches deliverable over the whole horizon, using `strategy`
pub fn max_sandwiches(context: &SandwichContext, strategy: Strategy) -> i64 {
    match strategy {
        Strategy::Recursive => max_sandwiches_recursive(context),
        Strategy::Memoized => max_sandwiches_memoized(context),
        Strategy::Iterative => max_sandwiches_iterative(context),
    }
}

/// Naive recursion, two branches per day
pub fn max_sandwiches_recursive(context: &SandwichContext) -> i64 {
    best_from(context, 0, 0)
}

fn best_from(context: &SandwichContext, day: usize, run: usize) -> i64 {
    let days = context.days();
    if day >= days {
        return 0;
    }

    let gain = context.gain(day, run);
    if day + 1 == days {
        gain
    } else if run == 0 {
        gain + best_from(context, day + 1, 1)
    } else {
        let deliver = gain + best_from(context, day + 1, run + 1);
        let rest = best_from(context, day + 1, 0);
        deliver.max(rest)
    }
}

/// Top-down recursion caching `best(day, run)`
///
/// The run before `day` is at most `day`, so the cache is triangular.
pub fn max_sandwiches_memoized(context: &SandwichContext) -> i64 {
    let days = context.days();
    let mut memo: Vec<Vec<Option<i64>>> = (0..days).map(|day| vec![None; day + 1]).collect();
    let best = best_from_memoized(context, 0, 0, &mut memo);
    trace!(
        "memoized sandwiches: {} cached states",
        memo.iter().flatten().filter(|m| m.is_some()).count()
    );
    best
}

fn best_from_memoized(
    context: &SandwichContext,
    day: usize,
    run: usize,
    memo: &mut [Vec<Option<i64>>],
) -> i64 {
    let days = context.days();
    if day >= days {
        return 0;
    }
    if let Some(value) = memo[day][run] {
        return value;
    }

    let gain = context.gain(day, run);
    let value = if day + 1 == days {
        gain
    } else if run == 0 {
        gain + best_from_memoized(context, day + 1, 1, memo)
    } else {
        let deliver = gain + best_from_memoized(context, day + 1, run + 1, memo);
        let rest = best_from_memoized(context, day + 1, 0, memo);
        deliver.max(rest)
    };

    memo[day][run] = Some(value);
    value
}

/// Bottom-up from the last day, keeping one row of `best(day + 1, ·)`
pub fn max_sandwiches_iterative(context: &SandwichContext) -> i64 {
    let days = context.days();
    if days == 0 {
        return 0;
    }

    // next[r] = best(day + 1, r) for r in 0..=day + 1
    let mut next: Vec<i64> = (0..days).map(|run| context.gain(days - 1, run)).collect();

    for day in (0..days - 1).rev() {
        let rest = next[0];
        let row = (0..=day)
            .map(|run| {
                let gain = context.gain(day, run);
                if run == 0 {
                    gain + next[1]
                } else {
                    (gain + next[run + 1]).max(rest)
                }
            })
            .collect();
        next = row;
    }

    next[0]
}
