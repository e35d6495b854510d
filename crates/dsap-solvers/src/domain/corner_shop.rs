//! Maximum corner-shop profit
//!
//! Each day the shop finishes on exactly one of two items. Changing the
//! item from one day to the next costs `switch_cost`; the first day is
//! free. With `P(d, item)` the best profit over days `1..=d` ending on
//! `item`:
//!
//! ```text
//! P(0, *) = 0
//! P(d, A) = max(P(d-1, A), P(d-1, B) - switch_cost) + profit_a[d-1]
//! P(d, B) = max(P(d-1, B), P(d-1, A) - switch_cost) + profit_b[d-1]
//! ```

use crate::domain::strategy::Strategy;

/// The two stock items the shop can finish a day on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    A,
    B,
}

impl Item {
    fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Per-day profit forecast for both items plus the switch cost
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfitForecast {
    switch_cost: i32,
    profits_a: Vec<i32>,
    profits_b: Vec<i32>,
}

impl ProfitForecast {
    /// Returns `None` if the two forecasts cover a different number of days
    pub fn new(switch_cost: i32, profits_a: Vec<i32>, profits_b: Vec<i32>) -> Option<Self> {
        (profits_a.len() == profits_b.len()).then_some(Self {
            switch_cost,
            profits_a,
            profits_b,
        })
    }

    pub(crate) fn from_checked_parts(
        switch_cost: i32,
        profits_a: Vec<i32>,
        profits_b: Vec<i32>,
    ) -> Self {
        debug_assert_eq!(profits_a.len(), profits_b.len());
        Self {
            switch_cost,
            profits_a,
            profits_b,
        }
    }

    /// Number of forecast days
    pub fn days(&self) -> usize {
        self.profits_a.len()
    }

    pub fn switch_cost(&self) -> i32 {
        self.switch_cost
    }

    /// Daily profits for `item`
    pub fn profits(&self, item: Item) -> &[i32] {
        match item {
            Item::A => &self.profits_a,
            Item::B => &self.profits_b,
        }
    }
}

/// Maximum total profit over all days, using `strategy`
pub fn max_profit(forecast: &ProfitForecast, strategy: Strategy) -> i64 {
    match strategy {
        Strategy::Recursive => max_profit_recursive(forecast),
        Strategy::Memoized => max_profit_memoized(forecast),
        Strategy::Iterative => max_profit_iterative(forecast),
    }
}

/// Naive recursion over `P(d, item)`
pub fn max_profit_recursive(forecast: &ProfitForecast) -> i64 {
    let days = forecast.days();
    profit(forecast, days, Item::A).max(profit(forecast, days, Item::B))
}

fn profit(forecast: &ProfitForecast, days: usize, item: Item) -> i64 {
    if days == 0 {
        return 0;
    }
    let stay = profit(forecast, days - 1, item);
    let switch = profit(forecast, days - 1, item.other()) - i64::from(forecast.switch_cost);
    stay.max(switch) + i64::from(forecast.profits(item)[days - 1])
}

/// Top-down recursion caching `P(d, item)`
pub fn max_profit_memoized(forecast: &ProfitForecast) -> i64 {
    let days = forecast.days();
    let mut memo = vec![[None; 2]; days + 1];
    let a = profit_memoized(forecast, days, Item::A, &mut memo);
    let b = profit_memoized(forecast, days, Item::B, &mut memo);
    a.max(b)
}

fn profit_memoized(
    forecast: &ProfitForecast,
    days: usize,
    item: Item,
    memo: &mut [[Option<i64>; 2]],
) -> i64 {
    if days == 0 {
        return 0;
    }
    if let Some(value) = memo[days][item.index()] {
        return value;
    }

    let stay = profit_memoized(forecast, days - 1, item, memo);
    let switch =
        profit_memoized(forecast, days - 1, item.other(), memo) - i64::from(forecast.switch_cost);
    let value = stay.max(switch) + i64::from(forecast.profits(item)[days - 1]);
    memo[days][item.index()] = Some(value);
    value
}

/// Bottom-up: carries `(P(d, A), P(d, B))` forward one day at a time
pub fn max_profit_iterative(forecast: &ProfitForecast) -> i64 {
    let cost = i64::from(forecast.switch_cost);
    let (a, b) = forecast
        .profits_a
        .iter()
        .zip(&forecast.profits_b)
        .fold((0i64, 0i64), |(a, b), (&profit_a, &profit_b)| {
            (
                a.max(b - cost) + i64::from(profit_a),
                b.max(a - cost) + i64::from(profit_b),
            )
        });
    a.max(b)
}
