//! Greedy Module
//!
//! Three classic greedy algorithms. Each makes the locally best choice at
//! every step; the doc of each function states when that is globally
//! optimal.

use crate::error::{AlgoError, Result};

/// An activity with a start and finish time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub start: u64,
    pub finish: u64,
}

/// Largest set of mutually non-overlapping activities
///
/// O(n log n). Greedy by earliest finish time, which is optimal for this
/// problem. Returns the indices of the selected activities in selection
/// order. Activities where `start > finish` are invalid.
pub fn activity_selection(activities: &[Activity]) -> Result<Vec<usize>> {
    for activity in activities {
        if activity.start > activity.finish {
            return Err(AlgoError::InvalidInput(format!(
                "activity starts at {} after finishing at {}",
                activity.start, activity.finish
            )));
        }
    }

    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);

    let mut selected = Vec::new();
    let mut last_finish: Option<u64> = None;
    for i in order {
        let activity = activities[i];
        if last_finish.map_or(true, |finish| activity.start >= finish) {
            selected.push(i);
            last_finish = Some(activity.finish);
        }
    }
    Ok(selected)
}

/// An item divisible into fractions for the fractional knapsack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionalItem {
    pub weight: f64,
    pub value: f64,
}

/// Outcome of the fractional knapsack
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalResult {
    /// Total value packed
    pub total_value: f64,
    /// Fraction of each input item taken, in input order (0.0 to 1.0)
    pub fractions: Vec<f64>,
}

/// Fractional knapsack: pack by value density until capacity runs out
///
/// O(n log n). Greedy by value-per-weight is optimal because items are
/// divisible. Weights must be positive and values non-negative.
pub fn fractional_knapsack(items: &[FractionalItem], capacity: f64) -> Result<FractionalResult> {
    if capacity < 0.0 {
        return Err(AlgoError::InvalidInput(format!(
            "capacity must be non-negative, got {}",
            capacity
        )));
    }
    for item in items {
        if item.weight <= 0.0 || item.value < 0.0 {
            return Err(AlgoError::InvalidInput(format!(
                "item must have positive weight and non-negative value, got {:?}",
                item
            )));
        }
    }

    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        let density_a = items[a].value / items[a].weight;
        let density_b = items[b].value / items[b].weight;
        density_b.total_cmp(&density_a)
    });

    let mut fractions = vec![0.0; items.len()];
    let mut total_value = 0.0;
    let mut remaining = capacity;

    for i in order {
        if remaining <= 0.0 {
            break;
        }
        let item = items[i];
        let taken_weight = item.weight.min(remaining);
        let fraction = taken_weight / item.weight;
        fractions[i] = fraction;
        total_value += item.value * fraction;
        remaining -= taken_weight;
    }

    Ok(FractionalResult {
        total_value,
        fractions,
    })
}

/// Coin change by always taking the largest denomination that still fits
///
/// O(n log n). Optimal only for canonical coin systems (e.g. 25/10/5/1);
/// returns `None` when the greedy choice dead-ends short of `amount`.
pub fn coin_change_greedy(coins: &[usize], amount: usize) -> Option<Vec<usize>> {
    let mut denominations: Vec<usize> = coins.iter().copied().filter(|&coin| coin > 0).collect();
    denominations.sort_unstable_by(|a, b| b.cmp(a));

    let mut used = Vec::new();
    let mut remaining = amount;
    for coin in denominations {
        while coin <= remaining {
            used.push(coin);
            remaining -= coin;
        }
    }

    if remaining == 0 {
        Some(used)
    } else {
        None
    }
}
