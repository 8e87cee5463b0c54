//! Tests for the dynamic programming problems
//!
//! These tests verify:
//! - Fibonacci values against known constants
//! - LCS length and witness validity
//! - Knapsack and coin-change optima

use algolab::dp::{fibonacci, knapsack_01, lcs, lcs_length, min_coins, KnapsackItem};
use algolab::AlgoError;

// =============================================================================
// Fibonacci Tests
// =============================================================================

#[test]
fn test_fibonacci_base_cases() {
    assert_eq!(fibonacci(0), 0);
    assert_eq!(fibonacci(1), 1);
    assert_eq!(fibonacci(2), 1);
}

#[test]
fn test_fibonacci_known_values() {
    assert_eq!(fibonacci(10), 55);
    assert_eq!(fibonacci(20), 6765);
    assert_eq!(fibonacci(50), 12_586_269_025);
    assert_eq!(fibonacci(90), 2_880_067_194_370_816_120);
}

#[test]
fn test_fibonacci_recurrence_holds() {
    for n in 2..40 {
        assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
    }
}

// =============================================================================
// Longest Common Subsequence Tests
// =============================================================================

/// True when `needle` is a subsequence of `haystack`
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|c| chars.any(|h| h == c))
}

#[test]
fn test_lcs_length_classic_example() {
    assert_eq!(lcs_length("ABCBDAB", "BDCABA"), 4);
}

#[test]
fn test_lcs_witness_is_a_valid_common_subsequence() {
    let witness = lcs("ABCBDAB", "BDCABA");
    assert_eq!(witness.chars().count(), 4);
    assert!(is_subsequence(&witness, "ABCBDAB"));
    assert!(is_subsequence(&witness, "BDCABA"));
}

#[test]
fn test_lcs_of_identical_strings() {
    assert_eq!(lcs("banana", "banana"), "banana");
    assert_eq!(lcs_length("banana", "banana"), 6);
}

#[test]
fn test_lcs_with_no_common_characters() {
    assert_eq!(lcs("abc", "xyz"), "");
    assert_eq!(lcs_length("abc", "xyz"), 0);
}

#[test]
fn test_lcs_with_empty_string() {
    assert_eq!(lcs("", "abc"), "");
    assert_eq!(lcs_length("abc", ""), 0);
}

// =============================================================================
// 0/1 Knapsack Tests
// =============================================================================

#[test]
fn test_knapsack_classic_example() {
    let items = [
        KnapsackItem { weight: 1, value: 1 },
        KnapsackItem { weight: 3, value: 4 },
        KnapsackItem { weight: 4, value: 5 },
        KnapsackItem { weight: 5, value: 7 },
    ];
    let result = knapsack_01(&items, 7);

    assert_eq!(result.best_value, 9);
    assert_eq!(result.chosen, vec![1, 2]);
}

#[test]
fn test_knapsack_chosen_items_fit_and_account_for_value() {
    let items = [
        KnapsackItem { weight: 2, value: 3 },
        KnapsackItem { weight: 3, value: 4 },
        KnapsackItem { weight: 4, value: 5 },
        KnapsackItem { weight: 5, value: 6 },
    ];
    let capacity = 5;
    let result = knapsack_01(&items, capacity);

    let total_weight: usize = result.chosen.iter().map(|&i| items[i].weight).sum();
    let total_value: u64 = result.chosen.iter().map(|&i| items[i].value).sum();
    assert!(total_weight <= capacity);
    assert_eq!(total_value, result.best_value);
    assert_eq!(result.best_value, 7);
}

#[test]
fn test_knapsack_zero_capacity() {
    let items = [KnapsackItem { weight: 1, value: 10 }];
    let result = knapsack_01(&items, 0);

    assert_eq!(result.best_value, 0);
    assert!(result.chosen.is_empty());
}

#[test]
fn test_knapsack_no_items() {
    let result = knapsack_01(&[], 10);
    assert_eq!(result.best_value, 0);
    assert!(result.chosen.is_empty());
}

// =============================================================================
// Coin Change Tests
// =============================================================================

#[test]
fn test_min_coins_classic_example() {
    let coins = min_coins(&[1, 2, 5], 11).unwrap().unwrap();
    assert_eq!(coins.len(), 3);
    assert_eq!(coins.iter().sum::<usize>(), 11);
}

#[test]
fn test_min_coins_beats_greedy_system() {
    // greedy would take 4+1+1 on this non-canonical system; optimal is 3+3
    let coins = min_coins(&[1, 3, 4], 6).unwrap().unwrap();
    assert_eq!(coins, vec![3, 3]);
}

#[test]
fn test_min_coins_unmakeable_amount() {
    assert_eq!(min_coins(&[2], 3).unwrap(), None);
}

#[test]
fn test_min_coins_zero_amount() {
    assert_eq!(min_coins(&[1, 5], 0).unwrap(), Some(Vec::new()));
}

#[test]
fn test_min_coins_empty_coin_list_is_error() {
    assert!(matches!(
        min_coins(&[], 5),
        Err(AlgoError::InvalidInput(_))
    ));
}

#[test]
fn test_min_coins_zero_denomination_is_error() {
    assert!(matches!(
        min_coins(&[0, 1], 5),
        Err(AlgoError::InvalidInput(_))
    ));
}
