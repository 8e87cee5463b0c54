//! Backtracking Module
//!
//! Exhaustive search with pruning: place a candidate, recurse, undo. Three
//! classic exercises: N-Queens, permutations, and subsets.

/// All solutions to the N-Queens puzzle
///
/// Each solution is a vector of column positions, one per row. Rows are
/// filled top to bottom; a column is viable when no earlier queen shares
/// its column or either diagonal.
pub fn n_queens(n: usize) -> Vec<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut placement = Vec::with_capacity(n);
    place_queen(n, &mut placement, &mut solutions);
    solutions
}

fn place_queen(n: usize, placement: &mut Vec<usize>, solutions: &mut Vec<Vec<usize>>) {
    let row = placement.len();
    if row == n {
        solutions.push(placement.clone());
        return;
    }

    for col in 0..n {
        let attacked = placement.iter().enumerate().any(|(prev_row, &prev_col)| {
            prev_col == col || prev_row.abs_diff(row) == prev_col.abs_diff(col)
        });
        if attacked {
            continue;
        }
        placement.push(col);
        place_queen(n, placement, solutions);
        placement.pop();
    }
}

/// All orderings of the input items
///
/// n! results in lexicographic position order: permutations starting with
/// the first item come first.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut used = vec![false; items.len()];
    let mut current = Vec::with_capacity(items.len());
    permute(items, &mut used, &mut current, &mut out);
    out
}

fn permute<T: Clone>(
    items: &[T],
    used: &mut Vec<bool>,
    current: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if current.len() == items.len() {
        out.push(current.clone());
        return;
    }

    for i in 0..items.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(items[i].clone());
        permute(items, used, current, out);
        current.pop();
        used[i] = false;
    }
}

/// The power set of the input items
///
/// 2^n results. For each item in turn the subset either excludes or
/// includes it, so the empty set comes first and the full set last.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    collect_subsets(items, 0, &mut current, &mut out);
    out
}

fn collect_subsets<T: Clone>(
    items: &[T],
    index: usize,
    current: &mut Vec<T>,
    out: &mut Vec<Vec<T>>,
) {
    if index == items.len() {
        out.push(current.clone());
        return;
    }

    collect_subsets(items, index + 1, current, out);
    current.push(items[index].clone());
    collect_subsets(items, index + 1, current, out);
    current.pop();
}
