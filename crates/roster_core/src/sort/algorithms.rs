//! Classic comparison sorts over slices.
//!
//! Every function copies its input and returns the sorted copy, ordering
//! ascending by `compare`.

use std::cmp::Ordering;

/// Adjacent-swap passes; stops after a pass without swaps.
pub fn bubble_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    let len = sorted.len();
    for pass in 0..len {
        let mut swapped = false;
        for index in 0..len - pass - 1 {
            if compare(&sorted[index], &sorted[index + 1]) == Ordering::Greater {
                sorted.swap(index, index + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    sorted
}

/// Grows a sorted prefix, shifting larger elements one slot right to open
/// the insertion point.
pub fn insertion_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    for current in 1..sorted.len() {
        let mut slot = current;
        while slot > 0 && compare(&sorted[slot - 1], &sorted[current]) == Ordering::Greater {
            slot -= 1;
        }
        sorted[slot..=current].rotate_right(1);
    }
    sorted
}

/// Swaps the minimum of the unsorted suffix into place. Not stable.
pub fn selection_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    let len = sorted.len();
    for start in 0..len {
        let mut min_index = start;
        for candidate in start + 1..len {
            if compare(&sorted[candidate], &sorted[min_index]) == Ordering::Less {
                min_index = candidate;
            }
        }
        sorted.swap(start, min_index);
    }
    sorted
}

/// Top-down merge sort. Ties take from the left run, which keeps it stable.
pub fn merge_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    merge_sort_slice(items, &compare)
}

fn merge_sort_slice<T, F>(items: &[T], compare: &F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    let left = merge_sort_slice(left, compare);
    let right = merge_sort_slice(right, compare);

    let mut merged = Vec::with_capacity(items.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

/// Gapped insertion sort with gaps `n/2, n/4, ..., 1`. Not stable.
pub fn shell_sort<T, F>(items: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = items.to_vec();
    let mut gap = sorted.len() / 2;
    while gap > 0 {
        for current in gap..sorted.len() {
            let mut slot = current;
            while slot >= gap && compare(&sorted[slot - gap], &sorted[slot]) == Ordering::Greater {
                sorted.swap(slot - gap, slot);
                slot -= gap;
            }
        }
        gap /= 2;
    }
    sorted
}
