//! Comparator-driven in-place quicksort.
//!
//! Model
//! - Recursive Hoare partition-exchange over an inclusive `[left, right]` range.
//! - Pivot is the element at the truncated midpoint `(left + right) / 2`.
//! - Two cursors skip elements already on the correct side of the pivot, swap
//!   when they meet or cross, then step inward.
//!
//! Properties
//! - Not stable. No worst-case guarantee: adversarial inputs degrade to O(n²)
//!   comparisons and O(n) recursion depth.
//! - The pivot is tracked by position through swaps, so elements need no
//!   `Clone` bound.
//! - Cursor scans are bounds-guarded and every recursive range is strictly
//!   smaller than its parent. An inconsistent comparator therefore yields an
//!   unspecified order but never panics or loops.

use std::cmp::Ordering;
use std::marker::PhantomData;

use tracing::trace;

/// Ascending order from the native comparison operators.
///
/// Returns `Equal` if `a == b`, `Less` if `a < b`, and `Greater` otherwise
/// (including incomparable pairs such as NaN).
#[inline]
pub fn ascending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Descending order: the exact inverse of [`ascending`] except for equal
/// pairs, which both map to `Equal`.
#[inline]
pub fn descending<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a == b {
        Ordering::Equal
    } else if a < b {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Comparator signature used by the prebuilt orders.
pub type Comparator<T> = fn(&T, &T) -> Ordering;

/// Quicksort bound to one comparator.
pub struct QuickSort<T, F = Comparator<T>> {
    compare: F,
    _elem: PhantomData<fn(&T)>,
}

impl<T: PartialOrd> QuickSort<T> {
    pub fn ascending() -> Self {
        Self::new(ascending::<T>)
    }

    pub fn descending() -> Self {
        Self::new(descending::<T>)
    }
}

impl<T: PartialOrd> Default for QuickSort<T> {
    fn default() -> Self {
        Self::ascending()
    }
}

impl<T, F> QuickSort<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            compare,
            _elem: PhantomData,
        }
    }

    /// Sort `arr` in place into comparator order.
    pub fn sort(&self, arr: &mut [T]) {
        if arr.len() < 2 {
            return;
        }
        self.sort_range(arr, 0, arr.len() as isize - 1);
    }

    fn sort_range(&self, arr: &mut [T], left: isize, right: isize) {
        let mut i = left;
        let mut j = right;
        // left and right are non-negative, so integer division truncates.
        let mut pivot = (left + right) / 2;
        trace!(left, right, pivot, "partition");

        while i <= j {
            while i <= right && self.cmp_at(arr, i, pivot) == Ordering::Less {
                i += 1;
            }
            while j >= left && self.cmp_at(arr, j, pivot) == Ordering::Greater {
                j -= 1;
            }
            if i <= j {
                arr.swap(i as usize, j as usize);
                if pivot == i {
                    pivot = j;
                } else if pivot == j {
                    pivot = i;
                }
                i += 1;
                j -= 1;
            }
        }

        if left < j && j < right {
            self.sort_range(arr, left, j);
        }
        if i < right && i > left {
            self.sort_range(arr, i, right);
        }
    }

    #[inline]
    fn cmp_at(&self, arr: &[T], a: isize, b: isize) -> Ordering {
        (self.compare)(&arr[a as usize], &arr[b as usize])
    }
}

/// Sort ascending with [`QuickSort`].
pub fn quick_sort<T: PartialOrd>(arr: &mut [T]) {
    QuickSort::ascending().sort(arr);
}

/// Sort with [`QuickSort`] and a custom comparator.
pub fn quick_sort_by<T, F>(arr: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    QuickSort::new(compare).sort(arr);
}
