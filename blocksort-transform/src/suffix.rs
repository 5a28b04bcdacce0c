//! Circular suffix array.
//!
//! The circular suffix array of a block of length n is the permutation of
//! `0..n` that lists the starting offsets of its n cyclic rotations in
//! lexicographic order. Rotations are compared byte by byte with wraparound.
//!
//! Sorting uses three-way radix quicksort: a range of rotations is partitioned
//! on the byte at the current depth into less, equal and greater sub-ranges.
//! The less and greater ranges are sorted again at the same depth, the equal
//! range at the next depth. A range is finished once it holds a single
//! rotation or all n bytes have been compared; rotations still tied at that
//! point are identical and keep their deterministic partition order.
//!
//! Pending ranges live on an explicit stack instead of the call stack, so
//! highly repetitive input (where ties push the depth towards n) cannot
//! overflow it. Pending ranges are disjoint and hold at least two rotations
//! each, which bounds the stack to n / 2 entries.

use blocksort_core::error::{BlocksortError, Result};
use std::cmp::Ordering;
use tracing::trace;

/// A range `lo..hi` of the suffix array, already sorted on the first `depth`
/// bytes of every rotation it holds.
#[derive(Debug, Clone, Copy)]
struct Range {
    lo: usize,
    hi: usize,
    depth: usize,
}

/// Sorted cyclic rotations of a byte block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    /// Starting offset of the i-th smallest rotation.
    offsets: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the cyclic rotations of `text`.
    pub fn new(text: &[u8]) -> Self {
        let mut offsets: Vec<usize> = (0..text.len()).collect();
        if text.len() > 1 {
            sort_rotations(text, &mut offsets);
        }
        Self { offsets }
    }

    /// Length of the block (and of the permutation).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the block was empty.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Starting offset of the `i`-th smallest rotation.
    ///
    /// Fails with `InvalidArgument` if `i` is outside `[0, len)`.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.offsets
            .get(i)
            .copied()
            .ok_or_else(|| BlocksortError::index_out_of_range("suffix index", i, self.len()))
    }

    /// The full permutation, in sorted order.
    pub fn as_slice(&self) -> &[usize] {
        &self.offsets
    }

    /// Iterate over rotation offsets in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    /// Consume the array and return the permutation.
    pub fn into_vec(self) -> Vec<usize> {
        self.offsets
    }
}

/// Byte `depth` positions into the rotation starting at `offset`.
///
/// Both `offset` and `depth` are below `text.len()`.
#[inline]
fn byte_at(text: &[u8], offset: usize, depth: usize) -> u8 {
    let pos = offset + depth;
    if pos >= text.len() {
        text[pos - text.len()]
    } else {
        text[pos]
    }
}

fn sort_rotations(text: &[u8], offsets: &mut [usize]) {
    let n = text.len();
    let mut stack = Vec::new();
    let mut max_pending = 0;

    let push = |stack: &mut Vec<Range>, range: Range| {
        if range.hi - range.lo > 1 && range.depth < n {
            stack.push(range);
        }
    };

    push(&mut stack, Range { lo: 0, hi: n, depth: 0 });

    while let Some(Range { lo, hi, depth }) = stack.pop() {
        let pivot = byte_at(text, offsets[lo], depth);

        // offsets[lo..lt] < pivot, offsets[lt..i] == pivot, offsets[gt..hi] > pivot
        let mut lt = lo;
        let mut i = lo + 1;
        let mut gt = hi;
        while i < gt {
            match byte_at(text, offsets[i], depth).cmp(&pivot) {
                Ordering::Less => {
                    offsets.swap(lt, i);
                    lt += 1;
                    i += 1;
                }
                Ordering::Greater => {
                    gt -= 1;
                    offsets.swap(i, gt);
                }
                Ordering::Equal => i += 1,
            }
        }

        push(&mut stack, Range { lo: gt, hi, depth });
        push(
            &mut stack,
            Range {
                lo: lt,
                hi: gt,
                depth: depth + 1,
            },
        );
        push(&mut stack, Range { lo, hi: lt, depth });
        max_pending = max_pending.max(stack.len());
    }

    trace!(len = n, max_pending, "sorted circular suffixes");
}
