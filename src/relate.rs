//! Comparison, searching and reordering of elements.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::allocator::ByteAllocator;
use crate::buffer::ZVec;

impl<A: ByteAllocator> ZVec<A> {
    fn slot_bytes(&self, index: usize, element_size: usize) -> &[u8] {
        &self.storage[Self::slot(index, element_size)]
    }

    /// Whether both buffers hold the same elements, byte for byte.
    #[must_use]
    pub fn equals<B: ByteAllocator>(&self, other: &ZVec<B>, element_size: usize) -> bool {
        self.length == other.length && self.as_bytes(element_size) == other.as_bytes(element_size)
    }

    #[must_use]
    pub fn not_equals<B: ByteAllocator>(&self, other: &ZVec<B>, element_size: usize) -> bool {
        !self.equals(other, element_size)
    }

    /// Whether both buffers hold pairwise equal elements according to `eq`.
    ///
    /// Stops at the first mismatch.
    pub fn equals_by<B, F>(&self, other: &ZVec<B>, element_size: usize, eq: F) -> bool
    where
        B: ByteAllocator,
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        self.equals_across(element_size, other, element_size, eq)
    }

    pub fn not_equals_by<B, F>(&self, other: &ZVec<B>, element_size: usize, eq: F) -> bool
    where
        B: ByteAllocator,
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        !self.equals_by(other, element_size, eq)
    }

    /// Like [`ZVec::equals_by`] for buffers whose element sizes differ.
    pub fn equals_across<B, F>(
        &self,
        element_size: usize,
        other: &ZVec<B>,
        other_element_size: usize,
        mut eq: F,
    ) -> bool
    where
        B: ByteAllocator,
        F: FnMut(&[u8], &[u8]) -> bool,
    {
        if self.length != other.length {
            return false;
        }
        (0..self.length).all(|i| {
            eq(
                self.slot_bytes(i, element_size),
                other.slot_bytes(i, other_element_size),
            )
        })
    }

    /// Index of the first element matching `predicate`.
    pub fn find<F>(&self, element_size: usize, predicate: F) -> Option<usize>
    where
        F: FnMut(&[u8]) -> bool,
    {
        self.find_next(0, element_size, predicate)
    }

    /// Index of the first element at or after `start` matching `predicate`.
    pub fn find_next<F>(&self, start: usize, element_size: usize, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&[u8]) -> bool,
    {
        (start..self.length).find(|&i| predicate(self.slot_bytes(i, element_size)))
    }

    /// Index of the last element before `end` matching `predicate`.
    pub fn find_last<F>(&self, end: usize, element_size: usize, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&[u8]) -> bool,
    {
        (0..end.min(self.length))
            .rev()
            .find(|&i| predicate(self.slot_bytes(i, element_size)))
    }

    /// Binary search for the first element for which `compare` is `Equal`.
    ///
    /// `compare` orders an element relative to the target. The buffer must be
    /// partitioned by it: every `Less` element before every `Equal` one,
    /// and those before every `Greater` one.
    pub fn search<F>(&self, element_size: usize, mut compare: F) -> Option<usize>
    where
        F: FnMut(&[u8]) -> Ordering,
    {
        let mut low = 0;
        let mut high = self.length;

        while low < high {
            let mid = low + (high - low) / 2;
            match compare(self.slot_bytes(mid, element_size)) {
                Ordering::Less => low = mid + 1,
                Ordering::Greater => high = mid,
                Ordering::Equal => {
                    let mut first = mid;
                    while first > 0
                        && compare(self.slot_bytes(first - 1, element_size)) == Ordering::Equal
                    {
                        first -= 1;
                    }
                    return Some(first);
                }
            }
        }

        None
    }

    /// Sorts the elements with `compare`. The sort is stable.
    ///
    /// Sorting takes temporary memory for `len()` element references and a
    /// copy of the live bytes. It comes from the global heap, not from the
    /// buffer's allocator, and like any `Vec` growth it aborts if the heap
    /// is exhausted.
    pub fn sort_by<F>(&mut self, element_size: usize, mut compare: F)
    where
        F: FnMut(&[u8], &[u8]) -> Ordering,
    {
        if element_size == 0 || self.length < 2 {
            return;
        }

        let sorted = {
            let mut elements: Vec<&[u8]> = self
                .as_bytes(element_size)
                .chunks_exact(element_size)
                .collect();
            elements.sort_by(|a, b| compare(*a, *b));
            elements.concat()
        };
        self.as_bytes_mut(element_size).copy_from_slice(&sorted);
    }

    /// Exchanges the elements at `i` and `j`.
    pub fn swap(&mut self, i: usize, j: usize, element_size: usize) {
        if i == j {
            return;
        }
        let (low, high) = (i.min(j), i.max(j));
        let (head, tail) = self.storage.split_at_mut(high * element_size);
        head[Self::slot(low, element_size)].swap_with_slice(&mut tail[..element_size]);
    }

    /// Moves the element at `source` to `target`, shifting the elements in
    /// between by one slot. The order of all other elements is kept.
    pub fn move_element(&mut self, target: usize, source: usize, element_size: usize) {
        if target < source {
            for i in (target..source).rev() {
                self.swap(i, i + 1, element_size);
            }
        } else {
            for i in source..target {
                self.swap(i, i + 1, element_size);
            }
        }
    }
}
