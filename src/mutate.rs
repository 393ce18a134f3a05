//! Insertion and removal with shifting of the tail.

use tracing::debug;

use crate::allocator::ByteAllocator;
use crate::buffer::ZVec;
use crate::error::ZVecError;
use crate::policy::{should_shrink, shrink_target};

impl<A: ByteAllocator> ZVec<A> {
    /// Inserts `count` elements at `index`, moving the elements from `index`
    /// onward `count` slots toward the end.
    ///
    /// The new elements are copied from `data`; with `None` the gap is
    /// zero-filled.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the new length overflows or the
    /// buffer cannot grow. The buffer is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `count * element_size` bytes.
    pub fn inject(
        &mut self,
        index: usize,
        data: Option<&[u8]>,
        count: usize,
        element_size: usize,
    ) -> Result<(), ZVecError> {
        debug_assert!(index <= self.length, "index {index} out of bounds");

        let new_length = self.length.checked_add(count).ok_or_else(|| {
            ZVecError::out_of_memory(self.length.saturating_add(count), element_size)
        })?;
        self.ensure(new_length, element_size)?;

        let start = index * element_size;
        let gap = count * element_size;
        self.storage
            .copy_within(start..self.length * element_size, start + gap);

        let hole = &mut self.storage[start..start + gap];
        match data {
            Some(data) => hole.copy_from_slice(&data[..gap]),
            None => hole.fill(0),
        }

        self.length = new_length;
        Ok(())
    }

    /// Inserts one element at `index`.
    ///
    /// # Errors
    ///
    /// See [`ZVec::inject`].
    pub fn insert(
        &mut self,
        index: usize,
        element: &[u8],
        element_size: usize,
    ) -> Result<(), ZVecError> {
        self.inject(index, Some(element), 1, element_size)
    }

    /// Adds one element at the end.
    ///
    /// # Errors
    ///
    /// See [`ZVec::inject`].
    pub fn append(&mut self, element: &[u8], element_size: usize) -> Result<(), ZVecError> {
        self.inject(self.length, Some(element), 1, element_size)
    }

    /// Adds `count` elements from `data` at the end.
    ///
    /// # Errors
    ///
    /// See [`ZVec::inject`].
    pub fn extend(
        &mut self,
        data: &[u8],
        count: usize,
        element_size: usize,
    ) -> Result<(), ZVecError> {
        self.inject(self.length, Some(data), count, element_size)
    }

    /// Removes `count` elements starting at `index`, moving the tail toward
    /// the front.
    ///
    /// Once less than half of the capacity is in use, the buffer is
    /// reallocated with a little headroom. If that reallocation fails the
    /// larger block is kept; removal itself never fails.
    pub fn excise(&mut self, index: usize, count: usize, element_size: usize) {
        debug_assert!(
            index + count <= self.length,
            "range {index}..{} out of bounds",
            index + count
        );

        let new_length = self.length - count;
        let start = index * element_size;
        self.storage.copy_within(
            start + count * element_size..self.length * element_size,
            start,
        );

        if should_shrink(new_length, self.capacity) {
            let target = shrink_target(new_length);
            if target < self.capacity {
                if let Err(err) = self.resize(target, element_size) {
                    debug!(%err, target, "keeping oversized buffer");
                }
            }
        }

        self.length = new_length;
    }

    /// Removes the element at `index`.
    pub fn remove(&mut self, index: usize, element_size: usize) {
        self.excise(index, 1, element_size);
    }

    /// Shortens the buffer to `length` elements. Does nothing if it is not
    /// longer than that.
    pub fn truncate(&mut self, length: usize, element_size: usize) {
        if length >= self.length {
            return;
        }
        self.excise(length, self.length - length, element_size);
    }

    /// Removes every element.
    pub fn clear(&mut self, element_size: usize) {
        self.truncate(0, element_size);
    }

    /// Removes the last element, copying it into `out` if given.
    ///
    /// Returns `false` if the buffer was empty.
    pub fn pull(&mut self, out: Option<&mut [u8]>, element_size: usize) -> bool {
        let Some(last) = self.length.checked_sub(1) else {
            return false;
        };
        if let Some(out) = out {
            self.get(last, out, element_size);
        }
        self.remove(last, element_size);
        true
    }

    /// Removes the first element, copying it into `out` if given.
    ///
    /// Returns `false` if the buffer was empty.
    pub fn shift(&mut self, out: Option<&mut [u8]>, element_size: usize) -> bool {
        if self.length == 0 {
            return false;
        }
        if let Some(out) = out {
            self.get(0, out, element_size);
        }
        self.remove(0, element_size);
        true
    }
}
