use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use tracing::{debug, trace};

use crate::allocator::{ByteAllocator, Global};
use crate::error::ZVecError;
use crate::layout::storage_bytes;
use crate::policy::grow_target;

/// A growable buffer of fixed-size elements whose size is given on every call
pub struct ZVec<A: ByteAllocator = Global> {
    pub(crate) storage: Vec<u8>,
    pub(crate) capacity: usize,
    pub(crate) length: usize,
    pub(crate) alloc: A,
}

impl ZVec<Global> {
    /// Creates an empty `ZVec` on the global heap. Nothing is allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates a `ZVec` holding the first `count` elements of `data`.
    ///
    /// The capacity equals `count`.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the size computation overflows or
    /// the allocation fails.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `count * element_size` bytes.
    pub fn import(data: &[u8], count: usize, element_size: usize) -> Result<Self, ZVecError> {
        Self::import_in(data, count, element_size, Global)
    }

    /// Creates an empty `ZVec` able to hold `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the size computation overflows or
    /// the allocation fails.
    pub fn with_capacity(capacity: usize, element_size: usize) -> Result<Self, ZVecError> {
        Self::with_capacity_in(capacity, element_size, Global)
    }

    /// Creates a `ZVec` holding the first `count` elements of `data`, with
    /// room to grow.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if not even `count` elements fit.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `count * element_size` bytes.
    pub fn with_headroom(
        data: &[u8],
        count: usize,
        element_size: usize,
    ) -> Result<Self, ZVecError> {
        Self::with_headroom_in(data, count, element_size, Global)
    }
}

impl Default for ZVec<Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ByteAllocator> ZVec<A> {
    /// Creates an empty `ZVec` that allocates from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self {
            storage: Vec::new(),
            capacity: 0,
            length: 0,
            alloc,
        }
    }

    /// Like [`ZVec::import`], allocating from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the size computation overflows or
    /// the allocation fails.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `count * element_size` bytes.
    pub fn import_in(
        data: &[u8],
        count: usize,
        element_size: usize,
        alloc: A,
    ) -> Result<Self, ZVecError> {
        let bytes = storage_bytes(count, element_size)?;
        let mut storage = alloc
            .allocate(bytes)
            .map_err(|_| ZVecError::out_of_memory(count, element_size))?;
        storage.copy_from_slice(&data[..bytes]);

        Ok(Self {
            storage,
            capacity: count,
            length: count,
            alloc,
        })
    }

    /// Like [`ZVec::with_capacity`], allocating from `alloc`.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the size computation overflows or
    /// the allocation fails.
    pub fn with_capacity_in(
        capacity: usize,
        element_size: usize,
        alloc: A,
    ) -> Result<Self, ZVecError> {
        let bytes = storage_bytes(capacity, element_size)?;
        let storage = alloc
            .allocate(bytes)
            .map_err(|_| ZVecError::out_of_memory(capacity, element_size))?;

        Ok(Self {
            storage,
            capacity,
            length: 0,
            alloc,
        })
    }

    /// Like [`ZVec::with_headroom`], allocating from `alloc`.
    ///
    /// The capacity is the growth target for `count`. If that target
    /// overflows or cannot be allocated, the capacity is exactly `count`.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if not even `count` elements fit.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `count * element_size` bytes.
    pub fn with_headroom_in(
        data: &[u8],
        count: usize,
        element_size: usize,
        alloc: A,
    ) -> Result<Self, ZVecError> {
        let roomy = grow_target(count).and_then(|target| {
            let bytes = storage_bytes(target, element_size).ok()?;
            let block = alloc.allocate(bytes).ok()?;
            Some((block, target))
        });

        let (mut storage, capacity) = match roomy {
            Some(found) => found,
            None => {
                debug!(
                    count,
                    element_size,
                    "no headroom available, allocating exact fit"
                );
                let bytes = storage_bytes(count, element_size)?;
                let block = alloc
                    .allocate(bytes)
                    .map_err(|_| ZVecError::out_of_memory(count, element_size))?;
                (block, count)
            }
        };

        let used = count * element_size;
        storage[..used].copy_from_slice(&data[..used]);

        Ok(Self {
            storage,
            capacity,
            length: count,
            alloc,
        })
    }

    /// Returns an independent copy of the buffer.
    ///
    /// The copy keeps the source's capacity when that much memory is
    /// available. Otherwise it is sized to the source's length; when the two
    /// are equal there is nothing smaller to retry with and the copy fails.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if no suitable allocation succeeds.
    pub fn duplicate(&self, element_size: usize) -> Result<Self, ZVecError>
    where
        A: Clone,
    {
        let alloc = self.alloc.clone();

        let full = storage_bytes(self.capacity, element_size)
            .ok()
            .and_then(|bytes| alloc.allocate(bytes).ok());

        let (mut storage, capacity) = match full {
            Some(block) => (block, self.capacity),
            None if self.length == self.capacity => {
                return Err(ZVecError::out_of_memory(self.capacity, element_size));
            }
            None => {
                debug!(
                    capacity = self.capacity,
                    length = self.length,
                    "duplicating without headroom"
                );
                let bytes = storage_bytes(self.length, element_size)?;
                let block = alloc
                    .allocate(bytes)
                    .map_err(|_| ZVecError::out_of_memory(self.length, element_size))?;
                (block, self.length)
            }
        };

        let used = self.length * element_size;
        storage[..used].copy_from_slice(&self.storage[..used]);

        Ok(Self {
            storage,
            capacity,
            length: self.length,
            alloc,
        })
    }

    /// Frees the buffer. Equivalent to dropping it.
    pub fn release(self) {
        drop(self);
    }

    /// Returns the allocator backing this buffer.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Number of elements the buffer holds without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The bytes of the live elements.
    #[must_use]
    pub fn as_bytes(&self, element_size: usize) -> &[u8] {
        &self.storage[..self.length * element_size]
    }

    pub fn as_bytes_mut(&mut self, element_size: usize) -> &mut [u8] {
        &mut self.storage[..self.length * element_size]
    }

    pub(crate) fn slot(index: usize, element_size: usize) -> Range<usize> {
        let start = index * element_size;
        start..start + element_size
    }

    /// Address of the element at `index`.
    ///
    /// Valid for `index` up to and including `len()`; the one-past-the-end
    /// address is useful for boundary arithmetic but must not be read.
    #[must_use]
    pub fn address_of(&self, index: usize, element_size: usize) -> *const u8 {
        self.storage.as_ptr().wrapping_add(index * element_size)
    }

    /// Index of the element starting at `address`. Inverse of [`ZVec::address_of`].
    ///
    /// The result is meaningless unless `address` is an element boundary
    /// inside this buffer.
    ///
    /// # Panics
    ///
    /// Panics if `element_size` is zero.
    #[must_use]
    pub fn index_of(&self, address: *const u8, element_size: usize) -> usize {
        (address as usize).wrapping_sub(self.storage.as_ptr() as usize) / element_size
    }

    /// Bytes of the element at `index`, or `None` past the end.
    #[must_use]
    pub fn element(&self, index: usize, element_size: usize) -> Option<&[u8]> {
        if index >= self.length {
            return None;
        }
        self.storage.get(Self::slot(index, element_size))
    }

    pub fn element_mut(&mut self, index: usize, element_size: usize) -> Option<&mut [u8]> {
        if index >= self.length {
            return None;
        }
        self.storage.get_mut(Self::slot(index, element_size))
    }

    /// Copies the element at `index` into the first `element_size` bytes of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is too short or `index` is outside the storage.
    pub fn get(&self, index: usize, out: &mut [u8], element_size: usize) {
        debug_assert!(index < self.length, "index {index} out of bounds");
        out[..element_size].copy_from_slice(&self.storage[Self::slot(index, element_size)]);
    }

    /// Overwrites the element at `index` with the first `element_size` bytes
    /// of `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is too short or `index` is outside the storage.
    pub fn set(&mut self, index: usize, element: &[u8], element_size: usize) {
        debug_assert!(index < self.length, "index {index} out of bounds");
        self.storage[Self::slot(index, element_size)].copy_from_slice(&element[..element_size]);
    }

    /// Overwrites the element at `target` with the element at `source`.
    pub fn assign(&mut self, target: usize, source: usize, element_size: usize) {
        if target == source {
            return;
        }
        self.storage
            .copy_within(Self::slot(source, element_size), target * element_size);
    }

    /// Reallocates to hold exactly `capacity` elements.
    ///
    /// Elements beyond the new capacity are dropped from the length.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the size computation overflows or
    /// the allocator fails, in which case the buffer is unchanged. This can
    /// happen even when shrinking.
    pub fn resize(&mut self, capacity: usize, element_size: usize) -> Result<(), ZVecError> {
        let bytes = storage_bytes(capacity, element_size)?;
        self.alloc
            .reallocate(&mut self.storage, bytes)
            .map_err(|_| ZVecError::out_of_memory(capacity, element_size))?;

        trace!(
            from = self.capacity,
            to = capacity,
            element_size,
            "resized buffer"
        );
        self.capacity = capacity;
        self.length = self.length.min(capacity);
        Ok(())
    }

    /// Reduces the capacity to the length.
    ///
    /// If the allocator cannot shrink the block, the buffer stays as it was.
    pub fn shrink(&mut self, element_size: usize) {
        if self.capacity == self.length {
            return;
        }
        if let Err(err) = self.resize(self.length, element_size) {
            debug!(%err, "shrink skipped");
        }
    }

    /// Makes room for at least `min_len` elements.
    ///
    /// Grows to the headroom target first and settles for exactly `min_len`
    /// if that fails.
    ///
    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if not even `min_len` elements fit.
    /// The buffer is unchanged.
    pub fn ensure(&mut self, min_len: usize, element_size: usize) -> Result<(), ZVecError> {
        if self.capacity >= min_len {
            return Ok(());
        }

        if let Some(target) = grow_target(min_len) {
            match self.resize(target, element_size) {
                Ok(()) => return Ok(()),
                Err(err) => debug!(%err, min_len, "headroom unavailable, trying exact fit"),
            }
        }

        self.resize(min_len, element_size)
    }
}

impl<A: ByteAllocator> fmt::Debug for ZVec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZVec")
            .field(
                "utilization",
                &format_args!("{}/{}", self.length, self.capacity),
            )
            .finish()
    }
}
