use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;

use crate::allocator::{ByteAllocator, Global};
use crate::buffer::ZVec;
use crate::error::ZVecError;

/// A value with a fixed-size byte representation
pub trait Element: Copy {
    /// Number of bytes in the representation.
    const SIZE: usize;

    /// Writes the value into `out`, which is exactly `SIZE` bytes long.
    fn write_bytes(&self, out: &mut [u8]);

    /// Reads a value back from exactly `SIZE` bytes.
    fn read_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const SIZE: usize = core::mem::size_of::<$t>();

                fn write_bytes(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_bytes(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(raw)
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: Element, const N: usize> Element for [T; N] {
    const SIZE: usize = T::SIZE * N;

    fn write_bytes(&self, out: &mut [u8]) {
        for (i, value) in self.iter().enumerate() {
            value.write_bytes(&mut out[i * T::SIZE..(i + 1) * T::SIZE]);
        }
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        core::array::from_fn(|i| T::read_bytes(&bytes[i * T::SIZE..(i + 1) * T::SIZE]))
    }
}

/// A `ZVec` whose element size comes from `T`
///
/// Values are written straight into the buffer's storage, so every
/// allocation goes through the buffer's `ByteAllocator`.
///
/// Element types must occupy at least one byte:
///
/// ```compile_fail
/// let vector: zvec::Vector<[u8; 0]> = zvec::Vector::new();
/// ```
pub struct Vector<T: Element, A: ByteAllocator = Global> {
    raw: ZVec<A>,
    _marker: PhantomData<T>,
}

impl<T: Element> Vector<T, Global> {
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(ZVec::new())
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the allocation fails.
    pub fn from_slice(values: &[T]) -> Result<Self, ZVecError> {
        let mut vector = Self::with_capacity(values.len())?;
        vector.extend_from_slice(values)?;
        Ok(vector)
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self, ZVecError> {
        ZVec::with_capacity(capacity, T::SIZE).map(Self::from_raw)
    }
}

impl<T: Element> Default for Vector<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element, A: ByteAllocator> Vector<T, A> {
    const NONZERO_SIZE: () = assert!(T::SIZE > 0, "zero-sized elements are not supported");

    /// Wraps a raw buffer whose elements are `T`s.
    pub fn from_raw(raw: ZVec<A>) -> Self {
        let () = Self::NONZERO_SIZE;
        Self {
            raw,
            _marker: PhantomData,
        }
    }

    pub fn as_raw(&self) -> &ZVec<A> {
        &self.raw
    }

    pub fn into_raw(self) -> ZVec<A> {
        self.raw
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        self.raw.element(index, T::SIZE).map(T::read_bytes)
    }

    /// Overwrites the element at `index`. Returns `false` past the end.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.raw.element_mut(index, T::SIZE) {
            Some(slot) => {
                value.write_bytes(slot);
                true
            }
            None => false,
        }
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the buffer cannot grow.
    pub fn push(&mut self, value: T) -> Result<(), ZVecError> {
        self.insert(self.len(), value)
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the buffer cannot grow.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ZVecError> {
        self.raw.inject(index, None, 1, T::SIZE)?;
        self.set(index, value);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the buffer cannot grow.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), ZVecError> {
        let start = self.len();
        self.raw.inject(start, None, values.len(), T::SIZE)?;

        let tail = &mut self.raw.as_bytes_mut(T::SIZE)[start * T::SIZE..];
        for (value, slot) in values.iter().zip(tail.chunks_exact_mut(T::SIZE)) {
            value.write_bytes(slot);
        }
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let value = self.get(index)?;
        self.raw.remove(index, T::SIZE);
        Some(value)
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.get(self.len().checked_sub(1)?)?;
        self.raw.pull(None, T::SIZE);
        Some(value)
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.get(0)?;
        self.raw.shift(None, T::SIZE);
        Some(value)
    }

    pub fn truncate(&mut self, length: usize) {
        self.raw.truncate(length, T::SIZE);
    }

    pub fn shrink(&mut self) {
        self.raw.shrink(T::SIZE);
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the buffer cannot grow.
    pub fn ensure(&mut self, min_len: usize) -> Result<(), ZVecError> {
        self.raw.ensure(min_len, T::SIZE)
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if the reallocation fails.
    pub fn resize(&mut self, capacity: usize) -> Result<(), ZVecError> {
        self.raw.resize(capacity, T::SIZE)
    }

    /// # Errors
    ///
    /// Returns `ZVecError::OutOfMemory` if no copy can be allocated.
    pub fn duplicate(&self) -> Result<Self, ZVecError>
    where
        A: Clone,
    {
        self.raw.duplicate(T::SIZE).map(Self::from_raw)
    }

    pub fn find<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(T) -> bool,
    {
        self.raw
            .find(T::SIZE, |bytes| predicate(T::read_bytes(bytes)))
    }

    pub fn find_last<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(T) -> bool,
    {
        self.raw
            .find_last(self.len(), T::SIZE, |bytes| predicate(T::read_bytes(bytes)))
    }

    /// Leftmost index whose element compares `Equal` under `compare`.
    pub fn search_by<F>(&self, mut compare: F) -> Option<usize>
    where
        F: FnMut(T) -> Ordering,
    {
        self.raw
            .search(T::SIZE, |bytes| compare(T::read_bytes(bytes)))
    }

    /// Stable sort. See [`ZVec::sort_by`] for its temporary memory.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(T, T) -> Ordering,
    {
        self.raw
            .sort_by(T::SIZE, |a, b| compare(T::read_bytes(a), T::read_bytes(b)));
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.raw.swap(i, j, T::SIZE);
    }

    pub fn move_element(&mut self, target: usize, source: usize) {
        self.raw.move_element(target, source, T::SIZE);
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.raw
            .as_bytes(T::SIZE)
            .chunks_exact(T::SIZE)
            .map(T::read_bytes)
            .collect()
    }
}

impl<T: Element + PartialEq, A: ByteAllocator, B: ByteAllocator> PartialEq<Vector<T, B>>
    for Vector<T, A>
{
    fn eq(&self, other: &Vector<T, B>) -> bool {
        self.raw.equals_by(&other.raw, T::SIZE, |a, b| {
            T::read_bytes(a) == T::read_bytes(b)
        })
    }
}

impl<T: Element + fmt::Debug, A: ByteAllocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}
