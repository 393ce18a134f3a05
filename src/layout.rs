//! Overflow-checked sizing of buffer allocations.
//!
//! A buffer's footprint is its element storage plus a header holding the
//! capacity and the length. Every byte count derived from an element count
//! goes through [`footprint`] so that a wrapped multiplication can never turn
//! into an undersized allocation.

use crate::error::ZVecError;

/// Bytes taken by the capacity and length fields.
pub const HEADER_SIZE: usize = 2 * core::mem::size_of::<usize>();

/// Largest footprint an allocation may have.
const MAX_FOOTPRINT: usize = isize::MAX as usize;

/// Returns `count * element_size + HEADER_SIZE`.
///
/// # Errors
///
/// Returns `ZVecError::OutOfMemory` if either step overflows or the total is
/// larger than the allocator can ever satisfy.
pub fn footprint(count: usize, element_size: usize) -> Result<usize, ZVecError> {
    count
        .checked_mul(element_size)
        .and_then(|bytes| bytes.checked_add(HEADER_SIZE))
        .filter(|&total| total <= MAX_FOOTPRINT)
        .ok_or_else(|| ZVecError::out_of_memory(count, element_size))
}

/// Returns the number of storage bytes for `count` elements.
///
/// # Errors
///
/// Same as [`footprint`].
pub fn storage_bytes(count: usize, element_size: usize) -> Result<usize, ZVecError> {
    footprint(count, element_size).map(|total| total - HEADER_SIZE)
}
