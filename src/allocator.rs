use alloc::vec::Vec;

/// The allocator refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AllocError;

/// Source of the byte blocks backing a `ZVec`.
///
/// Implementations report failure instead of aborting, so that a buffer can
/// fall back to a smaller request or hand the error to its caller.
pub trait ByteAllocator {
    /// Returns a zero-filled block of exactly `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `AllocError` if the memory cannot be obtained.
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError>;

    /// Resizes `block` to exactly `size` bytes, keeping the common prefix and
    /// zero-filling any new bytes.
    ///
    /// # Errors
    ///
    /// Returns `AllocError` if the memory cannot be obtained. `block` must be
    /// left as it was. Shrinking is allowed to fail too.
    fn reallocate(&self, block: &mut Vec<u8>, size: usize) -> Result<(), AllocError>;
}

/// The global heap, through `Vec`'s fallible reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Global;

impl ByteAllocator for Global {
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        let mut block = Vec::new();
        block.try_reserve_exact(size).map_err(|_| AllocError)?;
        block.resize(size, 0);
        Ok(block)
    }

    fn reallocate(&self, block: &mut Vec<u8>, size: usize) -> Result<(), AllocError> {
        if size > block.len() {
            block
                .try_reserve_exact(size - block.len())
                .map_err(|_| AllocError)?;
            block.resize(size, 0);
        } else {
            block.truncate(size);
            block.shrink_to_fit();
        }
        Ok(())
    }
}

impl<A: ByteAllocator + ?Sized> ByteAllocator for &A {
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        (**self).allocate(size)
    }

    fn reallocate(&self, block: &mut Vec<u8>, size: usize) -> Result<(), AllocError> {
        (**self).reallocate(block, size)
    }
}
