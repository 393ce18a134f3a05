use thiserror::Error;

/// Error types for `ZVec` operations
///
/// Arithmetic overflow while sizing an allocation and a refusal by the
/// allocator are reported through the same variant: callers recover from
/// both the same way.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ZVecError {
    /// The allocation for the requested number of elements could not be made
    #[error("Out of memory: cannot hold {count} elements of {element_size} bytes")]
    OutOfMemory {
        /// Number of elements requested
        count: usize,
        /// Element size the caller asserted
        element_size: usize,
    },
}

impl ZVecError {
    pub(crate) fn out_of_memory(count: usize, element_size: usize) -> Self {
        ZVecError::OutOfMemory {
            count,
            element_size,
        }
    }
}
