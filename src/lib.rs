#![cfg_attr(not(test), no_std)]

//! `ZVec`: a growable buffer of fixed-size elements with an explicit element size.
//!
//! `ZVec` manages one contiguous block of memory holding `capacity` elements,
//! `len` of which are live. The element size is not stored: every operation
//! takes it as its last argument, and the caller must use the same size for
//! the whole life of a buffer. Elements are opaque bytes; nothing is
//! constructed or dropped.
//!
//! This crate is `no_std` compatible and only needs `alloc`.
//!
//! # Growth and Shrinking
//!
//! - Growth: when `ensure()` has to reallocate, it asks for about 1.6x the
//!   required length (`(n * 8 + 3) / 5`), and settles for exactly the required
//!   length if that fails.
//! - Shrinking: after a removal leaves the buffer less than half full, it is
//!   reallocated to about 1.2x the new length (`(n * 6 + 4) / 5`). A failed
//!   shrink keeps the larger block.
//!
//! The two thresholds are far apart, so alternating inserts and removals at
//! the same length do not reallocate every time. Appending `n` elements one at
//! a time costs O(log n) reallocations.
//!
//! # Failure
//!
//! Every size computation is overflow-checked. An overflow and an allocator
//! refusal both surface as [`ZVecError::OutOfMemory`], and a failed operation
//! leaves the buffer as it was:
//!
//! ```
//! # use zvec::{ZVec, ZVecError};
//! let mut zvec = ZVec::import(&[1, 2, 3, 4], 4, 1).unwrap();
//!
//! let err = zvec.resize(usize::MAX, 2).unwrap_err();
//! assert_eq!(err, ZVecError::OutOfMemory { count: usize::MAX, element_size: 2 });
//! assert_eq!(zvec.as_bytes(1), &[1, 2, 3, 4]);
//! ```
//!
//! # Explicit Interface
//!
//! ```
//! # use zvec::ZVec;
//! const Z: usize = 4;
//!
//! let mut zvec = ZVec::new();
//! for i in 0u32..8 {
//!     zvec.append(&i.to_ne_bytes(), Z).unwrap();
//! }
//! assert_eq!(zvec.len(), 8);
//! assert!(zvec.capacity() >= 8);
//!
//! zvec.excise(2, 3, Z);
//! let mut out = [0u8; Z];
//! zvec.get(2, &mut out, Z);
//! assert_eq!(u32::from_ne_bytes(out), 5);
//! ```
//!
//! # Typed Interface
//!
//! When the element type is known at compile time, [`Vector`] supplies the
//! element size:
//!
//! ```
//! # use zvec::Vector;
//! let mut vector = Vector::from_slice(&[2i32, 4, 6, 8, 10, 12]).unwrap();
//! vector.move_element(2, 4);
//! assert_eq!(vector.to_vec(), [2, 4, 10, 6, 8, 12]);
//!
//! vector.sort_by(|a, b| a.cmp(&b));
//! assert_eq!(vector.search_by(|x| x.cmp(&8)), Some(3));
//! ```
//!
//! # Allocators
//!
//! Storage comes from a [`ByteAllocator`]. [`Global`] uses the heap; other
//! implementations can be passed to the `*_in` constructors, for example to
//! exercise the out-of-memory paths in tests.

extern crate alloc;

mod allocator;
mod buffer;
mod error;
pub mod layout;
mod mutate;
pub mod policy;
mod relate;
mod typed;

pub use allocator::{AllocError, ByteAllocator, Global};
pub use buffer::ZVec;
pub use error::ZVecError;
pub use typed::{Element, Vector};
