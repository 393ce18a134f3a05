//! Capacity growth and shrink formulas.
//!
//! Growth aims for about 1.6x the requested length and shrinking for about
//! 1.2x the remaining length. A shrink is only considered once less than half
//! of the capacity is in use, so a single element moving back and forth across
//! a boundary does not reallocate on every call.

/// Capacity to allocate when `min_len` elements must fit.
///
/// `(min_len * 8 + 3) / 5`, computed without the intermediate product. Returns
/// `None` when the result is not representable or gives no headroom over
/// `min_len`; the caller then falls back to an exact fit.
#[must_use]
pub const fn grow_target(min_len: usize) -> Option<usize> {
    let whole = match (min_len / 5).checked_mul(8) {
        Some(whole) => whole,
        None => return None,
    };
    let target = match whole.checked_add(((min_len % 5) * 8 + 3) / 5) {
        Some(target) => target,
        None => return None,
    };
    if target > min_len {
        Some(target)
    } else {
        None
    }
}

/// Whether a buffer of `capacity` holding `len` elements should release memory.
#[must_use]
pub const fn should_shrink(len: usize, capacity: usize) -> bool {
    len <= capacity.saturating_sub(1) / 2
}

/// Capacity to keep after shrinking to `len` elements: `ceil(len * 6 / 5)`.
///
/// Only called with `len` at most half of an existing capacity, so it cannot
/// overflow.
#[must_use]
pub const fn shrink_target(len: usize) -> usize {
    len / 5 * 6 + ((len % 5) * 6 + 4) / 5
}
