#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use zvec::{AllocError, ByteAllocator, Global};

/// Heap allocator whose next calls can be told to fail.
///
/// Clones share the script and the counters, so a test can keep one handle
/// while the buffer owns another.
#[derive(Clone, Default)]
pub struct ScriptedAllocator {
    script: Rc<RefCell<VecDeque<bool>>>,
    allocations: Rc<Cell<usize>>,
    reallocations: Rc<Cell<usize>>,
}

impl ScriptedAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues outcomes for the next calls: `true` fails, `false` succeeds.
    /// Calls past the end of the script succeed.
    pub fn script(&self, outcomes: &[bool]) {
        let mut script = self.script.borrow_mut();
        script.clear();
        script.extend(outcomes.iter().copied());
    }

    pub fn fail_next(&self) {
        self.script(&[true]);
    }

    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn reallocations(&self) -> usize {
        self.reallocations.get()
    }

    fn next_fails(&self) -> bool {
        self.script.borrow_mut().pop_front().unwrap_or(false)
    }
}

impl ByteAllocator for ScriptedAllocator {
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        self.allocations.set(self.allocations.get() + 1);
        if self.next_fails() {
            return Err(AllocError);
        }
        Global.allocate(size)
    }

    fn reallocate(&self, block: &mut Vec<u8>, size: usize) -> Result<(), AllocError> {
        self.reallocations.set(self.reallocations.get() + 1);
        if self.next_fails() {
            return Err(AllocError);
        }
        Global.reallocate(block, size)
    }
}

pub const Z: usize = std::mem::size_of::<i32>();

pub fn to_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

pub fn to_values(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(Z)
        .map(|chunk| i32::from_ne_bytes(chunk.try_into().unwrap()))
        .collect()
}
