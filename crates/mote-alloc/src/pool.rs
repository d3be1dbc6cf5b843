//! Fixed-capacity free-list pool with stable slot indices.

use crate::error::AllocError;

/// One pool slot with its embedded free-list link.
#[derive(Clone, Debug)]
struct Slot<T> {
    value: T,
    /// Next slot on the free list, `None` at the tail. Only meaningful
    /// while the slot is free.
    next_free: Option<u32>,
    in_use: bool,
}

/// Fixed-capacity slot allocator threading its free list through the
/// unused slots themselves.
///
/// Allocation pops the free-list head; deallocation pushes the slot back,
/// so reuse is LIFO — the most recently freed slot is the next one
/// returned. Slot indices are stable for the lifetime of an allocation,
/// which is what lets the pool-allocated particle layout hand out
/// identities that survive compaction.
///
/// Capacity is fixed at construction and never grows. [`allocate`]
/// returns `None` when the pool is full — a recoverable condition the
/// caller must check, not an error.
///
/// Accessing a freed slot or freeing a slot twice is a precondition
/// violation: debug builds assert, release builds are unchecked.
///
/// [`allocate`]: FreeListPool::allocate
pub struct FreeListPool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<u32>,
    live: usize,
}

impl<T: Default> FreeListPool<T> {
    /// Create a pool of `capacity` default-initialised slots.
    ///
    /// Rejects zero capacity and capacities that do not fit the `u32`
    /// free-list links.
    pub fn new(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Err(AllocError::ZeroCapacity {
                allocator: "FreeListPool",
            });
        }
        if capacity > u32::MAX as usize {
            return Err(AllocError::CapacityTooLarge {
                requested: capacity,
                max: u32::MAX as usize,
            });
        }

        let mut slots = Vec::with_capacity(capacity);
        for i in 0..capacity {
            let next = i + 1;
            slots.push(Slot {
                value: T::default(),
                next_free: (next < capacity).then_some(next as u32),
                in_use: false,
            });
        }

        Ok(Self {
            slots,
            free_head: Some(0),
            live: 0,
        })
    }
}

impl<T> FreeListPool<T> {
    /// Allocate a slot, returning its stable index.
    ///
    /// Returns `None` when the pool is full; the pool never grows.
    pub fn allocate(&mut self) -> Option<usize> {
        let index = self.free_head? as usize;
        self.free_head = self.slots[index].next_free;
        self.slots[index].in_use = true;
        self.live += 1;
        Some(index)
    }

    /// Return a slot to the free list.
    ///
    /// The slot becomes the free-list head, so it is the next index
    /// [`allocate`](FreeListPool::allocate) hands out.
    pub fn deallocate(&mut self, index: usize) {
        debug_assert!(index < self.slots.len(), "index out of range");
        debug_assert!(self.slots[index].in_use, "double free");

        self.slots[index].in_use = false;
        self.slots[index].next_free = self.free_head;
        self.free_head = Some(index as u32);
        self.live -= 1;
    }

    /// Borrow the value in an allocated slot.
    pub fn get(&self, index: usize) -> &T {
        debug_assert!(index < self.slots.len(), "index out of range");
        debug_assert!(self.slots[index].in_use, "accessing freed slot");
        &self.slots[index].value
    }

    /// Mutably borrow the value in an allocated slot.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.slots.len(), "index out of range");
        debug_assert!(self.slots[index].in_use, "accessing freed slot");
        &mut self.slots[index].value
    }

    /// Total number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently allocated slots.
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Whether every slot is allocated.
    pub fn is_full(&self) -> bool {
        self.free_head.is_none()
    }

    /// Whether a slot is currently allocated.
    pub fn in_use(&self, index: usize) -> bool {
        self.slots[index].in_use
    }
}
