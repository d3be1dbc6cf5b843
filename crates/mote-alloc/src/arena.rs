//! Per-frame bump arena with generation-checked slice handles.

use bytemuck::Pod;
use std::marker::PhantomData;

use crate::error::AllocError;

/// Handle to a typed slice inside a [`FrameArena`].
///
/// Encodes the byte offset and element length of an allocation plus the
/// arena generation it was made in, allowing an O(1) staleness check at
/// resolution time. Handles are plain `Copy` data — cheap to store in
/// per-cell tables and to pass around — and are resolved back to slices
/// with [`FrameArena::slice`] / [`FrameArena::slice_mut`].
#[derive(Debug, PartialEq, Eq)]
pub struct ArenaSlice<T> {
    generation: u32,
    offset: u32,
    len: u32,
    _marker: PhantomData<fn() -> T>,
}

// Manual impls: `derive` would bound them on `T`, but the handle owns no T.
impl<T> Clone for ArenaSlice<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for ArenaSlice<T> {}

impl<T> ArenaSlice<T> {
    /// The arena generation this allocation belongs to.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Length of the allocation in elements.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fixed-capacity bump allocator, reset once per frame.
///
/// The arena carves typed slices out of a single pre-allocated buffer by
/// advancing a byte offset; [`reset`](FrameArena::reset) rewinds the
/// offset in O(1) and bumps the generation counter, logically freeing
/// everything at once. There is no per-object deallocation.
///
/// Allocations return [`ArenaSlice`] handles rather than references, so
/// any number of them can be live simultaneously. Resolving a handle
/// from a previous generation is a precondition violation: debug builds
/// assert, release builds return whatever currently occupies those bytes
/// (safe, but meaningless).
///
/// The element type must be [`Pod`], which makes the "only trivially
/// destructible data" rule a compile-time bound, and must not require
/// alignment above 8 bytes (the buffer is backed by `u64` words).
/// Returned storage is zeroed.
pub struct FrameArena {
    words: Vec<u64>,
    /// Capacity in bytes, fixed at construction.
    capacity: usize,
    /// Next free byte offset.
    head: usize,
    generation: u32,
}

impl FrameArena {
    /// Create an arena with at least `capacity_bytes` of storage.
    ///
    /// The capacity is rounded up to a whole number of 8-byte words.
    /// Rejects zero capacity and capacities beyond the `u32` offsets the
    /// handles encode.
    pub fn new(capacity_bytes: usize) -> Result<Self, AllocError> {
        if capacity_bytes == 0 {
            return Err(AllocError::ZeroCapacity {
                allocator: "FrameArena",
            });
        }
        if capacity_bytes > u32::MAX as usize {
            return Err(AllocError::CapacityTooLarge {
                requested: capacity_bytes,
                max: u32::MAX as usize,
            });
        }

        let words = vec![0u64; capacity_bytes.div_ceil(8)];
        let capacity = words.len() * 8;
        Ok(Self {
            words,
            capacity,
            head: 0,
            generation: 0,
        })
    }

    /// Allocate a single zeroed value, returned as a one-element slice handle.
    pub fn alloc<T: Pod>(&mut self) -> Result<ArenaSlice<T>, AllocError> {
        self.alloc_slice(1)
    }

    /// Allocate a zeroed slice of `len` elements.
    ///
    /// The allocation starts at the next offset aligned to `align_of::<T>()`.
    /// Fails with [`AllocError::ArenaExhausted`] when the request (including
    /// alignment padding) does not fit the remaining capacity.
    pub fn alloc_slice<T: Pod>(&mut self, len: usize) -> Result<ArenaSlice<T>, AllocError> {
        let align = std::mem::align_of::<T>();
        debug_assert!(align <= 8, "FrameArena supports alignment up to 8 bytes");

        let size = std::mem::size_of::<T>().saturating_mul(len);
        let start = self.head.next_multiple_of(align);
        let end = start.saturating_add(size);

        if end > self.capacity {
            return Err(AllocError::ArenaExhausted {
                requested: size + (start - self.head),
                capacity: self.capacity,
                used: self.head,
            });
        }

        // Zero the region: it may hold stale data from a previous frame.
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.words);
        bytes[start..end].fill(0);

        self.head = end;
        Ok(ArenaSlice {
            generation: self.generation,
            offset: start as u32,
            len: len as u32,
            _marker: PhantomData,
        })
    }

    /// Resolve a handle to its slice.
    pub fn slice<T: Pod>(&self, handle: ArenaSlice<T>) -> &[T] {
        debug_assert_eq!(
            handle.generation, self.generation,
            "stale arena slice: handle generation {} vs arena generation {}",
            handle.generation, self.generation
        );
        let bytes: &[u8] = bytemuck::cast_slice(&self.words);
        let start = handle.offset as usize;
        let end = start + std::mem::size_of::<T>() * handle.len as usize;
        bytemuck::cast_slice(&bytes[start..end])
    }

    /// Resolve a handle to its mutable slice.
    pub fn slice_mut<T: Pod>(&mut self, handle: ArenaSlice<T>) -> &mut [T] {
        debug_assert_eq!(
            handle.generation, self.generation,
            "stale arena slice: handle generation {} vs arena generation {}",
            handle.generation, self.generation
        );
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.words);
        let start = handle.offset as usize;
        let end = start + std::mem::size_of::<T>() * handle.len as usize;
        bytemuck::cast_slice_mut(&mut bytes[start..end])
    }

    /// Rewind to empty in O(1), invalidating every outstanding handle.
    ///
    /// The backing storage is neither freed nor zeroed here; the next
    /// allocation zeroes what it hands out.
    pub fn reset(&mut self) {
        self.head = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Bytes allocated so far this frame.
    pub fn used(&self) -> usize {
        self.head
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes still available this frame (ignoring alignment padding).
    pub fn remaining(&self) -> usize {
        self.capacity - self.head
    }

    /// The current generation, bumped on every [`reset`](FrameArena::reset).
    pub fn generation(&self) -> u32 {
        self.generation
    }
}
