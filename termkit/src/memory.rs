//! Guarded heap allocation.
//!
//! [`allocate`] and [`reallocate`] never hand a failure back to the caller:
//! when memory cannot be obtained the process is terminated through
//! [`fatal_error`](crate::fatal::fatal_error). Every operation emits an
//! `info` event with the size and address involved.

use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::{error, info};

use crate::fatal::fatal_error;

/// Owned, heap-allocated byte buffer handed out by [`allocate`].
///
/// Dropping the buffer releases it silently; [`free`] releases it and logs.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GuardedBuffer {
    bytes: Vec<u8>,
}

impl GuardedBuffer {
    /// Start address of the buffer, for diagnostics.
    pub fn address(&self) -> *const u8 {
        self.bytes.as_ptr()
    }
}

impl Deref for GuardedBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DerefMut for GuardedBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

/// The allocator could not satisfy a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfMemory {
    /// Total size of the buffer that was requested, in bytes.
    pub requested: usize,
}

impl fmt::Display for OutOfMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Memory allocation failed.")
    }
}

impl std::error::Error for OutOfMemory {}

/// Allocate `size` zeroed bytes, terminating the process on failure.
pub fn allocate(size: usize) -> GuardedBuffer {
    let buffer = match try_allocate(size) {
        Ok(buffer) => buffer,
        Err(err) => out_of_memory(err),
    };
    info!(bytes = size, address = ?buffer.address(), "memory allocated");
    buffer
}

/// Resize `buffer` to `size` bytes, terminating the process on failure.
///
/// The first `min(old, new)` bytes are preserved. Bytes past the old length
/// are unspecified; do not rely on their value.
pub fn reallocate(buffer: GuardedBuffer, size: usize) -> GuardedBuffer {
    let buffer = match try_reallocate(buffer, size) {
        Ok(buffer) => buffer,
        Err(err) => out_of_memory(err),
    };
    info!(bytes = size, address = ?buffer.address(), "memory reallocated");
    buffer
}

/// Release `buffer`.
pub fn free(buffer: GuardedBuffer) {
    let address = buffer.address();
    drop(buffer);
    info!(address = ?address, "memory freed");
}

fn out_of_memory(err: OutOfMemory) -> ! {
    error!(requested = err.requested, "allocation request refused");
    fatal_error(&err.to_string())
}

pub(crate) fn try_allocate(size: usize) -> Result<GuardedBuffer, OutOfMemory> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(size)
        .map_err(|_| OutOfMemory { requested: size })?;
    bytes.resize(size, 0);
    Ok(GuardedBuffer { bytes })
}

pub(crate) fn try_reallocate(
    mut buffer: GuardedBuffer,
    size: usize,
) -> Result<GuardedBuffer, OutOfMemory> {
    let len = buffer.bytes.len();
    if size > len {
        buffer
            .bytes
            .try_reserve_exact(size - len)
            .map_err(|_| OutOfMemory { requested: size })?;
        buffer.bytes.resize(size, 0);
    } else {
        buffer.bytes.truncate(size);
        buffer.bytes.shrink_to_fit();
    }
    Ok(buffer)
}
