//! RAII wrapper for the null-terminated buffer handed across the FFI boundary

use crate::allocator::ForeignAllocator;
use msgbridge_core::{Error, Result};
use std::ffi::CStr;
use std::os::raw::c_char;
use std::ptr::NonNull;
use tracing::{debug, warn};

/// A null-terminated copy of a message, owned by one foreign call
///
/// The memory comes from a [`ForeignAllocator`] and is released exactly once,
/// when the wrapper goes out of scope. That includes unwinding out of a
/// panicking external call.
pub struct ForeignBuffer<'a, A: ForeignAllocator + ?Sized> {
    ptr: NonNull<u8>,
    len: usize,
    // Offset of the first NUL; equals `len` when only the terminator is NUL
    terminator: usize,
    allocator: &'a A,
}

impl<'a, A: ForeignAllocator + ?Sized> ForeignBuffer<'a, A> {
    /// Copies `bytes` plus a trailing NUL into a fresh foreign allocation
    ///
    /// Every byte is copied, including interior NULs. C readers stop at the
    /// first one, so [`as_c_str`](Self::as_c_str) ends there and
    /// [`truncated_at`](Self::truncated_at) reports its offset.
    ///
    /// `operation` names the caller in any error returned. Fails with
    /// [`Error::Allocation`] if the allocator is out of memory.
    pub fn new(bytes: &[u8], allocator: &'a A, operation: &str) -> Result<Self> {
        let size = bytes
            .len()
            .checked_add(1)
            .ok_or_else(|| Error::allocation(operation, usize::MAX))?;

        let ptr = allocator.allocate(size).ok_or_else(|| {
            warn!(size, "foreign buffer allocation failed");
            Error::allocation(operation, size)
        })?;

        // SAFETY: ptr is valid for `size` bytes and cannot overlap `bytes`,
        // which is borrowed Rust memory
        unsafe {
            std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr.as_ptr(), bytes.len());
            ptr.as_ptr().add(bytes.len()).write(0);
        }

        let terminator = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        if terminator < bytes.len() {
            warn!(
                position = terminator,
                len = bytes.len(),
                "message contains a NUL byte; C readers will see a truncated string"
            );
        }

        debug!(size, "allocated foreign buffer");
        Ok(Self {
            ptr,
            len: bytes.len(),
            terminator,
            allocator,
        })
    }

    /// Views the buffer as a C string, ending at the first NUL
    pub fn as_c_str(&self) -> &CStr {
        // SAFETY: bytes before `terminator` are non-NUL, byte `terminator` is
        // NUL, and `terminator <= len < size`
        unsafe {
            let bytes = std::slice::from_raw_parts(self.ptr.as_ptr(), self.terminator + 1);
            CStr::from_bytes_with_nul_unchecked(bytes)
        }
    }

    /// Offset of an interior NUL, if the C view is shorter than the message
    pub fn truncated_at(&self) -> Option<usize> {
        (self.terminator < self.len).then_some(self.terminator)
    }

    /// Raw pointer to pass to a C function
    pub fn as_ptr(&self) -> *const c_char {
        self.ptr.as_ptr().cast::<c_char>().cast_const()
    }

    /// Message length, excluding the terminator
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size, including the terminator
    pub fn size(&self) -> usize {
        self.len + 1
    }
}

impl<A: ForeignAllocator + ?Sized> Drop for ForeignBuffer<'_, A> {
    fn drop(&mut self) {
        let size = self.size();
        // SAFETY: ptr came from `allocate(size)` on this allocator and the
        // wrapper is the only owner, so this is the single release
        unsafe {
            self.allocator.release(self.ptr, size);
        }
        debug!(size, "released foreign buffer");
    }
}

impl<A: ForeignAllocator + ?Sized> std::fmt::Debug for ForeignBuffer<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForeignBuffer")
            .field("ptr", &self.ptr)
            .field("len", &self.len)
            .finish()
    }
}
