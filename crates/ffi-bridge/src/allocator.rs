//! Allocation of foreign-compatible memory
//!
//! Foreign buffers live on the C heap so the native side sees memory it could
//! legally `free`, and so that an allocation failure comes back as a null
//! pointer instead of aborting the process.

use std::ptr::NonNull;

/// Creates and releases the raw memory behind a [`ForeignBuffer`](crate::ForeignBuffer)
///
/// # Safety
/// Implementors must guarantee that:
/// - a pointer returned by `allocate(len)` is valid for reads and writes of
///   `len` bytes until it is passed to `release`
/// - distinct live allocations never overlap
pub unsafe trait ForeignAllocator: Send + Sync {
    /// Allocates `len` bytes, returning `None` when memory is exhausted
    fn allocate(&self, len: usize) -> Option<NonNull<u8>>;

    /// Releases memory obtained from `allocate`
    ///
    /// # Safety
    /// The caller must ensure that:
    /// - `ptr` was returned by `allocate(len)` on this allocator
    /// - `ptr` has not been released already
    /// - `ptr` is not used after this call
    unsafe fn release(&self, ptr: NonNull<u8>, len: usize);
}

/// Allocator backed by the C library's `malloc` and `free`
#[derive(Debug, Default, Clone, Copy)]
pub struct LibcAllocator;

unsafe impl ForeignAllocator for LibcAllocator {
    fn allocate(&self, len: usize) -> Option<NonNull<u8>> {
        // SAFETY: malloc accepts any size and reports failure with null
        let raw = unsafe { libc::malloc(len) };
        NonNull::new(raw.cast::<u8>())
    }

    unsafe fn release(&self, ptr: NonNull<u8>, _len: usize) {
        libc::free(ptr.as_ptr().cast::<libc::c_void>());
    }
}
