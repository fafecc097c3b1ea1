//! Stubs standing in for the native library in integration tests

#![allow(dead_code)]

use msgbridge_core::{Error, Result};
use msgbridge_ffi_bridge::{ExternalMessageSink, ForeignAllocator, LibcAllocator};
use std::collections::HashSet;
use std::ffi::CStr;
use std::ptr::NonNull;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread::{self, ThreadId};

/// One allocation observed by [`TrackingAllocator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRecord {
    pub ptr: usize,
    pub len: usize,
    pub thread: ThreadId,
}

#[derive(Debug, Default)]
struct TrackingState {
    allocations: Vec<AllocationRecord>,
    releases: usize,
    double_releases: usize,
    live: HashSet<usize>,
}

/// Wraps [`LibcAllocator`] and records every allocate/release pair
#[derive(Debug, Default)]
pub struct TrackingAllocator {
    inner: LibcAllocator,
    exhausted: AtomicBool,
    state: Mutex<TrackingState>,
}

impl TrackingAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator whose every request fails
    pub fn exhausted() -> Self {
        let allocator = Self::default();
        allocator.exhausted.store(true, Ordering::SeqCst);
        allocator
    }

    pub fn allocation_count(&self) -> usize {
        self.state.lock().unwrap().allocations.len()
    }

    pub fn release_count(&self) -> usize {
        self.state.lock().unwrap().releases
    }

    pub fn double_release_count(&self) -> usize {
        self.state.lock().unwrap().double_releases
    }

    pub fn live_count(&self) -> usize {
        self.state.lock().unwrap().live.len()
    }

    pub fn allocations(&self) -> Vec<AllocationRecord> {
        self.state.lock().unwrap().allocations.clone()
    }

    /// Asserts that every allocation was released exactly once
    pub fn assert_balanced(&self, expected: usize) {
        let state = self.state.lock().unwrap();
        assert_eq!(state.allocations.len(), expected, "allocation count");
        assert_eq!(state.releases, expected, "release count");
        assert_eq!(state.double_releases, 0, "double releases");
        assert!(state.live.is_empty(), "leaked buffers: {:?}", state.live);
    }
}

unsafe impl ForeignAllocator for TrackingAllocator {
    fn allocate(&self, len: usize) -> Option<NonNull<u8>> {
        if self.exhausted.load(Ordering::SeqCst) {
            return None;
        }

        let ptr = self.inner.allocate(len)?;
        let mut state = self.state.lock().unwrap();
        state.live.insert(ptr.as_ptr() as usize);
        state.allocations.push(AllocationRecord {
            ptr: ptr.as_ptr() as usize,
            len,
            thread: thread::current().id(),
        });
        Some(ptr)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, len: usize) {
        let mut state = self.state.lock().unwrap();
        if !state.live.remove(&(ptr.as_ptr() as usize)) {
            // Never hand a stale pointer back to free
            state.double_releases += 1;
            return;
        }
        state.releases += 1;
        drop(state);

        self.inner.release(ptr, len);
    }
}

/// How a [`RecordingSink`] responds after recording a delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    Succeed,
    Fail,
    Panic,
}

/// One delivery observed by [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub bytes: Vec<u8>,
    pub ptr: usize,
    pub thread: ThreadId,
}

/// Records the bytes and buffer identity of every delivery
#[derive(Debug)]
pub struct RecordingSink {
    mode: SinkMode,
    deliveries: Mutex<Vec<Delivery>>,
}

impl RecordingSink {
    pub const SYMBOL: &'static str = "recording_sink";

    pub fn new(mode: SinkMode) -> Self {
        Self {
            mode,
            deliveries: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(SinkMode::Succeed)
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    pub fn delivery_count(&self) -> usize {
        self.deliveries.lock().unwrap().len()
    }
}

impl ExternalMessageSink for RecordingSink {
    fn symbol(&self) -> &str {
        Self::SYMBOL
    }

    fn deliver(&self, message: &CStr) -> Result<()> {
        {
            let mut deliveries = self.deliveries.lock().unwrap();
            deliveries.push(Delivery {
                bytes: message.to_bytes_with_nul().to_vec(),
                ptr: message.as_ptr() as usize,
                thread: thread::current().id(),
            });
        }

        match self.mode {
            SinkMode::Succeed => Ok(()),
            SinkMode::Fail => Err(Error::external_call(Self::SYMBOL, "stub fault")),
            SinkMode::Panic => panic!("stub sink panicked"),
        }
    }
}
