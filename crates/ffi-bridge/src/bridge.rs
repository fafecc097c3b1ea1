//! Marshals a Rust string into a foreign buffer and hands it to a sink

use crate::allocator::{ForeignAllocator, LibcAllocator};
use crate::buffer::ForeignBuffer;
use crate::sink::ExternalMessageSink;
use msgbridge_core::{Result, SEND_MESSAGE_OP};
use tracing::{debug_span, trace, warn};

/// Converts messages to C strings and calls an [`ExternalMessageSink`]
///
/// The bridge holds no per-call state. Every `send_message` allocates its own
/// buffer and releases it before returning, so `&StringBridge` can be used
/// from many threads at once if the sink itself is thread-safe.
#[derive(Debug, Default, Clone)]
pub struct StringBridge<S, A = LibcAllocator> {
    sink: S,
    allocator: A,
}

impl<S: ExternalMessageSink> StringBridge<S, LibcAllocator> {
    /// Creates a bridge that allocates foreign buffers on the C heap
    pub const fn new(sink: S) -> Self {
        Self {
            sink,
            allocator: LibcAllocator,
        }
    }
}

impl<S: ExternalMessageSink, A: ForeignAllocator> StringBridge<S, A> {
    /// Creates a bridge with a custom allocator
    pub const fn with_allocator(sink: S, allocator: A) -> Self {
        Self { sink, allocator }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Sends `message` to the sink as a null-terminated C string
    ///
    /// Exactly one buffer is allocated and released, and the sink is invoked
    /// exactly once. The release happens on every exit path, including a
    /// sink error or a panic unwinding out of the sink.
    ///
    /// A message with an interior NUL is still sent; the sink sees it cut off
    /// at that byte, as any C reader would.
    ///
    /// # Errors
    /// - [`Error::Allocation`](msgbridge_core::Error::Allocation) if the
    ///   buffer cannot be allocated; the sink is not invoked
    /// - whatever the sink returns, unchanged
    pub fn send_message(&self, message: &str) -> Result<()> {
        let span = debug_span!("send_message", symbol = self.sink.symbol(), len = message.len());
        let _enter = span.enter();

        let buffer = ForeignBuffer::new(message.as_bytes(), &self.allocator, SEND_MESSAGE_OP)?;

        trace!(size = buffer.size(), "invoking external function");
        let result = self.sink.deliver(buffer.as_c_str());
        drop(buffer);

        if let Err(e) = &result {
            warn!(error = %e, "external call failed");
        }
        result
    }
}
