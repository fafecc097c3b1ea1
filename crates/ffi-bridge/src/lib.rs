//! Rust-C FFI bridge for sending messages to native code
//!
//! This crate marshals Rust strings into null-terminated buffers on the C
//! heap, hands them to an external function, and frees them on every exit
//! path. The external function sits behind the [`ExternalMessageSink`] trait
//! so native linkage stays in one adapter ([`NativeSink`], behind the
//! `native` feature) and everything else can be exercised with stubs.

pub mod allocator;
pub mod bridge;
pub mod buffer;
#[cfg(feature = "native")]
pub mod native;
pub mod sink;

pub use allocator::{ForeignAllocator, LibcAllocator};
pub use bridge::StringBridge;
pub use buffer::ForeignBuffer;
#[cfg(feature = "native")]
pub use native::NativeSink;
pub use sink::ExternalMessageSink;

#[cfg(feature = "native")]
static NATIVE_BRIDGE: StringBridge<NativeSink> = StringBridge::new(NativeSink);

/// Sends `message` to the native `msgbridge_bye` function
///
/// Uses a process-wide bridge over [`NativeSink`] and the C heap. See
/// [`StringBridge::send_message`] for the error conditions.
#[cfg(feature = "native")]
pub fn send_message(message: &str) -> msgbridge_core::Result<()> {
    NATIVE_BRIDGE.send_message(message)
}
