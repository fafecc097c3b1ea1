//! The capability a [`StringBridge`](crate::StringBridge) delivers messages to

use msgbridge_core::Result;
use std::ffi::CStr;

/// An external function that accepts a null-terminated message
///
/// The production implementation is [`NativeSink`](crate::NativeSink); tests
/// substitute recording stubs. Implementations must not retain `message`
/// past the return of `deliver`, because the bridge frees it immediately after.
///
/// Thread safety of the underlying function is the implementor's promise:
/// the `Send + Sync` bounds let one bridge be shared across threads.
pub trait ExternalMessageSink: Send + Sync {
    /// Name of the external entry point, used in logs and errors
    fn symbol(&self) -> &str;

    /// Invokes the external function with `message`
    ///
    /// Errors are opaque to the bridge and are returned to its caller
    /// unchanged.
    fn deliver(&self, message: &CStr) -> Result<()>;
}

impl<S: ExternalMessageSink + ?Sized> ExternalMessageSink for &S {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn deliver(&self, message: &CStr) -> Result<()> {
        (**self).deliver(message)
    }
}

impl<S: ExternalMessageSink + ?Sized> ExternalMessageSink for Box<S> {
    fn symbol(&self) -> &str {
        (**self).symbol()
    }

    fn deliver(&self, message: &CStr) -> Result<()> {
        (**self).deliver(message)
    }
}
