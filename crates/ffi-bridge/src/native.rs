//! Adapter for the bundled `msgbridge_native` C library

use crate::sink::ExternalMessageSink;
use msgbridge_core::{Result, NATIVE_BYE_SYMBOL};
use std::ffi::CStr;
use std::os::raw::c_char;

#[link(name = "msgbridge_native")]
extern "C" {
    fn msgbridge_bye(msg: *const c_char);
}

/// Sink that forwards messages to `msgbridge_bye`
///
/// The native function returns nothing, so `deliver` always succeeds from
/// Rust's point of view. A crash inside the library is not recoverable here.
/// The bundled implementation writes one line with `fprintf`/`fflush`, which
/// POSIX C libraries serialize, so concurrent calls are safe. A library
/// linked through `MSGBRIDGE_NATIVE_LIB_DIR` must give the same guarantee.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeSink;

impl ExternalMessageSink for NativeSink {
    fn symbol(&self) -> &str {
        NATIVE_BYE_SYMBOL
    }

    fn deliver(&self, message: &CStr) -> Result<()> {
        // SAFETY: message is NUL-terminated and outlives the call, and
        // msgbridge_bye does not keep the pointer
        unsafe { msgbridge_bye(message.as_ptr()) };
        Ok(())
    }
}
