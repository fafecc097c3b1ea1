//! Core errors and constants for the `msgbridge` workspace.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate
//!   that crosses the FFI boundary, plus the `ResultExt` context helpers.
//! - **`constants`**: names of the native library, its symbols, and the
//!   environment variables read by the build script and the log initializer.

pub mod constants;
pub mod errors;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
};
