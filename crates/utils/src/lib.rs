//! Shared utilities for msgbridge
//!
//! Currently this is the tracing setup used by binaries and examples. Library
//! crates only emit events and never install a subscriber themselves.

pub mod tracing;
