//! Sends each command-line argument to the native `msgbridge_bye` function.
//!
//! ```text
//! MSGBRIDGE_LOG=debug cargo run -p msgbridge-ffi-bridge --example bye -- Alice Bob
//! ```

use msgbridge_core::ResultExt;

fn main() -> miette::Result<()> {
    msgbridge_utils::tracing::init()?;

    let names: Vec<String> = std::env::args().skip(1).collect();
    let names = if names.is_empty() {
        vec!["world".to_string()]
    } else {
        names
    };

    for (i, name) in names.iter().enumerate() {
        msgbridge_ffi_bridge::send_message(name)
            .with_context(|| format!("sending argument {}", i + 1))?;
    }

    Ok(())
}
