/// Constants used throughout the msgbridge codebase
// Native library
pub const NATIVE_LIB_NAME: &str = "msgbridge_native";
pub const NATIVE_BYE_SYMBOL: &str = "msgbridge_bye";

// Build-time configuration
pub const NATIVE_LIB_DIR_VAR: &str = "MSGBRIDGE_NATIVE_LIB_DIR";
pub const NATIVE_LINK_KIND_VAR: &str = "MSGBRIDGE_NATIVE_LINK_KIND";

// Logging
pub const MSGBRIDGE_LOG_VAR: &str = "MSGBRIDGE_LOG";
pub const DEFAULT_LOG_FILTER: &str = "info";

// Operation names used in errors and spans
pub const SEND_MESSAGE_OP: &str = "send_message";
