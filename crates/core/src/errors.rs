use miette::Diagnostic;

/// Result type alias for msgbridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for msgbridge operations
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    /// The foreign buffer could not be created. No external call was made.
    #[error("failed to allocate a {requested}-byte foreign buffer for '{operation}'")]
    #[diagnostic(code(msgbridge::allocation))]
    Allocation { operation: String, requested: usize },

    /// A fault reported by the external function. Opaque to the bridge.
    #[error("external call '{symbol}' failed: {message}")]
    #[diagnostic(
        code(msgbridge::external_call),
        help("consult the native library's documentation for this symbol")
    )]
    ExternalCall {
        symbol: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    #[diagnostic(code(msgbridge::configuration))]
    Configuration { message: String },

    /// Another error with added context
    #[error("{message}")]
    #[diagnostic(code(msgbridge::context))]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

// Helper methods for creating errors with context
impl Error {
    /// Create an allocation error
    #[must_use]
    pub fn allocation(operation: impl Into<String>, requested: usize) -> Self {
        Error::Allocation {
            operation: operation.into(),
            requested,
        }
    }

    /// Create an external call error
    #[must_use]
    pub fn external_call(symbol: impl Into<String>, message: impl Into<String>) -> Self {
        Error::ExternalCall {
            symbol: symbol.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create an external call error with a source error
    #[must_use]
    pub fn external_call_with_source(
        symbol: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::ExternalCall {
            symbol: symbol.into(),
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Returns the innermost error, skipping any context layers
    pub fn root(&self) -> &Error {
        match self {
            Error::Context { source, .. } => source.root(),
            other => other,
        }
    }
}

// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a lazy message
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Context {
            message: message.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Error::Context {
            message: f(),
            source: Box::new(e.into()),
        })
    }
}
