//! Resource-specific error types.

use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Neither the resource table nor any template resolved the URI.
    #[error("Unknown resource: {0}")]
    NotFound(String),

    /// The placeholders of a URI template do not match the producer's parameters.
    #[error(
        "Mismatch between URI parameters {uri_params:?} and function parameters {fn_params:?} \
         in template {uri_template}"
    )]
    TemplateMismatch {
        uri_template: String,
        uri_params: Vec<String>,
        fn_params: Vec<String>,
    },

    /// The URI template itself is malformed.
    #[error("Invalid URI template {uri_template}: {reason}")]
    InvalidTemplate { uri_template: String, reason: String },

    /// A template producer failed while creating a resource.
    #[error("Error creating resource from template for {uri}: {source}")]
    Producer {
        uri: String,
        #[source]
        source: anyhow::Error,
    },

    /// A function-backed resource failed while producing its content.
    #[error("Error reading resource {uri}: {source}")]
    Read {
        uri: String,
        #[source]
        source: anyhow::Error,
    },

    /// File-backed resources require an absolute path.
    #[error("Path must be absolute: {0}")]
    InvalidPath(String),

    /// An I/O error occurred while accessing the resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ResourceError {
    /// Create a new "unknown resource" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid template" error.
    pub fn invalid_template(uri_template: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            uri_template: uri_template.into(),
            reason: reason.into(),
        }
    }

    /// Wrap a producer failure for the URI being resolved.
    pub fn producer(uri: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Producer {
            uri: uri.into(),
            source,
        }
    }

    /// Wrap a content read failure.
    pub fn read(uri: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Read {
            uri: uri.into(),
            source,
        }
    }

    /// Whether this error means the URI is not registered at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
