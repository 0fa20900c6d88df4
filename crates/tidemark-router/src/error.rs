//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
///
/// Every variant is a configuration error raised during route registration;
/// a broken route table should fail startup. A request path that matches no
/// template is not an error — see [`Resolution::NoMatch`](crate::Resolution).
#[derive(Debug, Error)]
pub enum RouterError {
    /// A template string was registered twice on the same router.
    #[error("route already mapped: {0}")]
    DuplicateRoute(String),

    /// A template or one of its placeholder constraints failed to compile.
    #[error("invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The offending template string.
        pattern: String,
        /// Why compilation was rejected.
        reason: String,
    },

    /// A route was mapped after the router had already resolved.
    #[error("cannot map routes after resolution")]
    RegistryFrozen,
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
