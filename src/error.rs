//! Error types for the session-property store.

use thiserror::Error;

/// Errors surfaced by [`SessionStoreProvider`](crate::SessionStoreProvider)
/// operations and by configuration loading.
///
/// Deserialization problems are deliberately not represented here: an unknown
/// `value_type` tag or an undecodable payload is reported as an absent value
/// (`Ok(None)`), never as an error.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// An operation was invoked before [`initialize`] supplied the session
    /// timeout and value factory.
    ///
    /// [`initialize`]: crate::SessionStoreProvider::initialize
    #[error("session store has not been initialized; call initialize() first")]
    NotInitialized,

    /// [`initialize`](crate::SessionStoreProvider::initialize) was called a
    /// second time.
    #[error("session store has already been initialized")]
    AlreadyInitialized,

    /// The value passed to a set operation has no registered encoder.
    /// Rejected before any store interaction.
    #[error("no serializer is registered for the supplied value type")]
    UnsupportedValue,

    /// The registered encoder failed to serialize the value.
    #[error("failed to encode session value: {0}")]
    Encode(String),

    /// A database operation failed. Callers must treat this as a hard
    /// failure of that single operation; the store does not retry.
    #[error("session store backend error: {0}")]
    Backend(#[from] sea_orm::DbErr),

    /// The configuration surface is unusable, e.g. the required connection
    /// target is missing. Fatal at startup.
    #[error("invalid session store configuration: {0}")]
    Configuration(String),
}
