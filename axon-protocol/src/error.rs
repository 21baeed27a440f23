//! Error types for each protocol boundary.

use thiserror::Error;

/// Message-infrastructure errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InfraError {
    /// The requested configuration names no recognized backend.
    /// Carries a human-readable message only — callers that need to
    /// branch on the cause are holding the tag they asked for.
    #[error("unsupported configuration: {0}")]
    Unsupported(String),

    /// `start` was called while the infrastructure was already running.
    #[error("already running")]
    AlreadyRunning,

    /// A lifecycle operation required a state the infrastructure is not in.
    #[error("not running: {0}")]
    NotRunning(String),

    /// An actor failed or panicked while the infrastructure drove it.
    #[error("actor {actor} failed: {message}")]
    Actor {
        /// Identifier of the failing actor.
        actor: String,
        /// Failure message.
        message: String,
    },

    /// A channel operation failed at the infrastructure level.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Catch-all. Include context.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Channel port errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The peer port was dropped; no further messages can flow.
    #[error("channel closed: {0}")]
    Closed(String),

    /// A non-blocking receive found no message ready.
    #[error("channel empty: {0}")]
    Empty(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Actor execution errors.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ActorError {
    /// The actor's own computation failed.
    #[error("compute failed: {0}")]
    Compute(String),

    /// A channel the actor depends on failed.
    #[error("channel error: {0}")]
    Channel(#[from] ChannelError),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
