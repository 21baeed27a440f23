//! The Infrastructure boundary — how actors and channels come to exist and
//! how their shared lifecycle is driven.

use crate::actor::Actor;
use crate::channel::{ChannelConfig, RecvPort, SendPort};
use crate::error::InfraError;
use crate::id::ActorId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Lifecycle state of a message infrastructure.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfraState {
    /// Constructed or wound down; actors are not executing.
    Stopped,
    /// Actors are executing and messages flow.
    Running,
    /// Actors hold position; state is kept, nothing is processed.
    Paused,
}

/// The subsystem that owns actors and channels and transports messages
/// between concurrently executing nodes.
///
/// Implementations differ in their concurrency model — that is the whole
/// point of the [`crate::ActorType`] selection tag. The trait is
/// transport-agnostic: `build_actor` might spawn a tokio task or fork a
/// process; calling code cannot tell and must not care.
///
/// Contract:
/// - `build_actor` and `channel` are accepted before `start`; backends may
///   also accept them later, but the portable pattern is build, then start.
/// - `start` is valid only from [`InfraState::Stopped`] and fails with
///   [`InfraError::AlreadyRunning`] otherwise.
/// - `pause` is valid only from [`InfraState::Running`].
/// - `stop` is accepted from any state and is idempotent. It joins every
///   actor before returning; an actor failure or panic surfaces as
///   [`InfraError::Actor`].
#[async_trait]
pub trait MessageInfrastructure: Send + Sync {
    /// Make a node runnable under this infrastructure's concurrency model.
    /// The actor does not execute until [`MessageInfrastructure::start`].
    async fn build_actor(&self, id: ActorId, actor: Arc<dyn Actor>) -> Result<(), InfraError>;

    /// Allocate a directed message lane and hand both ends to the caller.
    fn channel(
        &self,
        config: ChannelConfig,
    ) -> Result<(Box<dyn SendPort>, Box<dyn RecvPort>), InfraError>;

    /// Begin executing every built actor.
    async fn start(&self) -> Result<(), InfraError>;

    /// Suspend message processing without losing actor state.
    async fn pause(&self) -> Result<(), InfraError>;

    /// Resume after a pause.
    async fn resume(&self) -> Result<(), InfraError>;

    /// Wind everything down and join every actor.
    async fn stop(&self) -> Result<(), InfraError>;

    /// Current lifecycle state.
    fn state(&self) -> InfraState;
}

impl std::fmt::Debug for dyn MessageInfrastructure + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageInfrastructure")
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
