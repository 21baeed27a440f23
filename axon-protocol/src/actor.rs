//! The Actor boundary — one computational node and the tag that selects
//! the concurrency model driving it.

use crate::error::ActorError;
use crate::id::ActorId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming the concurrency/process model that backs message passing
/// between actors.
///
/// The enum is deliberately open: the selection point must stay easy to
/// extend, but only models with a shipped backend get a variant. Today
/// that is [`ActorType::MultiProcessing`] alone.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    /// Actors run concurrently under the multiprocessing backend.
    MultiProcessing,
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActorType::MultiProcessing => write!(f, "multi_processing"),
        }
    }
}

/// Lifecycle command an infrastructure fans out to every actor it drives.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleCommand {
    /// Process messages.
    Run,
    /// Hold position; keep state, process nothing.
    Pause,
    /// Wind down and return from [`Actor::run`].
    Stop,
}

/// Source of lifecycle commands for one actor.
///
/// Implemented by the backend; the protocol only requires that an actor can
/// read the current command and await the next change. When the feeding side
/// is gone the source must yield [`LifecycleCommand::Stop`] so actors never
/// wait on a dead infrastructure.
#[async_trait]
pub trait CommandSource: Send {
    /// The command currently in force.
    fn current(&self) -> LifecycleCommand;

    /// Wait for the command to change and return the new value.
    async fn next(&mut self) -> LifecycleCommand;
}

/// Everything an actor receives from the infrastructure that drives it.
pub struct ActorContext {
    id: ActorId,
    commands: Box<dyn CommandSource>,
}

impl ActorContext {
    /// Assemble a context. Called by backends, not by actors.
    pub fn new(id: ActorId, commands: Box<dyn CommandSource>) -> Self {
        Self { id, commands }
    }

    /// The identifier this actor was registered under.
    pub fn id(&self) -> &ActorId {
        &self.id
    }

    /// The lifecycle command currently in force.
    pub fn command(&self) -> LifecycleCommand {
        self.commands.current()
    }

    /// Wait for the next lifecycle transition.
    pub async fn next_command(&mut self) -> LifecycleCommand {
        self.commands.next().await
    }
}

impl fmt::Debug for ActorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActorContext").field("id", &self.id).finish()
    }
}

/// One computational node.
///
/// `run` is the node's whole life: the infrastructure calls it once, under
/// whatever concurrency model the backend implements, and the actor is
/// expected to honor the lifecycle commands visible through its context —
/// in particular to return promptly once it observes
/// [`LifecycleCommand::Stop`].
#[async_trait]
pub trait Actor: Send + Sync {
    /// Execute the node until stopped.
    async fn run(&self, ctx: ActorContext) -> Result<(), ActorError>;
}
