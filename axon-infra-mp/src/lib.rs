#![deny(missing_docs)]
//! Multiprocessing implementation of axon-protocol's MessageInfrastructure.
//!
//! Actors are registered as `Arc<dyn Actor>` and executed on `tokio::spawn`.
//! Lifecycle commands fan out over a `tokio::sync::watch` channel; message
//! channels are bounded `tokio::sync::mpsc` pairs. `stop` joins every actor
//! and reports the first failure. No persistence and no supervision — an
//! actor that fails stays failed until the next `start`.

use async_trait::async_trait;
use axon_protocol::actor::{Actor, ActorContext, CommandSource, LifecycleCommand};
use axon_protocol::channel::{ChannelConfig, Message, RecvPort, SendPort};
use axon_protocol::error::{ActorError, ChannelError, InfraError};
use axon_protocol::id::{ActorId, ChannelId};
use axon_protocol::infrastructure::{InfraState, MessageInfrastructure};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Lifecycle command feed backed by a `watch` receiver.
///
/// A dropped sender reads as `Stop` so actors never wait on an
/// infrastructure that no longer exists.
struct WatchCommands {
    rx: watch::Receiver<LifecycleCommand>,
}

#[async_trait]
impl CommandSource for WatchCommands {
    fn current(&self) -> LifecycleCommand {
        *self.rx.borrow()
    }

    async fn next(&mut self) -> LifecycleCommand {
        match self.rx.changed().await {
            Ok(()) => *self.rx.borrow_and_update(),
            Err(_) => LifecycleCommand::Stop,
        }
    }
}

struct Inner {
    state: InfraState,
    /// Built but not yet executing. Drained into `running` by `start`.
    pending: Vec<(ActorId, Arc<dyn Actor>)>,
    running: Vec<(ActorId, JoinHandle<Result<(), ActorError>>)>,
}

/// Message infrastructure that executes actors as concurrent tokio tasks.
///
/// Construction is cheap and touches no global state; nothing executes
/// until [`MessageInfrastructure::start`]. Suitable for simulation and
/// single-host deployments.
pub struct MultiProcessing {
    commands: watch::Sender<LifecycleCommand>,
    inner: Mutex<Inner>,
}

impl MultiProcessing {
    /// Create a stopped infrastructure with no actors.
    pub fn new() -> Self {
        // Actors spawned before `start` must idle, not exit.
        let (commands, _) = watch::channel(LifecycleCommand::Pause);
        Self {
            commands,
            inner: Mutex::new(Inner {
                state: InfraState::Stopped,
                pending: Vec::new(),
                running: Vec::new(),
            }),
        }
    }

    /// A poisoned lock only means another thread panicked mid-update;
    /// `Inner` holds no invariant a partial update can break, so recover
    /// the guard instead of propagating the panic.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn spawn(
        &self,
        id: ActorId,
        actor: Arc<dyn Actor>,
    ) -> (ActorId, JoinHandle<Result<(), ActorError>>) {
        let ctx = ActorContext::new(
            id.clone(),
            Box::new(WatchCommands {
                rx: self.commands.subscribe(),
            }),
        );
        tracing::debug!(actor = %id, "axon.mp.actor.spawn");
        let handle = tokio::spawn(async move { actor.run(ctx).await });
        (id, handle)
    }
}

impl Default for MultiProcessing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageInfrastructure for MultiProcessing {
    async fn build_actor(&self, id: ActorId, actor: Arc<dyn Actor>) -> Result<(), InfraError> {
        let mut inner = self.lock();
        tracing::debug!(actor = %id, state = ?inner.state, "axon.mp.actor.build");
        if inner.state == InfraState::Stopped {
            inner.pending.push((id, actor));
        } else {
            // Late joiner: runs immediately under the current command.
            let entry = self.spawn(id, actor);
            inner.running.push(entry);
        }
        Ok(())
    }

    fn channel(
        &self,
        config: ChannelConfig,
    ) -> Result<(Box<dyn SendPort>, Box<dyn RecvPort>), InfraError> {
        // mpsc requires nonzero capacity.
        let capacity = config.capacity.max(1);
        let (tx, rx) = mpsc::channel(capacity);
        tracing::debug!(channel = %config.id, capacity, "axon.mp.channel.open");
        Ok((
            Box::new(MpSendPort {
                id: config.id.clone(),
                tx,
            }),
            Box::new(MpRecvPort { id: config.id, rx }),
        ))
    }

    async fn start(&self) -> Result<(), InfraError> {
        let mut inner = self.lock();
        if inner.state != InfraState::Stopped {
            return Err(InfraError::AlreadyRunning);
        }
        self.commands.send_replace(LifecycleCommand::Run);
        inner.state = InfraState::Running;
        let pending = std::mem::take(&mut inner.pending);
        tracing::info!(actors = pending.len(), "axon.mp.start");
        for (id, actor) in pending {
            let entry = self.spawn(id, actor);
            inner.running.push(entry);
        }
        Ok(())
    }

    async fn pause(&self) -> Result<(), InfraError> {
        let mut inner = self.lock();
        if inner.state != InfraState::Running {
            return Err(InfraError::NotRunning("pause requires Running".to_string()));
        }
        self.commands.send_replace(LifecycleCommand::Pause);
        inner.state = InfraState::Paused;
        tracing::info!("axon.mp.pause");
        Ok(())
    }

    async fn resume(&self) -> Result<(), InfraError> {
        let mut inner = self.lock();
        if inner.state != InfraState::Paused {
            return Err(InfraError::NotRunning("resume requires Paused".to_string()));
        }
        self.commands.send_replace(LifecycleCommand::Run);
        inner.state = InfraState::Running;
        tracing::info!("axon.mp.resume");
        Ok(())
    }

    async fn stop(&self) -> Result<(), InfraError> {
        let handles = {
            let mut inner = self.lock();
            self.commands.send_replace(LifecycleCommand::Stop);
            inner.state = InfraState::Stopped;
            inner.pending.clear();
            std::mem::take(&mut inner.running)
        };
        tracing::info!(actors = handles.len(), "axon.mp.stop");

        // Join everything before reporting, so one failure doesn't leave
        // the rest orphaned.
        let mut first_failure: Option<InfraError> = None;
        for (id, handle) in handles {
            let failure = match handle.await {
                Ok(Ok(())) => None,
                Ok(Err(e)) => Some(InfraError::Actor {
                    actor: id.to_string(),
                    message: e.to_string(),
                }),
                Err(e) => Some(InfraError::Actor {
                    actor: id.to_string(),
                    message: format!("join failed: {e}"),
                }),
            };
            if let Some(failure) = failure {
                tracing::warn!(actor = %id, error = %failure, "axon.mp.actor.failed");
                first_failure.get_or_insert(failure);
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn state(&self) -> InfraState {
        self.lock().state
    }
}

struct MpSendPort {
    id: ChannelId,
    tx: mpsc::Sender<Message>,
}

#[async_trait]
impl SendPort for MpSendPort {
    fn channel(&self) -> &ChannelId {
        &self.id
    }

    async fn send(&self, message: Message) -> Result<(), ChannelError> {
        self.tx
            .send(message)
            .await
            .map_err(|_| ChannelError::Closed(self.id.to_string()))
    }
}

struct MpRecvPort {
    id: ChannelId,
    rx: mpsc::Receiver<Message>,
}

#[async_trait]
impl RecvPort for MpRecvPort {
    fn channel(&self) -> &ChannelId {
        &self.id
    }

    async fn recv(&mut self) -> Result<Message, ChannelError> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| ChannelError::Closed(self.id.to_string()))
    }

    fn try_recv(&mut self) -> Result<Message, ChannelError> {
        match self.rx.try_recv() {
            Ok(msg) => Ok(msg),
            Err(mpsc::error::TryRecvError::Empty) => {
                Err(ChannelError::Empty(self.id.to_string()))
            }
            Err(mpsc::error::TryRecvError::Disconnected) => {
                Err(ChannelError::Closed(self.id.to_string()))
            }
        }
    }
}
