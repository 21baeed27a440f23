//! The Channel boundary — one directed message lane between actors.

use crate::error::ChannelError;
use crate::id::ChannelId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Configuration for one channel allocation.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Identifier for the channel. Backends use it in logs and errors.
    pub id: ChannelId,
    /// Maximum number of in-flight messages before senders wait.
    pub capacity: usize,
}

impl ChannelConfig {
    /// Channel config with the given id and capacity.
    pub fn new(id: impl Into<ChannelId>, capacity: usize) -> Self {
        Self {
            id: id.into(),
            capacity,
        }
    }
}

/// The message envelope carried over a channel.
///
/// Payloads are `serde_json::Value`: the interchange format of this stack.
/// Backends move envelopes as-is and never inspect the payload.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The channel this message was sent on.
    pub channel: ChannelId,
    /// Opaque payload.
    pub payload: serde_json::Value,
}

impl Message {
    /// A message on the given channel with the given payload.
    pub fn new(channel: impl Into<ChannelId>, payload: serde_json::Value) -> Self {
        Self {
            channel: channel.into(),
            payload,
        }
    }
}

/// Sending half of a channel.
#[async_trait]
pub trait SendPort: Send + Sync {
    /// The channel this port belongs to.
    fn channel(&self) -> &ChannelId;

    /// Deliver a message, waiting for capacity if the channel is full.
    /// Fails with [`ChannelError::Closed`] once the receiving half is gone.
    async fn send(&self, message: Message) -> Result<(), ChannelError>;
}

/// Receiving half of a channel.
#[async_trait]
pub trait RecvPort: Send {
    /// The channel this port belongs to.
    fn channel(&self) -> &ChannelId;

    /// Wait for the next message. Fails with [`ChannelError::Closed`] once
    /// the sending half is gone and the channel is drained.
    async fn recv(&mut self) -> Result<Message, ChannelError>;

    /// Take a message if one is ready. [`ChannelError::Empty`] when none is,
    /// [`ChannelError::Closed`] once the channel is closed and drained.
    fn try_recv(&mut self) -> Result<Message, ChannelError>;
}
