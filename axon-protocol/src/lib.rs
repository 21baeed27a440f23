//! # axon-protocol — trait boundaries for swappable message-passing runtimes
//!
//! This crate defines the protocol layer of axon: the traits and value types
//! that let computational nodes exchange messages without knowing which
//! concurrency model carries them.
//!
//! ## The Boundaries
//!
//! | Boundary | Trait / Type | What it does |
//! |----------|--------------|--------------|
//! | Infrastructure | [`MessageInfrastructure`] | Owns actors and channels, drives the lifecycle |
//! | Actor | [`Actor`] | One computational node, driven per lifecycle command |
//! | Channel | [`SendPort`], [`RecvPort`] | One directed message lane between nodes |
//! | Selection | [`ActorType`] | Tag naming the concurrency model behind the trait |
//!
//! ## Design Principle
//!
//! Every trait here is operation-defined, not mechanism-defined.
//! [`MessageInfrastructure::build_actor`] means "make this node runnable under
//! your concurrency model" — not "spawn a task" or "fork a process." That is
//! what makes backends swappable: an in-process tokio runtime, an OS-process
//! pool, and a backend that doesn't exist yet all implement the same trait.
//!
//! ## Dependency Notes
//!
//! Message payloads and configuration extension fields use
//! `serde_json::Value`. JSON is the interchange format across this stack, and
//! `serde_json::Value` keeps the traits object safe where a generic
//! `T: Serialize` would not.

#![deny(missing_docs)]

pub mod actor;
pub mod channel;
pub mod error;
pub mod id;
pub mod infrastructure;
pub mod run;

pub use actor::{Actor, ActorContext, ActorType, CommandSource, LifecycleCommand};
pub use channel::{ChannelConfig, Message, RecvPort, SendPort};
pub use error::{ActorError, ChannelError, InfraError};
pub use id::{ActorId, ChannelId};
pub use infrastructure::{InfraState, MessageInfrastructure};
pub use run::{RunCfg, RunCondition, RunTarget};
