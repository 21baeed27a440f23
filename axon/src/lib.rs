#![deny(missing_docs)]
//! # axon — umbrella crate
//!
//! Provides a single import surface for the axon messaging runtime.
//! Re-exports the protocol crate and the shipped backends behind feature
//! flags, plus a `prelude` for the happy path. No behavior is added here:
//! every name resolves to its defining crate's item.

#[cfg(feature = "infra-mp")]
pub use axon_infra_mp;
#[cfg(feature = "core")]
pub use axon_protocol;
#[cfg(feature = "runtime")]
pub use axon_runtime;

/// Happy-path imports for wiring an axon system.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use axon_protocol::{
        Actor, ActorContext, ActorError, ActorId, ActorType, ChannelConfig, ChannelError,
        ChannelId, CommandSource, InfraError, InfraState, LifecycleCommand, Message,
        MessageInfrastructure, RecvPort, RunCfg, RunCondition, RunTarget, SendPort,
    };

    #[cfg(feature = "infra-mp")]
    pub use axon_infra_mp::MultiProcessing;

    #[cfg(feature = "runtime")]
    pub use axon_runtime::{MessageInfrastructureFactory, create_message_infrastructure};
}
