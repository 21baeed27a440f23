#![deny(missing_docs)]
//! Backend selection: maps an [`ActorType`] tag to a concrete
//! [`MessageInfrastructure`] instance.
//!
//! The factory is a small constructor registry. Its `Default` registers the
//! one shipped backend (multiprocessing); `register` is the seam for adding
//! more without touching this crate. Selection itself is a pure synchronous
//! lookup: a fresh, un-started instance on success, an
//! unsupported-configuration error otherwise.

use axon_infra_mp::MultiProcessing;
use axon_protocol::actor::ActorType;
use axon_protocol::error::InfraError;
use axon_protocol::infrastructure::MessageInfrastructure;
use std::collections::HashMap;

/// Constructor for one backend. Must be pure: a new instance per call,
/// no global state.
pub type BackendCtor = fn() -> Box<dyn MessageInfrastructure>;

/// Registry mapping actor-type tags to backend constructors.
///
/// Every lookup constructs a fresh instance; the factory never caches,
/// pools, starts, or registers what it hands out. Ownership passes to the
/// caller with the return value.
pub struct MessageInfrastructureFactory {
    backends: HashMap<ActorType, BackendCtor>,
}

impl MessageInfrastructureFactory {
    /// A registry with no backends. Mostly useful for tests and for hosts
    /// that want full control over what `create` can return.
    pub fn empty() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register (or replace) the constructor for a tag.
    pub fn register(&mut self, actor_type: ActorType, ctor: BackendCtor) -> &mut Self {
        self.backends.insert(actor_type, ctor);
        self
    }

    /// Construct the message infrastructure for the given tag.
    ///
    /// The instance is newly built and not started; distinct calls return
    /// distinct instances. Unrecognized tags fail with
    /// [`InfraError::Unsupported`] and produce nothing.
    pub fn create(
        &self,
        actor_type: ActorType,
    ) -> Result<Box<dyn MessageInfrastructure>, InfraError> {
        match self.backends.get(&actor_type) {
            Some(ctor) => {
                tracing::debug!(actor_type = %actor_type, "axon.factory.create");
                Ok(ctor())
            }
            None => Err(InfraError::Unsupported(format!(
                "actor type {actor_type}"
            ))),
        }
    }
}

impl Default for MessageInfrastructureFactory {
    /// The shipped registry: multiprocessing only. `ActorType` is open for
    /// future models; any variant without a registered constructor takes
    /// the unsupported branch.
    fn default() -> Self {
        let mut factory = Self::empty();
        factory.register(ActorType::MultiProcessing, || {
            Box::new(MultiProcessing::new())
        });
        factory
    }
}

/// Construct a message infrastructure from the default registry.
///
/// Convenience for the common case; equivalent to
/// `MessageInfrastructureFactory::default().create(actor_type)`.
pub fn create_message_infrastructure(
    actor_type: ActorType,
) -> Result<Box<dyn MessageInfrastructure>, InfraError> {
    MessageInfrastructureFactory::default().create(actor_type)
}
