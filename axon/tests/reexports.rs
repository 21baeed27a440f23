//! The umbrella surface is identity-preserving: names reached through
//! `axon` are the same items the defining crates export.

use axon::prelude::*;

#[test]
fn prelude_tag_is_the_protocol_tag() {
    // A value built through the umbrella is accepted by an API typed
    // against the defining crate.
    fn takes_protocol_tag(tag: axon::axon_protocol::ActorType) -> String {
        tag.to_string()
    }
    assert_eq!(takes_protocol_tag(ActorType::MultiProcessing), "multi_processing");
}

#[test]
fn prelude_backend_is_the_infra_mp_backend() {
    fn takes_backend(_: &axon::axon_infra_mp::MultiProcessing) {}
    let backend = MultiProcessing::new();
    takes_backend(&backend);
}

#[test]
fn prelude_factory_is_the_runtime_factory() {
    let factory: axon::axon_runtime::MessageInfrastructureFactory =
        MessageInfrastructureFactory::default();
    let infra = factory.create(ActorType::MultiProcessing).unwrap();
    assert_eq!(infra.state(), InfraState::Stopped);
}

#[test]
fn free_function_create_resolves() {
    let infra = create_message_infrastructure(ActorType::MultiProcessing).unwrap();
    assert_eq!(infra.state(), InfraState::Stopped);
}
