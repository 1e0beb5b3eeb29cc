//! Bootstrap participant contracts
//!
//! A participant is a type with a parameterless constructor that a module
//! declares as taking part in container bootstrapping. The runners create a
//! fresh instance, call it once, and drop it.

use shuttle_container::{ComponentRegistry, ComponentResolver};

/// Error returned by a participant; propagated to the bootstrap caller as-is
pub type ParticipantError = Box<dyn std::error::Error + Send + Sync>;

pub type ParticipantResult = Result<(), ParticipantError>;

/// Participant that binds services into a registry
pub trait ComponentRegistryBootstrap {
    fn register(&self, registry: &mut dyn ComponentRegistry) -> ParticipantResult;
}

/// Participant that resolves dependencies once the container is built,
/// typically to warm singletons or to wire up subscribers.
pub trait ComponentResolverBootstrap {
    fn resolve(&self, resolver: &dyn ComponentResolver) -> ParticipantResult;
}
