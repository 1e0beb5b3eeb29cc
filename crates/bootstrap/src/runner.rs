//! Registration and resolution runners
//!
//! Both runners walk the configured modules in order, ask each module for its
//! types assignable to the runner's capability, construct every such type
//! through its parameterless constructor and call it once.
//!
//! The registration runner skips a type it has already invoked in the same
//! run, so a participant reachable through several modules registers its
//! bindings once. The resolution runner invokes every occurrence.
//!
//! Any failure ends the run immediately. Work done by earlier participants
//! is left in place.

use crate::configuration::BootstrapConfiguration;
use crate::error::{BootstrapError, BootstrapResult};
use crate::participant::{ParticipantError, ParticipantResult};
use crate::types::{Capability, Registration, Resolution, TypeDescriptor};
use shuttle_container::{ComponentRegistry, ComponentResolver, Guard};
use std::any::TypeId;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Outcome of a completed bootstrap run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSummary {
    /// Contract name of the capability that was bootstrapped
    pub capability: &'static str,
    /// Module entries walked, counting duplicates
    pub modules_scanned: usize,
    pub participants_invoked: usize,
    /// Occurrences skipped because the type already ran (registration only)
    pub duplicates_skipped: usize,
    pub elapsed: Duration,
}

impl BootstrapSummary {
    fn new(capability: &'static str) -> Self {
        Self {
            capability,
            modules_scanned: 0,
            participants_invoked: 0,
            duplicates_skipped: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Construct every registration participant once and let it register into
/// `registry`.
///
/// When `configuration` is `None` it is read with
/// [`BootstrapConfiguration::from_default_sources`]. A `None` registry fails
/// before any configuration is read or module scanned.
pub fn registry_bootstrap(
    registry: Option<&mut dyn ComponentRegistry>,
    configuration: Option<&BootstrapConfiguration>,
) -> BootstrapResult<BootstrapSummary> {
    let registry = Guard::against_null(registry, "registry")?;

    with_configuration(configuration, |configuration| {
        run::<Registration>(configuration, true, |participant| {
            participant.register(&mut *registry)
        })
    })
}

/// Construct every resolution participant found and let it resolve from
/// `resolver`. A participant reachable through several modules runs once per
/// occurrence.
pub fn resolver_bootstrap(
    resolver: Option<&dyn ComponentResolver>,
    configuration: Option<&BootstrapConfiguration>,
) -> BootstrapResult<BootstrapSummary> {
    let resolver = Guard::against_null(resolver, "resolver")?;

    with_configuration(configuration, |configuration| {
        run::<Resolution>(configuration, false, |participant| participant.resolve(resolver))
    })
}

fn with_configuration<T>(
    configuration: Option<&BootstrapConfiguration>,
    f: impl FnOnce(&BootstrapConfiguration) -> BootstrapResult<T>,
) -> BootstrapResult<T> {
    match configuration {
        Some(configuration) => f(configuration),
        None => f(&BootstrapConfiguration::from_default_sources()?),
    }
}

fn run<C: Capability>(
    configuration: &BootstrapConfiguration,
    deduplicate: bool,
    mut invoke: impl FnMut(&C::Participant) -> ParticipantResult,
) -> BootstrapResult<BootstrapSummary> {
    let start_time = Instant::now();
    let mut summary = BootstrapSummary::new(C::NAME);
    let mut completed: HashSet<TypeId> = HashSet::new();

    tracing::debug!(
        "Starting {} bootstrap over {} modules (scan: {})",
        C::NAME,
        configuration.modules().len(),
        configuration.scan()
    );

    for module in configuration.modules() {
        summary.modules_scanned += 1;
        tracing::debug!("Scanning module '{}' for {}", module.name(), C::NAME);

        for descriptor in module.types_assignable_to::<C>() {
            if deduplicate && completed.contains(&descriptor.type_id()) {
                summary.duplicates_skipped += 1;
                tracing::debug!("Skipping already bootstrapped type: {}", descriptor.type_name());
                continue;
            }

            let participant = descriptor.activate::<C>()?;

            invoke(&*participant).map_err(|source| participant_failed::<C>(descriptor, source))?;

            if deduplicate {
                completed.insert(descriptor.type_id());
            }
            summary.participants_invoked += 1;
            tracing::debug!("Bootstrapped {}: {}", C::NAME, descriptor.type_name());
        }
    }

    summary.elapsed = start_time.elapsed();

    tracing::info!(
        "{} bootstrap completed in {:?}: {} participants from {} modules ({} duplicates skipped)",
        C::NAME,
        summary.elapsed,
        summary.participants_invoked,
        summary.modules_scanned,
        summary.duplicates_skipped
    );

    Ok(summary)
}

fn participant_failed<C: Capability>(
    descriptor: &TypeDescriptor,
    source: ParticipantError,
) -> BootstrapError {
    tracing::error!(
        "{} participant '{}' failed: {}",
        C::NAME,
        descriptor.type_name(),
        source
    );

    BootstrapError::Participant {
        participant: descriptor.type_name().to_string(),
        capability: C::NAME,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::BootstrapScan;
    use crate::error::ConfigurationError;
    use crate::module::BootstrapModule;
    use crate::participant::{ComponentRegistryBootstrap, ComponentResolverBootstrap};
    use shuttle_container::{ComponentRegistryExt, ContainerError, Lifestyle, ServiceType};
    use shuttle_testing::{MockComponentRegistry, MockComponentResolver};

    trait Dependency {}
    struct DependencyImpl;

    #[derive(Default)]
    struct DependencyBootstrap;

    impl ComponentRegistryBootstrap for DependencyBootstrap {
        fn register(&self, registry: &mut dyn ComponentRegistry) -> ParticipantResult {
            registry.register_type::<dyn Dependency, DependencyImpl>(Lifestyle::Singleton)?;
            Ok(())
        }
    }

    impl ComponentResolverBootstrap for DependencyBootstrap {
        fn resolve(&self, resolver: &dyn ComponentResolver) -> ParticipantResult {
            resolver.resolve_all(&ServiceType::of::<dyn Dependency>())?;
            Ok(())
        }
    }

    #[derive(Default)]
    struct FailingBootstrap;

    impl ComponentRegistryBootstrap for FailingBootstrap {
        fn register(&self, _registry: &mut dyn ComponentRegistry) -> ParticipantResult {
            Err(ContainerError::registration_failed("FailingBootstrap", "refused").into())
        }
    }

    fn single_module_configuration() -> BootstrapConfiguration {
        BootstrapConfiguration::builder()
            .scan(BootstrapScan::None)
            .add_module(
                BootstrapModule::builder("Acme.App")
                    .registry_bootstrap::<DependencyBootstrap>()
                    .resolver_bootstrap::<DependencyBootstrap>()
                    .into_handle(),
            )
            .build()
    }

    #[test]
    fn test_registry_bootstrap_invokes_participant() {
        let mut registry = MockComponentRegistry::new();
        let configuration = single_module_configuration();

        let summary = registry_bootstrap(Some(&mut registry), Some(&configuration)).unwrap();

        assert_eq!(summary.capability, "ComponentRegistryBootstrap");
        assert_eq!(summary.participants_invoked, 1);
        assert_eq!(summary.modules_scanned, 1);
        assert!(registry.was_registered::<dyn Dependency, DependencyImpl>(Lifestyle::Singleton));
        assert_eq!(registry.registrations().len(), 1);
    }

    #[test]
    fn test_resolver_bootstrap_invokes_participant() {
        let resolver = MockComponentResolver::new();
        let configuration = single_module_configuration();

        let summary = resolver_bootstrap(Some(&resolver), Some(&configuration)).unwrap();

        assert_eq!(summary.participants_invoked, 1);
        assert_eq!(resolver.resolve_all_count::<dyn Dependency>(), 1);
    }

    #[test]
    fn test_null_registry_is_rejected() {
        let configuration = single_module_configuration();

        let result = registry_bootstrap(None, Some(&configuration));

        match result {
            Err(BootstrapError::Argument(ContainerError::ArgumentNull { parameter })) => {
                assert_eq!(parameter, "registry")
            }
            other => panic!("Expected ArgumentNull, got {:?}", other),
        }
    }

    #[test]
    fn test_null_resolver_is_rejected() {
        let result = resolver_bootstrap(None, None);
        assert!(result.unwrap_err().is_argument());
    }

    #[test]
    fn test_participant_failure_propagates_source() {
        let mut registry = MockComponentRegistry::new();
        let configuration = BootstrapConfiguration::builder()
            .add_module(
                BootstrapModule::builder("Acme.Broken")
                    .registry_bootstrap::<FailingBootstrap>()
                    .registry_bootstrap::<DependencyBootstrap>()
                    .into_handle(),
            )
            .build();

        let error = registry_bootstrap(Some(&mut registry), Some(&configuration)).unwrap_err();

        match &error {
            BootstrapError::Participant { participant, capability, .. } => {
                assert!(participant.ends_with("FailingBootstrap"));
                assert_eq!(*capability, "ComponentRegistryBootstrap");
            }
            other => panic!("Expected Participant error, got {:?}", other),
        }

        let source = error.into_participant_error().unwrap();
        assert!(source.downcast_ref::<ContainerError>().is_some());
        assert!(registry.registrations().is_empty());
    }

    #[test]
    fn test_unconstructible_participant_is_configuration_error() {
        struct NeedsArguments(#[allow(dead_code)] u32);

        impl ComponentRegistryBootstrap for NeedsArguments {
            fn register(&self, _registry: &mut dyn ComponentRegistry) -> ParticipantResult {
                Ok(())
            }
        }

        let mut registry = MockComponentRegistry::new();
        let configuration = BootstrapConfiguration::builder()
            .add_module(
                BootstrapModule::builder("Acme.App")
                    .unconstructible_registry_bootstrap::<NeedsArguments>()
                    .registry_bootstrap::<DependencyBootstrap>()
                    .into_handle(),
            )
            .build();

        let error = registry_bootstrap(Some(&mut registry), Some(&configuration)).unwrap_err();

        match error.as_configuration() {
            Some(ConfigurationError::DefaultConstructorRequired { capability, type_name }) => {
                assert_eq!(*capability, "ComponentRegistryBootstrap");
                assert!(type_name.ends_with("NeedsArguments"));
            }
            other => panic!("Expected DefaultConstructorRequired, got {:?}", other),
        }
        assert!(registry.registrations().is_empty());
    }
}
