//! Example: bootstrapping module participants from a configuration section
//!
//! Two modules declare participants with `bootstrap_module!`. The host reads a
//! `shuttle/bootstrap` section, runs registration against a registry, then
//! runs resolution against the built container.
//!
//! Run with `RUST_LOG=shuttle_bootstrap=debug` to see every scanned module.

use shuttle_bootstrap::prelude::*;
use shuttle_bootstrap::{bootstrap_module, BootstrapSection, ConfigurationSectionProvider};
use shuttle_testing::{MockComponentRegistry, MockComponentResolver};
use tracing_subscriber::EnvFilter;

pub trait MessageSender: Send + Sync {
    fn send(&self, message: &str);
}

#[derive(Default)]
pub struct ConsoleSender;

impl MessageSender for ConsoleSender {
    fn send(&self, message: &str) {
        println!("send: {}", message);
    }
}

pub trait Subscriptions: Send + Sync {}

#[derive(Default)]
pub struct InMemorySubscriptions;

impl Subscriptions for InMemorySubscriptions {}

/// Bindings contributed by the messaging module
#[derive(Default)]
pub struct MessagingRegistrations;

impl ComponentRegistryBootstrap for MessagingRegistrations {
    fn register(&self, registry: &mut dyn ComponentRegistry) -> ParticipantResult {
        registry.register_type::<dyn MessageSender, ConsoleSender>(Lifestyle::Singleton)?;
        registry.register_type::<dyn Subscriptions, InMemorySubscriptions>(Lifestyle::Singleton)?;
        Ok(())
    }
}

/// Touches subscriptions once the container is built
#[derive(Default)]
pub struct SubscriptionWarmup;

impl ComponentResolverBootstrap for SubscriptionWarmup {
    fn resolve(&self, resolver: &dyn ComponentResolver) -> ParticipantResult {
        let subscriptions = resolver.resolve_all_of::<dyn Subscriptions>()?;
        println!("warmed {} subscription store(s)", subscriptions.len());
        Ok(())
    }
}

#[derive(Default)]
pub struct BillingRegistrations;

impl ComponentRegistryBootstrap for BillingRegistrations {
    fn register(&self, registry: &mut dyn ComponentRegistry) -> ParticipantResult {
        registry.register_self::<ConsoleSender>(Lifestyle::Transient)?;
        // fallback sender when no messaging module bound one first
        if !registry.attempt_register::<dyn MessageSender, ConsoleSender>(Lifestyle::Singleton)? {
            println!("MessageSender already bound; billing keeps the existing binding");
        }
        Ok(())
    }
}

bootstrap_module! {
    name: "Shuttle.Messaging",
    registry: [MessagingRegistrations],
    resolver: [SubscriptionWarmup],
}

bootstrap_module! {
    name: "Acme.Billing",
    registry: [BillingRegistrations],
}

const CONFIGURATION: &str = r#"
shuttle:
  bootstrap:
    scan: Shuttle
    modules:
      - name: Acme.Billing
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("Loaded modules: {:?}", ModuleCatalog::global().module_names());

    let provider = ConfigurationSectionProvider::from_yaml(CONFIGURATION)?;
    let configuration = BootstrapSection::get_configuration(&provider, ModuleCatalog::global())?;
    println!(
        "Scan {} over modules: {:?}",
        configuration.scan(),
        configuration.module_names()
    );

    let mut registry = MockComponentRegistry::new();
    let summary = registry.registry_bootstrap_with(&configuration)?;
    println!(
        "Registration: {} participant(s), {} duplicate(s) skipped",
        summary.participants_invoked, summary.duplicates_skipped
    );
    for registration in registry.registrations() {
        println!(
            "  {} -> {} ({})",
            registration.service, registration.implementation, registration.lifestyle
        );
    }

    let resolver = MockComponentResolver::new()
        .with_instance::<dyn Subscriptions, InMemorySubscriptions>(InMemorySubscriptions);
    let summary = resolver.resolver_bootstrap_with(&configuration)?;
    println!("Resolution: {} participant(s)", summary.participants_invoked);

    Ok(())
}
