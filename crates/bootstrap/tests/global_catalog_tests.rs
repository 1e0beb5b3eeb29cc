//! Tests for modules declared with `bootstrap_module!` and configuration read
//! from the default location.
//!
//! These share the process-wide catalog and the `SHUTTLE_CONFIG` variable, so
//! anything touching the environment runs under `#[serial]`.

use serial_test::serial;
use shuttle_bootstrap::prelude::*;
use shuttle_bootstrap::{bootstrap_module, ConfigurationError, CONFIG_PATH_ENV};
use shuttle_testing::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

trait Clock {}

#[derive(Default)]
struct SystemClock;

impl Clock for SystemClock {}

#[derive(Default)]
struct ClockRegistrations;

impl ComponentRegistryBootstrap for ClockRegistrations {
    fn register(&self, registry: &mut dyn ComponentRegistry) -> ParticipantResult {
        registry.register_type::<dyn Clock, SystemClock>(Lifestyle::Singleton)?;
        Ok(())
    }
}

#[derive(Default)]
struct ClockWarmup;

impl ComponentResolverBootstrap for ClockWarmup {
    fn resolve(&self, resolver: &dyn ComponentResolver) -> ParticipantResult {
        resolver.resolve_all_of::<dyn Clock>()?;
        Ok(())
    }
}

bootstrap_module! {
    name: "Shuttle.Clock",
    registry: [ClockRegistrations],
    resolver: [ClockWarmup],
}

bootstrap_module! {
    name: "Acme.Clock",
    registry: [ClockRegistrations],
}

fn write_config(yaml: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("shuttle.yaml");
    std::fs::write(&path, yaml).expect("write config");
    (dir, path)
}

#[test]
fn test_declared_modules_are_loaded_before_main() {
    let catalog = ModuleCatalog::global();

    assert!(catalog.is_loaded("Shuttle.Clock"));
    assert!(catalog.is_loaded("Acme.Clock"));

    let shuttle = catalog.find_module_named("Shuttle.Clock").unwrap();
    assert_eq!(shuttle.types().len(), 2);
}

#[test]
#[serial]
fn test_bootstrap_reads_configuration_named_by_environment() {
    let (_dir, path) = write_config(
        "shuttle:\n  bootstrap:\n    scan: None\n    modules:\n      - name: Acme.Clock\n",
    );
    std::env::set_var(CONFIG_PATH_ENV, &path);

    let mut registry = MockComponentRegistry::new();
    let resolver = MockComponentResolver::new();
    let registered = registry.registry_bootstrap();
    let resolved = resolver.resolver_bootstrap();

    std::env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(registered.unwrap().modules_scanned, 1);
    assert_eq!(resolved.unwrap().participants_invoked, 0);
    TestAssertions::assert_registered_once::<dyn Clock, SystemClock>(&registry, Lifestyle::Singleton)
        .unwrap();
    assert!(resolver.calls().is_empty());
}

#[test]
#[serial]
fn test_default_scan_without_configuration_file() {
    std::env::remove_var(CONFIG_PATH_ENV);

    let configuration = BootstrapConfiguration::from_default_sources().unwrap();
    assert_eq!(configuration.scan(), BootstrapScan::Shuttle);
    assert_eq!(
        configuration
            .module_names()
            .iter()
            .filter(|name| **name == "Shuttle.Clock")
            .count(),
        2
    );

    let mut registry = MockComponentRegistry::new();
    let resolver = MockComponentResolver::new();
    registry.registry_bootstrap().unwrap();
    resolver.resolver_bootstrap().unwrap();

    // ClockRegistrations is in both modules but registers once
    TestAssertions::assert_registered_once::<dyn Clock, SystemClock>(&registry, Lifestyle::Singleton)
        .unwrap();
    // ClockWarmup runs for each listing of Shuttle.Clock
    TestAssertions::assert_resolved_all::<dyn Clock>(&resolver, 2).unwrap();
}

#[test]
#[serial]
fn test_missing_configuration_file_named_by_environment() {
    std::env::set_var(CONFIG_PATH_ENV, "does/not/exist/shuttle.yaml");

    let result = BootstrapConfiguration::from_default_sources();

    std::env::remove_var(CONFIG_PATH_ENV);

    let error = result.unwrap_err();
    assert!(matches!(
        error.as_configuration(),
        Some(ConfigurationError::Io { .. })
    ));
}
