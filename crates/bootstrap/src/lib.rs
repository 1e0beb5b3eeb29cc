//! # shuttle-bootstrap
//!
//! Lets independent modules contribute their own container registrations
//! without a central composition root knowing about them.
//!
//! A module declares *participants*: types with a parameterless constructor
//! implementing [`ComponentRegistryBootstrap`] and/or
//! [`ComponentResolverBootstrap`]. At startup the host builds a
//! [`BootstrapConfiguration`] (explicitly, or from the `shuttle/bootstrap`
//! configuration section) and hands its registry and resolver to the runners:
//!
//! ```rust,ignore
//! use shuttle_bootstrap::prelude::*;
//!
//! let configuration = BootstrapConfiguration::from_default_sources()?;
//!
//! registry.registry_bootstrap_with(&configuration)?;
//! // build the container ...
//! resolver.resolver_bootstrap_with(&configuration)?;
//! ```
//!
//! Registration participants run once per type even when several scanned
//! modules expose them; resolution participants run once per occurrence.

pub mod catalog;
pub mod configuration;
pub mod error;
pub mod extensions;
pub mod module;
pub mod participant;
pub mod runner;
pub mod types;

pub use catalog::{load_module, ModuleCatalog, ModuleLocator, ModuleService};
pub use configuration::{
    BootstrapConfiguration, BootstrapConfigurationBuilder, BootstrapModuleElement, BootstrapScan,
    BootstrapSection, ConfigurationSectionProvider, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE,
};
pub use error::{BootstrapError, BootstrapResult, ConfigurationError};
pub use extensions::{ComponentRegistryBootstrapExt, ComponentResolverBootstrapExt};
pub use module::{BootstrapModule, ModuleBuilder, ModuleHandle};
pub use participant::{
    ComponentRegistryBootstrap, ComponentResolverBootstrap, ParticipantError, ParticipantResult,
};
pub use runner::{registry_bootstrap, resolver_bootstrap, BootstrapSummary};
pub use types::{types_assignable_to, Activation, Capability, Registration, Resolution, TypeDescriptor};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BootstrapConfiguration, BootstrapError, BootstrapModule, BootstrapScan,
        ComponentRegistryBootstrap, ComponentRegistryBootstrapExt, ComponentResolverBootstrap,
        ComponentResolverBootstrapExt, ModuleCatalog, ModuleService, ParticipantResult,
    };
    pub use shuttle_container::{
        ComponentRegistry, ComponentRegistryExt, ComponentResolver, ComponentResolverExt,
        Lifestyle, ServiceType,
    };
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
