use crate::configuration::BootstrapConfiguration;
use crate::error::BootstrapResult;
use crate::runner::{self, BootstrapSummary};
use shuttle_container::{ComponentRegistry, ComponentResolver};

/// Bootstrap entry points as methods on a registry
pub trait ComponentRegistryBootstrapExt {
    /// Register every participant found through the default configuration
    fn registry_bootstrap(&mut self) -> BootstrapResult<BootstrapSummary>;

    /// Register every participant found through `configuration`
    fn registry_bootstrap_with(
        &mut self,
        configuration: &BootstrapConfiguration,
    ) -> BootstrapResult<BootstrapSummary>;
}

impl<R: ComponentRegistry> ComponentRegistryBootstrapExt for R {
    fn registry_bootstrap(&mut self) -> BootstrapResult<BootstrapSummary> {
        runner::registry_bootstrap(Some(self), None)
    }

    fn registry_bootstrap_with(
        &mut self,
        configuration: &BootstrapConfiguration,
    ) -> BootstrapResult<BootstrapSummary> {
        runner::registry_bootstrap(Some(self), Some(configuration))
    }
}

/// Bootstrap entry points as methods on a resolver
pub trait ComponentResolverBootstrapExt {
    fn resolver_bootstrap(&self) -> BootstrapResult<BootstrapSummary>;

    fn resolver_bootstrap_with(
        &self,
        configuration: &BootstrapConfiguration,
    ) -> BootstrapResult<BootstrapSummary>;
}

impl<R: ComponentResolver> ComponentResolverBootstrapExt for R {
    fn resolver_bootstrap(&self) -> BootstrapResult<BootstrapSummary> {
        runner::resolver_bootstrap(Some(self), None)
    }

    fn resolver_bootstrap_with(
        &self,
        configuration: &BootstrapConfiguration,
    ) -> BootstrapResult<BootstrapSummary> {
        runner::resolver_bootstrap(Some(self), Some(configuration))
    }
}
