use crate::catalog::ModuleCatalog;
use crate::configuration::{BootstrapScan, BootstrapSection, ConfigurationSectionProvider};
use crate::error::BootstrapError;
use crate::module::ModuleHandle;

/// Scan policy plus the ordered modules a bootstrap run inspects.
///
/// Immutable once built. Module order is discovery order and duplicates are
/// kept as given.
#[derive(Debug, Clone, Default)]
pub struct BootstrapConfiguration {
    scan: BootstrapScan,
    modules: Vec<ModuleHandle>,
}

impl BootstrapConfiguration {
    pub fn builder() -> BootstrapConfigurationBuilder {
        BootstrapConfigurationBuilder::new()
    }

    /// Configuration read from the default configuration file and resolved
    /// against the process-wide module catalog
    pub fn from_default_sources() -> Result<Self, BootstrapError> {
        let provider = ConfigurationSectionProvider::from_default_location()?;
        BootstrapSection::get_configuration(&provider, ModuleCatalog::global())
    }

    pub fn scan(&self) -> BootstrapScan {
        self.scan
    }

    pub fn modules(&self) -> &[ModuleHandle] {
        &self.modules
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name()).collect()
    }
}

/// Builder for [`BootstrapConfiguration`]
#[derive(Debug, Default)]
pub struct BootstrapConfigurationBuilder {
    scan: BootstrapScan,
    modules: Vec<ModuleHandle>,
}

impl BootstrapConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scan(mut self, scan: BootstrapScan) -> Self {
        self.scan = scan;
        self
    }

    /// Append a module; appending the same module twice keeps both entries
    pub fn add_module(mut self, module: ModuleHandle) -> Self {
        self.modules.push(module);
        self
    }

    pub fn add_modules(mut self, modules: impl IntoIterator<Item = ModuleHandle>) -> Self {
        self.modules.extend(modules);
        self
    }

    pub fn build(self) -> BootstrapConfiguration {
        BootstrapConfiguration {
            scan: self.scan,
            modules: self.modules,
        }
    }
}
