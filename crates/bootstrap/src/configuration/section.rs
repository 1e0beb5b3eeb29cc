use crate::catalog::ModuleService;
use crate::configuration::{BootstrapConfiguration, BootstrapScan, ConfigurationSectionProvider};
use crate::error::{BootstrapError, ConfigurationError};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Group of the bootstrap section in the configuration document
pub const SECTION_GROUP: &str = "shuttle";

/// Name of the bootstrap section within its group
pub const SECTION_NAME: &str = "bootstrap";

/// Module names in the framework's own namespace family
pub const SHUTTLE_MODULE_PATTERN: &str = r"^Shuttle\.";

/// The `shuttle/bootstrap` configuration section
///
/// ```yaml
/// shuttle:
///   bootstrap:
///     scan: Shuttle
///     modules:
///       - name: Acme.Billing
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapSection {
    pub scan: BootstrapScan,
    #[serde(alias = "assemblies")]
    pub modules: Vec<BootstrapModuleElement>,
}

/// An explicitly named module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapModuleElement {
    pub name: String,
}

impl BootstrapSection {
    /// Read the section from `provider` and resolve it against `modules`.
    ///
    /// A missing section is not an error: scanning falls back to
    /// [`BootstrapScan::Shuttle`] with no explicit modules.
    pub fn get_configuration(
        provider: &ConfigurationSectionProvider,
        modules: &dyn ModuleService,
    ) -> Result<BootstrapConfiguration, BootstrapError> {
        let section = match provider.open::<BootstrapSection>(SECTION_GROUP, SECTION_NAME)? {
            Some(section) => section,
            None => {
                tracing::debug!(
                    "No '{}/{}' configuration section; using defaults",
                    SECTION_GROUP,
                    SECTION_NAME
                );
                BootstrapSection::default()
            }
        };

        Ok(section.to_configuration(modules)?)
    }

    /// Build the module list this section describes.
    ///
    /// Explicit modules come first, in configuration order. Any policy that
    /// scans then appends every loaded module, and `All` / `Shuttle` append
    /// their own sweep after that. The same module may therefore appear more
    /// than once.
    pub fn to_configuration(
        &self,
        modules: &dyn ModuleService,
    ) -> Result<BootstrapConfiguration, ConfigurationError> {
        let mut builder = BootstrapConfiguration::builder().scan(self.scan);

        for element in &self.modules {
            let module = modules
                .find_module_named(&element.name)
                .ok_or_else(|| ConfigurationError::module_not_found(&element.name))?;

            tracing::debug!("Bootstrap module (explicit): {}", module.name());
            builder = builder.add_module(module);
        }

        if self.scan.scans_loaded_modules() {
            let loaded = modules.loaded_modules();
            tracing::debug!("Bootstrap modules (loaded): {}", loaded.len());
            builder = builder.add_modules(loaded);
        }

        match self.scan {
            BootstrapScan::All => {
                let located = modules.locate_modules();
                tracing::debug!("Bootstrap modules (located): {}", located.len());
                builder = builder.add_modules(located);
            }
            BootstrapScan::Shuttle => {
                let pattern = Regex::new(SHUTTLE_MODULE_PATTERN)?;
                let matching = modules.matching_modules(&pattern);
                tracing::debug!("Bootstrap modules (matching '{}'): {}", pattern, matching.len());
                builder = builder.add_modules(matching);
            }
            BootstrapScan::None | BootstrapScan::Explicit => {}
        }

        Ok(builder.build())
    }
}
