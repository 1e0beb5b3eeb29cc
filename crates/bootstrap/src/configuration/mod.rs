#[allow(clippy::module_inception)]
pub mod configuration;
pub mod provider;
pub mod scan;
pub mod section;

pub use configuration::{BootstrapConfiguration, BootstrapConfigurationBuilder};
pub use provider::{ConfigurationSectionProvider, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
pub use scan::BootstrapScan;
pub use section::{
    BootstrapModuleElement, BootstrapSection, SECTION_GROUP, SECTION_NAME, SHUTTLE_MODULE_PATTERN,
};
