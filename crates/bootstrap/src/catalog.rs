//! Module catalog for runtime module discovery
//!
//! The catalog stands in for the set of code units resident in the process.
//! Modules are described explicitly (see [`BootstrapModule::builder`]) and
//! either loaded into a caller-owned [`ModuleCatalog`] or, through the
//! [`bootstrap_module!`](crate::bootstrap_module) macro, into the process-wide
//! catalog at program load time.
//!
//! ## Architecture
//!
//! - `ModuleService`: the lookup operations configuration parsing needs
//! - `ModuleLocator`: source of modules that are locatable but not loaded
//! - `ModuleCatalog`: thread-safe `ModuleService` implementation
//! - `ModuleCatalog::global()`: the process-wide instance
//!
//! ## Usage
//!
//! ```rust,ignore
//! shuttle_bootstrap::bootstrap_module! {
//!     name: "Acme.Billing",
//!     registry: [BillingRegistrations],
//! }
//!
//! let billing = ModuleCatalog::global().find_module_named("Acme.Billing");
//! ```

use crate::module::{BootstrapModule, ModuleHandle};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::{Arc, PoisonError, RwLock};

/// Lookup operations over the modules known to the process
pub trait ModuleService {
    /// Find a module by exact name among loaded, then locatable, modules
    fn find_module_named(&self, name: &str) -> Option<ModuleHandle>;

    /// Every module currently loaded, in load order
    fn loaded_modules(&self) -> Vec<ModuleHandle>;

    /// Loaded modules whose name matches `pattern`
    fn matching_modules(&self, pattern: &Regex) -> Vec<ModuleHandle> {
        self.loaded_modules()
            .into_iter()
            .filter(|module| pattern.is_match(module.name()))
            .collect()
    }

    /// Every module that can be located: loaded ones first, then those
    /// reported by locators that are not already loaded
    fn locate_modules(&self) -> Vec<ModuleHandle>;
}

/// Source of modules beyond those already loaded
pub trait ModuleLocator: Send + Sync {
    fn locate(&self) -> Vec<ModuleHandle>;
}

impl<F> ModuleLocator for F
where
    F: Fn() -> Vec<ModuleHandle> + Send + Sync,
{
    fn locate(&self) -> Vec<ModuleHandle> {
        self()
    }
}

/// Thread-safe catalog of loaded modules and module locators
#[derive(Default)]
pub struct ModuleCatalog {
    loaded: RwLock<Vec<ModuleHandle>>,
    locators: RwLock<Vec<Box<dyn ModuleLocator>>>,
}

impl ModuleCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide catalog populated by `bootstrap_module!`
    pub fn global() -> &'static ModuleCatalog {
        &GLOBAL_CATALOG
    }

    /// Load a module into the catalog.
    ///
    /// Loading a name that is already present folds the new types into the
    /// existing module; handles obtained earlier keep their old contents.
    pub fn load(&self, module: BootstrapModule) -> ModuleHandle {
        let mut loaded = self.loaded.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(existing) = loaded.iter_mut().find(|m| m.name() == module.name()) {
            Arc::make_mut(existing).absorb(module);
            tracing::debug!("Extended loaded module: {}", existing.name());
            return existing.clone();
        }

        tracing::debug!("Loaded module: {}", module.name());
        let handle = Arc::new(module);
        loaded.push(handle.clone());
        handle
    }

    /// Register an additional module locator
    pub fn add_locator<L: ModuleLocator + 'static>(&self, locator: L) {
        self.locators
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(locator));
    }

    /// Check if a module with this name is loaded
    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|m| m.name() == name)
    }

    /// Number of loaded modules
    pub fn count(&self) -> usize {
        self.loaded.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Names of all loaded modules in load order
    pub fn module_names(&self) -> Vec<String> {
        self.loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|m| m.name().to_string())
            .collect()
    }

    fn located(&self) -> Vec<ModuleHandle> {
        self.locators
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .flat_map(|locator| locator.locate())
            .collect()
    }
}

impl std::fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleCatalog")
            .field("loaded", &self.module_names())
            .field(
                "locators",
                &self.locators.read().unwrap_or_else(PoisonError::into_inner).len(),
            )
            .finish()
    }
}

impl ModuleService for ModuleCatalog {
    fn find_module_named(&self, name: &str) -> Option<ModuleHandle> {
        let loaded = self
            .loaded
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|m| m.name() == name)
            .cloned();

        loaded.or_else(|| self.located().into_iter().find(|m| m.name() == name))
    }

    fn loaded_modules(&self) -> Vec<ModuleHandle> {
        self.loaded.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn locate_modules(&self) -> Vec<ModuleHandle> {
        let mut modules = self.loaded_modules();

        for module in self.located() {
            if !modules.iter().any(|m| m.name() == module.name()) {
                modules.push(module);
            }
        }

        modules
    }
}

static GLOBAL_CATALOG: Lazy<ModuleCatalog> = Lazy::new(ModuleCatalog::new);

/// Load a module into the process-wide catalog.
///
/// Used by `bootstrap_module!`; callable directly from a host's own startup code.
pub fn load_module(module: BootstrapModule) -> ModuleHandle {
    ModuleCatalog::global().load(module)
}

/// Declare a module and load it into the process-wide catalog before `main` runs.
///
/// Participants are listed by capability and must implement `Default`.
///
/// ```rust,ignore
/// shuttle_bootstrap::bootstrap_module! {
///     name: "Shuttle.Esb",
///     registry: [EsbRegistrations],
///     resolver: [SubscriptionWarmup],
/// }
/// ```
///
/// The expansion uses `#[::ctor::ctor]`, so the declaring crate depends on `ctor`.
#[macro_export]
macro_rules! bootstrap_module {
    (
        name: $name:expr
        $(, registry: [$($registry:ty),* $(,)?])?
        $(, resolver: [$($resolver:ty),* $(,)?])?
        $(,)?
    ) => {
        const _: () = {
            // Runs at static initialization time so the module is loaded before main()
            #[::ctor::ctor]
            fn __shuttle_bootstrap_module() {
                let builder = $crate::BootstrapModule::builder($name);
                $($(let builder = builder.registry_bootstrap::<$registry>();)*)?
                $($(let builder = builder.resolver_bootstrap::<$resolver>();)*)?
                $crate::catalog::load_module(builder.build());
            }
        };
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str) -> BootstrapModule {
        BootstrapModule::builder(name).build()
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = ModuleCatalog::new();
        assert_eq!(catalog.count(), 0);
        assert!(catalog.loaded_modules().is_empty());
        assert!(catalog.locate_modules().is_empty());
    }

    #[test]
    fn test_load_and_find() {
        let catalog = ModuleCatalog::new();
        catalog.load(module("Shuttle.Core"));
        catalog.load(module("Acme.App"));

        assert!(catalog.is_loaded("Acme.App"));
        assert_eq!(catalog.module_names(), vec!["Shuttle.Core", "Acme.App"]);
        assert_eq!(catalog.find_module_named("Acme.App").unwrap().name(), "Acme.App");
        assert!(catalog.find_module_named("acme.app").is_none());
    }

    #[test]
    fn test_loading_same_name_extends_module() {
        #[derive(Default)]
        struct Marker;

        let catalog = ModuleCatalog::new();
        let before = catalog.load(module("Acme.App"));
        catalog.load(BootstrapModule::builder("Acme.App").define::<Marker>().build());

        assert_eq!(catalog.count(), 1);
        assert_eq!(catalog.find_module_named("Acme.App").unwrap().types().len(), 1);
        assert!(before.types().is_empty());
    }

    #[test]
    fn test_matching_modules_only_considers_loaded() {
        let catalog = ModuleCatalog::new();
        catalog.load(module("Shuttle.Esb"));
        catalog.load(module("Acme.App"));
        catalog.load(module("ShuttleLike"));
        catalog.add_locator(|| vec![Arc::new(module("Shuttle.Located"))]);

        let pattern = Regex::new(r"^Shuttle\.").unwrap();
        let names: Vec<_> = catalog
            .matching_modules(&pattern)
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(names, vec!["Shuttle.Esb"]);
    }

    #[test]
    fn test_locate_modules_is_superset_of_loaded() {
        let catalog = ModuleCatalog::new();
        catalog.load(module("Acme.App"));
        catalog.add_locator(|| {
            vec![
                Arc::new(BootstrapModule::builder("Acme.App").build()),
                Arc::new(BootstrapModule::builder("Acme.Plugins").build()),
            ]
        });

        let names: Vec<_> = catalog
            .locate_modules()
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        assert_eq!(names, vec!["Acme.App", "Acme.Plugins"]);
        assert_eq!(catalog.loaded_modules().len(), 1);
        assert!(catalog.find_module_named("Acme.Plugins").is_some());
    }
}
