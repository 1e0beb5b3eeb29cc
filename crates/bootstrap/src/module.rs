use crate::participant::{ComponentRegistryBootstrap, ComponentResolverBootstrap};
use crate::types::{
    construct_registry_bootstrap, construct_resolver_bootstrap, types_assignable_to, Activation,
    Capability, Registration, Resolution, TypeDescriptor,
};
use std::any::TypeId;
use std::sync::Arc;

/// Shared handle to a module; configurations may list the same module twice
pub type ModuleHandle = Arc<BootstrapModule>;

/// A named unit of code and the types it defines
#[derive(Debug, Clone)]
pub struct BootstrapModule {
    name: String,
    types: Vec<TypeDescriptor>,
}

impl BootstrapModule {
    /// Start describing a module
    pub fn builder(name: impl Into<String>) -> ModuleBuilder {
        ModuleBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All described types in declaration order
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Types of this module assignable to `C`, in declaration order
    pub fn types_assignable_to<C: Capability>(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
        types_assignable_to::<C>(self)
    }

    /// Fold the types of `other` into this module, keeping first-declared order.
    /// Capabilities declared for an already known type are merged into it.
    pub(crate) fn absorb(&mut self, other: BootstrapModule) {
        for descriptor in other.types {
            self.merge_type(descriptor);
        }
    }

    fn merge_type(&mut self, descriptor: TypeDescriptor) {
        match self.position(descriptor.type_id()) {
            Some(index) => {
                let existing = &mut self.types[index];
                if let Some(activation) = Registration::activation(&descriptor) {
                    existing.set_registry_bootstrap(activation.clone());
                }
                if let Some(activation) = Resolution::activation(&descriptor) {
                    existing.set_resolver_bootstrap(activation.clone());
                }
            }
            None => self.types.push(descriptor),
        }
    }

    fn position(&self, type_id: TypeId) -> Option<usize> {
        self.types.iter().position(|descriptor| descriptor.type_id() == type_id)
    }

    fn descriptor_mut<T: 'static>(&mut self) -> &mut TypeDescriptor {
        let index = match self.position(TypeId::of::<T>()) {
            Some(index) => index,
            None => {
                self.types.push(TypeDescriptor::of::<T>());
                self.types.len() - 1
            }
        };
        &mut self.types[index]
    }
}

/// Builder describing the types of a [`BootstrapModule`].
///
/// Declaring the same type more than once keeps its original position and
/// adds the new capability to it.
#[derive(Debug)]
pub struct ModuleBuilder {
    module: BootstrapModule,
}

impl ModuleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            module: BootstrapModule {
                name: name.into(),
                types: Vec::new(),
            },
        }
    }

    /// Declare a registration participant built through `Default`
    pub fn registry_bootstrap<T>(mut self) -> Self
    where
        T: ComponentRegistryBootstrap + Default + 'static,
    {
        self.module
            .descriptor_mut::<T>()
            .set_registry_bootstrap(Activation::DefaultConstructor(construct_registry_bootstrap::<T>));
        self
    }

    /// Declare a resolution participant built through `Default`
    pub fn resolver_bootstrap<T>(mut self) -> Self
    where
        T: ComponentResolverBootstrap + Default + 'static,
    {
        self.module
            .descriptor_mut::<T>()
            .set_resolver_bootstrap(Activation::DefaultConstructor(construct_resolver_bootstrap::<T>));
        self
    }

    /// Declare a type implementing [`ComponentRegistryBootstrap`] that has no
    /// parameterless constructor. Bootstrapping fails when it is reached.
    pub fn unconstructible_registry_bootstrap<T>(mut self) -> Self
    where
        T: ComponentRegistryBootstrap + 'static,
    {
        self.module
            .descriptor_mut::<T>()
            .set_registry_bootstrap(Activation::Unconstructible);
        self
    }

    /// Resolution counterpart of [`Self::unconstructible_registry_bootstrap`]
    pub fn unconstructible_resolver_bootstrap<T>(mut self) -> Self
    where
        T: ComponentResolverBootstrap + 'static,
    {
        self.module
            .descriptor_mut::<T>()
            .set_resolver_bootstrap(Activation::Unconstructible);
        self
    }

    /// Declare a type that takes no part in bootstrapping
    pub fn define<T: 'static>(mut self) -> Self {
        self.module.descriptor_mut::<T>();
        self
    }

    pub fn build(self) -> BootstrapModule {
        self.module
    }

    /// Build straight into a shareable handle
    pub fn into_handle(self) -> ModuleHandle {
        Arc::new(self.module)
    }
}
