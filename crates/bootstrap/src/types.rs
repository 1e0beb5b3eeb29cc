//! Type descriptors and the capability query
//!
//! Rust has no runtime reflection, so a module describes its participant
//! types up front: identity, which bootstrap capabilities they implement,
//! and how to construct them without arguments. The runners only ever see
//! these descriptors.

use crate::error::ConfigurationError;
use crate::module::BootstrapModule;
use crate::participant::{ComponentRegistryBootstrap, ComponentResolverBootstrap};
use std::any::TypeId;
use std::fmt;

/// How an instance of a participant type is obtained
pub enum Activation<P: ?Sized> {
    /// Parameterless constructor
    DefaultConstructor(fn() -> Box<P>),
    /// The type implements the capability but cannot be built without arguments
    Unconstructible,
}

impl<P: ?Sized> Clone for Activation<P> {
    fn clone(&self) -> Self {
        match self {
            Activation::DefaultConstructor(factory) => Activation::DefaultConstructor(*factory),
            Activation::Unconstructible => Activation::Unconstructible,
        }
    }
}

impl<P: ?Sized> fmt::Debug for Activation<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activation::DefaultConstructor(_) => write!(f, "DefaultConstructor(<factory_fn>)"),
            Activation::Unconstructible => write!(f, "Unconstructible"),
        }
    }
}

/// A bootstrap capability a type can be queried for
pub trait Capability: 'static {
    /// Participant trait object produced on activation
    type Participant: ?Sized;

    /// Contract name used in diagnostics
    const NAME: &'static str;

    fn activation(descriptor: &TypeDescriptor) -> Option<&Activation<Self::Participant>>;
}

/// Capability of types implementing [`ComponentRegistryBootstrap`]
#[derive(Debug)]
pub enum Registration {}

/// Capability of types implementing [`ComponentResolverBootstrap`]
#[derive(Debug)]
pub enum Resolution {}

impl Capability for Registration {
    type Participant = dyn ComponentRegistryBootstrap;

    const NAME: &'static str = "ComponentRegistryBootstrap";

    fn activation(descriptor: &TypeDescriptor) -> Option<&Activation<Self::Participant>> {
        descriptor.registry_bootstrap.as_ref()
    }
}

impl Capability for Resolution {
    type Participant = dyn ComponentResolverBootstrap;

    const NAME: &'static str = "ComponentResolverBootstrap";

    fn activation(descriptor: &TypeDescriptor) -> Option<&Activation<Self::Participant>> {
        descriptor.resolver_bootstrap.as_ref()
    }
}

/// Metadata for one type defined by a module
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    type_id: TypeId,
    type_name: &'static str,
    registry_bootstrap: Option<Activation<dyn ComponentRegistryBootstrap>>,
    resolver_bootstrap: Option<Activation<dyn ComponentResolverBootstrap>>,
}

impl TypeDescriptor {
    /// Describe `T` with no bootstrap capabilities
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            registry_bootstrap: None,
            resolver_bootstrap: None,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the type is assignable to capability `C`
    pub fn implements<C: Capability>(&self) -> bool {
        C::activation(self).is_some()
    }

    /// Whether the type can be activated for `C` without arguments
    pub fn has_default_constructor<C: Capability>(&self) -> bool {
        matches!(C::activation(self), Some(Activation::DefaultConstructor(_)))
    }

    /// Construct a fresh participant instance for capability `C`
    pub fn activate<C: Capability>(&self) -> Result<Box<C::Participant>, ConfigurationError> {
        match C::activation(self) {
            Some(Activation::DefaultConstructor(factory)) => Ok(factory()),
            Some(Activation::Unconstructible) => Err(ConfigurationError::DefaultConstructorRequired {
                capability: C::NAME,
                type_name: self.type_name.to_string(),
            }),
            None => Err(ConfigurationError::NotAssignable {
                capability: C::NAME,
                type_name: self.type_name.to_string(),
            }),
        }
    }

    pub(crate) fn set_registry_bootstrap(&mut self, activation: Activation<dyn ComponentRegistryBootstrap>) {
        self.registry_bootstrap = Some(activation);
    }

    pub(crate) fn set_resolver_bootstrap(&mut self, activation: Activation<dyn ComponentResolverBootstrap>) {
        self.resolver_bootstrap = Some(activation);
    }
}

pub(crate) fn construct_registry_bootstrap<T>() -> Box<dyn ComponentRegistryBootstrap>
where
    T: ComponentRegistryBootstrap + Default + 'static,
{
    Box::new(T::default())
}

pub(crate) fn construct_resolver_bootstrap<T>() -> Box<dyn ComponentResolverBootstrap>
where
    T: ComponentResolverBootstrap + Default + 'static,
{
    Box::new(T::default())
}

/// Every type of `module` assignable to `C`, in declaration order.
///
/// The iterator is lazy and borrows the module; call again to restart.
pub fn types_assignable_to<C: Capability>(
    module: &BootstrapModule,
) -> impl Iterator<Item = &TypeDescriptor> + '_ {
    module.types().iter().filter(|descriptor| descriptor.implements::<C>())
}
