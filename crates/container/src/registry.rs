use crate::{ContainerError, Lifestyle, ServiceType};

/// Registration side of a container.
///
/// Bootstrap participants receive this as `&mut dyn ComponentRegistry`, so the
/// trait stays object safe; typed helpers live on [`ComponentRegistryExt`].
pub trait ComponentRegistry {
    /// Bind `service` to `implementation` with the given lifestyle
    fn register(
        &mut self,
        service: ServiceType,
        implementation: ServiceType,
        lifestyle: Lifestyle,
    ) -> Result<(), ContainerError>;

    /// Check whether anything has been bound to `service`
    fn is_registered(&self, service: &ServiceType) -> bool;
}

/// Typed convenience methods for any [`ComponentRegistry`]
pub trait ComponentRegistryExt: ComponentRegistry {
    /// Bind `S` (usually `dyn Trait`) to the implementation `I`
    fn register_type<S, I>(&mut self, lifestyle: Lifestyle) -> Result<(), ContainerError>
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        self.register(ServiceType::of::<S>(), ServiceType::of::<I>(), lifestyle)
    }

    /// Bind a concrete type to itself
    fn register_self<I: 'static>(&mut self, lifestyle: Lifestyle) -> Result<(), ContainerError> {
        let service = ServiceType::of::<I>();
        self.register(service, service, lifestyle)
    }

    /// Bind `S` to `I` unless something is already bound to `S`
    fn attempt_register<S, I>(&mut self, lifestyle: Lifestyle) -> Result<bool, ContainerError>
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        if self.is_registered(&ServiceType::of::<S>()) {
            return Ok(false);
        }
        self.register_type::<S, I>(lifestyle)?;
        Ok(true)
    }
}

impl<R: ComponentRegistry + ?Sized> ComponentRegistryExt for R {}
