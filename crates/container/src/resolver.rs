use crate::{ContainerError, ServiceType};
use std::any::Any;
use std::sync::Arc;

/// Type-erased instance handed out by a resolver
pub type ResolvedComponent = Arc<dyn Any + Send + Sync>;

/// Resolution side of a container
pub trait ComponentResolver {
    /// Resolve the single instance registered for `service`
    fn resolve(&self, service: &ServiceType) -> Result<ResolvedComponent, ContainerError>;

    /// Resolve every instance registered for `service`; empty when nothing is
    fn resolve_all(&self, service: &ServiceType) -> Result<Vec<ResolvedComponent>, ContainerError>;
}

/// Typed convenience methods for any [`ComponentResolver`]
pub trait ComponentResolverExt: ComponentResolver {
    /// Resolve `T` and downcast it to its concrete type
    fn resolve_as<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, ContainerError> {
        let service = ServiceType::of::<T>();
        self.resolve(&service)?.downcast::<T>().map_err(|_| {
            ContainerError::resolution_failed(
                service.type_name(),
                "resolved instance has a different concrete type",
            )
        })
    }

    /// Resolve every instance registered for `S`
    fn resolve_all_of<S: ?Sized + 'static>(&self) -> Result<Vec<ResolvedComponent>, ContainerError> {
        self.resolve_all(&ServiceType::of::<S>())
    }
}

impl<R: ComponentResolver + ?Sized> ComponentResolverExt for R {}
