use shuttle_container::{ComponentResolver, ContainerError, ResolvedComponent, ServiceType};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKind {
    Single,
    All,
}

/// One call seen by [`MockComponentResolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveCall {
    pub service: ServiceType,
    pub kind: ResolveKind,
}

/// Resolver answering from instances configured up front.
///
/// `resolve` returns the first instance configured for the service and fails
/// with `ServiceNotFound` when there is none; `resolve_all` returns every
/// configured instance, possibly none. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockComponentResolver {
    instances: HashMap<ServiceType, Vec<ResolvedComponent>>,
    calls: Mutex<Vec<ResolveCall>>,
}

impl MockComponentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `S` with `instance` (appended after earlier ones)
    pub fn with_instance<S, T>(mut self, instance: T) -> Self
    where
        S: ?Sized + 'static,
        T: Send + Sync + 'static,
    {
        self.instances
            .entry(ServiceType::of::<S>())
            .or_default()
            .push(Arc::new(instance));
        self
    }

    /// Recorded calls in call order
    pub fn calls(&self) -> Vec<ResolveCall> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn resolve_count<S: ?Sized + 'static>(&self) -> usize {
        self.count(ServiceType::of::<S>(), ResolveKind::Single)
    }

    pub fn resolve_all_count<S: ?Sized + 'static>(&self) -> usize {
        self.count(ServiceType::of::<S>(), ResolveKind::All)
    }

    fn count(&self, service: ServiceType, kind: ResolveKind) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|call| call.service == service && call.kind == kind)
            .count()
    }

    fn record(&self, service: &ServiceType, kind: ResolveKind) {
        tracing::trace!("Mock resolver: {:?} {}", kind, service);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ResolveCall {
                service: *service,
                kind,
            });
    }
}

impl ComponentResolver for MockComponentResolver {
    fn resolve(&self, service: &ServiceType) -> Result<ResolvedComponent, ContainerError> {
        self.record(service, ResolveKind::Single);

        self.instances
            .get(service)
            .and_then(|instances| instances.first())
            .cloned()
            .ok_or_else(|| ContainerError::service_not_found(service.type_name()))
    }

    fn resolve_all(&self, service: &ServiceType) -> Result<Vec<ResolvedComponent>, ContainerError> {
        self.record(service, ResolveKind::All);

        Ok(self.instances.get(service).cloned().unwrap_or_default())
    }
}
