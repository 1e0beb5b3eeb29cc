use shuttle_container::{ComponentRegistry, ContainerError, Lifestyle, ServiceType};

/// One `register` call seen by [`MockComponentRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedRegistration {
    pub service: ServiceType,
    pub implementation: ServiceType,
    pub lifestyle: Lifestyle,
}

/// Registry that records registrations instead of building anything
#[derive(Debug, Default)]
pub struct MockComponentRegistry {
    registrations: Vec<RecordedRegistration>,
    rejected: Vec<ServiceType>,
}

impl MockComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every registration of `S` fail with `RegistrationFailed`
    pub fn reject<S: ?Sized + 'static>(mut self) -> Self {
        self.rejected.push(ServiceType::of::<S>());
        self
    }

    /// All recorded registrations in call order
    pub fn registrations(&self) -> &[RecordedRegistration] {
        &self.registrations
    }

    /// Whether `S` was bound to `I` with `lifestyle` at least once
    pub fn was_registered<S, I>(&self, lifestyle: Lifestyle) -> bool
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        self.count_of::<S, I>(lifestyle) > 0
    }

    /// How many times `S` was bound to `I` with `lifestyle`
    pub fn count_of<S, I>(&self, lifestyle: Lifestyle) -> usize
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        let expected = RecordedRegistration {
            service: ServiceType::of::<S>(),
            implementation: ServiceType::of::<I>(),
            lifestyle,
        };
        self.registrations.iter().filter(|r| **r == expected).count()
    }

    /// How many registrations target the service `S`, whatever the implementation
    pub fn registrations_for<S: ?Sized + 'static>(&self) -> usize {
        self.registrations.iter().filter(|r| r.service.is::<S>()).count()
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }
}

impl ComponentRegistry for MockComponentRegistry {
    fn register(
        &mut self,
        service: ServiceType,
        implementation: ServiceType,
        lifestyle: Lifestyle,
    ) -> Result<(), ContainerError> {
        if self.rejected.contains(&service) {
            return Err(ContainerError::registration_failed(
                service.type_name(),
                "rejected by mock registry",
            ));
        }

        tracing::trace!("Mock registry: {} -> {} ({})", service, implementation, lifestyle);
        self.registrations.push(RecordedRegistration {
            service,
            implementation,
            lifestyle,
        });
        Ok(())
    }

    fn is_registered(&self, service: &ServiceType) -> bool {
        self.registrations.iter().any(|r| r.service == *service)
    }
}
