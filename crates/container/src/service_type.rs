use std::any::TypeId;
use std::fmt;

/// Identity of a type handed to a container, either as the service contract
/// or as the implementation bound to it.
///
/// Equality and hashing only consider the `TypeId`; the name is carried for
/// diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct ServiceType {
    type_id: TypeId,
    type_name: &'static str,
}

impl ServiceType {
    /// Create a service type for `T`. Works for trait objects (`dyn Trait`).
    pub fn of<T: 'static + ?Sized>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a service type directly from its parts
    pub fn by_id(type_id: TypeId, type_name: &'static str) -> Self {
        Self { type_id, type_name }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check if this service type is `T` without building another instance
    pub fn is<T: 'static + ?Sized>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

impl PartialEq for ServiceType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ServiceType {}

impl std::hash::Hash for ServiceType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name)
    }
}
