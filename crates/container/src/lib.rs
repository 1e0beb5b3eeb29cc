//! # shuttle-container
//!
//! The container contracts the bootstrapping layer is written against.
//!
//! Nothing in this crate is a container. It only describes the two sides a
//! container exposes to the rest of an application:
//!
//! - [`ComponentRegistry`]: bind a service type to an implementation type with a [`Lifestyle`]
//! - [`ComponentResolver`]: hand back one or all instances registered for a service type
//!
//! Concrete adapters (or the recording doubles in `shuttle-testing`) implement
//! these traits; `shuttle-bootstrap` drives them.

pub mod error;
pub mod guard;
pub mod lifestyle;
pub mod registry;
pub mod resolver;
pub mod service_type;

pub use error::ContainerError;
pub use guard::Guard;
pub use lifestyle::Lifestyle;
pub use registry::{ComponentRegistry, ComponentRegistryExt};
pub use resolver::{ComponentResolver, ComponentResolverExt, ResolvedComponent};
pub use service_type::ServiceType;
