//! # shuttle-testing
//!
//! Test doubles for code that talks to a container through the
//! `shuttle-container` contracts.
//!
//! - **MockComponentRegistry**: records every `register` call for later verification
//! - **MockComponentResolver**: answers `resolve` / `resolve_all` from configured
//!   instances and counts the calls it receives
//! - **TestAssertions**: assertion helpers returning descriptive errors
//!
//! ## Quick Start
//!
//! ```rust
//! use shuttle_container::{ComponentRegistryExt, Lifestyle};
//! use shuttle_testing::prelude::*;
//!
//! trait Clock {}
//! struct SystemClock;
//!
//! let mut registry = MockComponentRegistry::new();
//! registry.register_type::<dyn Clock, SystemClock>(Lifestyle::Singleton).unwrap();
//!
//! TestAssertions::assert_registered_once::<dyn Clock, SystemClock>(&registry, Lifestyle::Singleton).unwrap();
//! ```

pub mod assertions;
pub mod registry;
pub mod resolver;

pub use assertions::TestAssertions;
pub use registry::{MockComponentRegistry, RecordedRegistration};
pub use resolver::{MockComponentResolver, ResolveCall, ResolveKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        assertions::TestAssertions,
        registry::{MockComponentRegistry, RecordedRegistration},
        resolver::{MockComponentResolver, ResolveCall, ResolveKind},
        TestError, TestResult,
    };
}

#[derive(thiserror::Error, Debug)]
pub enum TestError {
    #[error("Assertion failed: {message}")]
    Assertion { message: String },
}

pub type TestResult<T> = Result<T, TestError>;
