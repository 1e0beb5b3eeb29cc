//! Test assertion utilities and helpers
//!
//! Assertions over the recording doubles that return a [`TestError`] with the
//! recorded state in the message, instead of a bare `assert!` failure.

use crate::{MockComponentRegistry, MockComponentResolver, TestError, TestResult};
use shuttle_container::{Lifestyle, ServiceType};

/// Collection of test assertions
pub struct TestAssertions;

impl TestAssertions {
    /// Assert that `S` was bound to `I` with `lifestyle` exactly once
    pub fn assert_registered_once<S, I>(
        registry: &MockComponentRegistry,
        lifestyle: Lifestyle,
    ) -> TestResult<()>
    where
        S: ?Sized + 'static,
        I: 'static,
    {
        let count = registry.count_of::<S, I>(lifestyle);
        if count != 1 {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected {} -> {} ({}) to be registered once, found {} times. Registrations: {:?}",
                    ServiceType::of::<S>(),
                    ServiceType::of::<I>(),
                    lifestyle,
                    count,
                    registry.registrations()
                ),
            });
        }
        Ok(())
    }

    /// Assert that the registry saw exactly `expected` registrations
    pub fn assert_registration_count(
        registry: &MockComponentRegistry,
        expected: usize,
    ) -> TestResult<()> {
        let actual = registry.registrations().len();
        if actual != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected {} registrations, found {}: {:?}",
                    expected,
                    actual,
                    registry.registrations()
                ),
            });
        }
        Ok(())
    }

    /// Assert that `resolve_all` was requested for `S` exactly `expected` times
    pub fn assert_resolved_all<S: ?Sized + 'static>(
        resolver: &MockComponentResolver,
        expected: usize,
    ) -> TestResult<()> {
        let actual = resolver.resolve_all_count::<S>();
        if actual != expected {
            return Err(TestError::Assertion {
                message: format!(
                    "Expected resolve_all({}) {} times, found {}. Calls: {:?}",
                    ServiceType::of::<S>(),
                    expected,
                    actual,
                    resolver.calls()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shuttle_container::{ComponentRegistryExt, ComponentResolverExt};

    trait Cache {}
    struct MemoryCache;

    #[test]
    fn test_assert_registered_once() {
        let mut registry = MockComponentRegistry::new();
        assert!(TestAssertions::assert_registered_once::<dyn Cache, MemoryCache>(&registry, Lifestyle::Singleton).is_err());

        registry.register_type::<dyn Cache, MemoryCache>(Lifestyle::Singleton).unwrap();
        assert!(TestAssertions::assert_registered_once::<dyn Cache, MemoryCache>(&registry, Lifestyle::Singleton).is_ok());
        assert!(TestAssertions::assert_registration_count(&registry, 1).is_ok());

        registry.register_type::<dyn Cache, MemoryCache>(Lifestyle::Singleton).unwrap();
        let error = TestAssertions::assert_registered_once::<dyn Cache, MemoryCache>(&registry, Lifestyle::Singleton)
            .unwrap_err();
        assert!(error.to_string().contains("found 2 times"));
    }

    #[test]
    fn test_assert_resolved_all() {
        let resolver = MockComponentResolver::new();
        resolver.resolve_all_of::<dyn Cache>().unwrap();

        assert!(TestAssertions::assert_resolved_all::<dyn Cache>(&resolver, 1).is_ok());
        assert!(TestAssertions::assert_resolved_all::<dyn Cache>(&resolver, 2).is_err());
    }
}
