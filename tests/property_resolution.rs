use confit::{ConfigUnit, ResolveError, Resolver, UnitRegistry};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn unit_name(index: usize) -> String {
    format!("unit-{index}")
}

fn bean_name(index: usize) -> String {
    format!("bean-{index}")
}

/// Build a registry of `len` units where unit `i` imports unit `i + 1` and
/// declares one numbered bean.
fn chain_registry(len: usize) -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    for index in 0..len {
        let mut unit = ConfigUnit::new(unit_name(index)).bean(bean_name(index), move || index);
        if index + 1 < len {
            unit = unit.imports([unit_name(index + 1)]);
        }
        registry.register(unit).expect("unit registered");
    }
    registry
}

/// Build a registry of `len` units forming one import ring.
fn ring_registry(len: usize) -> UnitRegistry {
    let mut registry = UnitRegistry::new();
    for index in 0..len {
        let unit = ConfigUnit::new(unit_name(index)).imports([unit_name((index + 1) % len)]);
        registry.register(unit).expect("unit registered");
    }
    registry
}

proptest! {
    /// Property: acyclic chains resolve and the context contains every bean
    /// declared transitively from the root.
    #[test]
    fn prop_chain_resolution_contains_every_bean(len in 1usize..32) {
        let registry = chain_registry(len);
        let context = Resolver::new(&registry)
            .resolve(unit_name(0).as_str())
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(context.len(), len);
        for index in 0..len {
            let value = context.get_as::<usize>(&bean_name(index));
            prop_assert_eq!(value.as_deref().copied(), Some(index));
        }
    }

    /// Property: every ring of imports fails with a cycle error whose path
    /// starts and ends at the same unit.
    #[test]
    fn prop_rings_fail_with_cyclic_import(len in 1usize..16) {
        let registry = ring_registry(len);
        let error = Resolver::new(&registry)
            .resolve(unit_name(0).as_str())
            .expect_err("ring must not resolve");

        match error {
            ResolveError::CyclicImport { path } => {
                prop_assert_eq!(path.len(), len + 1);
                prop_assert_eq!(path.first(), path.last());
            }
            other => return Err(TestCaseError::fail(format!("unexpected error: {other}"))),
        }
    }

    /// Property: resolution over an unchanged registry is idempotent.
    #[test]
    fn prop_resolution_is_idempotent(len in 1usize..16) {
        let registry = chain_registry(len);
        let resolver = Resolver::new(&registry);
        let first = resolver
            .resolve(unit_name(0).as_str())
            .map_err(|error| TestCaseError::fail(error.to_string()))?;
        let second = resolver
            .resolve(unit_name(0).as_str())
            .map_err(|error| TestCaseError::fail(error.to_string()))?;

        prop_assert_eq!(first.len(), second.len());
        for name in first.names() {
            let lhs = first.get_as::<usize>(name);
            let rhs = second.get_as::<usize>(name);
            prop_assert_eq!(lhs.as_deref(), rhs.as_deref());
        }
    }
}
