use super::*;
use crate::error::RegistryError;
use crate::types::UnitName;
use crate::unit::ConfigUnit;

fn hello_unit() -> ConfigUnit {
    ConfigUnit::new("hello").bean("greeting", || "hello".to_string())
}

fn extra_unit() -> ConfigUnit {
    ConfigUnit::new("extra").bean("suffix", || "!".to_string())
}

#[test]
fn registers_units_in_registration_order() {
    let mut registry = UnitRegistry::new();
    registry.register(hello_unit()).expect("hello registered");
    registry.register(extra_unit()).expect("extra registered");

    let names: Vec<&UnitName> = registry.names().collect();
    assert_eq!(names, vec![&UnitName::from("hello"), &UnitName::from("extra")]);
    assert_eq!(registry.len(), 2);
}

#[test]
fn register_rejects_duplicate_names() {
    let mut registry = UnitRegistry::new();
    registry.register(hello_unit()).expect("hello registered");

    let error = registry.register(hello_unit()).expect_err("duplicate rejected");
    assert_eq!(
        error,
        RegistryError::DuplicateUnit {
            name: UnitName::from("hello"),
        }
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn unit_by_id_returns_registered_unit() {
    let mut registry = UnitRegistry::new();
    registry.register(hello_unit()).expect("hello registered");

    let registered = registry.unit_by_id("hello").expect("unit resolved by id");
    assert_eq!(registered.name(), &UnitName::from("hello"));
    assert!(registry.unit_by_id("missing").is_none());
}

#[test]
fn deregister_removes_unit() {
    let mut registry = UnitRegistry::new();
    registry.register(hello_unit()).expect("hello registered");
    registry.register(extra_unit()).expect("extra registered");

    let removed = registry
        .deregister(&UnitName::from("hello"))
        .expect("unit removed");
    assert_eq!(removed.name(), &UnitName::from("hello"));
    assert!(!registry.contains(&UnitName::from("hello")));
    assert_eq!(registry.len(), 1);
    assert_eq!(
        registry.iter().next().expect("one unit left").name(),
        &UnitName::from("extra")
    );

    registry.deregister(&UnitName::from("extra")).expect("unit removed");
    assert!(registry.is_empty());
}

#[test]
fn registered_unit_exposes_descriptor() {
    let mut registry = UnitRegistry::new();
    registry
        .register(ConfigUnit::new("hello").attribute("mode", "A"))
        .expect("hello registered");

    let registered = registry.unit(&UnitName::from("hello")).expect("registered");
    assert_eq!(registered.descriptor().attributes.get_str("mode"), Some("A"));
}
