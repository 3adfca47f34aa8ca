//! Registry contract: strict name validation, absence as a normal result,
//! last-write-wins registration, and the process-wide instance.

use std::sync::Arc;

use serial_test::serial;

use quince::{registry, Error, FormatReader, IniReader, JsonReader, ReaderRegistry, Value};

#[test]
fn add_then_get_round_trips() {
    let registry = ReaderRegistry::new();
    let factory = JsonReader::factory();
    registry.add("render", Arc::clone(&factory)).unwrap();

    let fetched = registry.get("render").unwrap().expect("registered");
    assert!(Arc::ptr_eq(&fetched, &factory));
}

#[test]
fn blank_name_is_rejected_before_the_store_is_touched() {
    let registry = ReaderRegistry::new();

    assert!(matches!(
        registry.add("", JsonReader::factory()),
        Err(Error::InvalidName(_))
    ));
    assert!(matches!(registry.get(""), Err(Error::InvalidName(_))));
    assert!(matches!(registry.remove("   "), Err(Error::InvalidName(_))));
    assert!(registry.names().is_empty());
}

#[test]
fn unknown_name_signals_absence_without_failing() {
    let registry = ReaderRegistry::with_builtins();
    assert!(registry.get("not_found").unwrap().is_none());
    assert!(registry.remove("not_found").unwrap().is_none());
}

#[test]
fn remove_returns_the_entry_and_forgets_it() {
    let registry = ReaderRegistry::new();
    let factory = JsonReader::factory();
    registry.add("render", Arc::clone(&factory)).unwrap();

    let removed = registry.remove("render").unwrap().expect("was registered");
    assert!(Arc::ptr_eq(&removed, &factory));
    assert!(registry.get("render").unwrap().is_none());
}

#[test]
fn registration_overwrites_and_is_idempotent() {
    let registry = ReaderRegistry::new();
    let factory = JsonReader::factory();

    // Same factory twice: nothing changes.
    registry.add("render", Arc::clone(&factory)).unwrap();
    registry.add("render", Arc::clone(&factory)).unwrap();
    assert_eq!(registry.names(), vec!["render"]);

    // Different factory under the same name: last write wins.
    registry.add("render", IniReader::factory()).unwrap();
    let reader = registry.create("render").unwrap().unwrap();
    assert_eq!(reader.format(), "ini");
}

#[test]
fn builtin_readers_parse_through_the_registry() {
    let registry = ReaderRegistry::with_builtins();
    let reader = registry.create("ini").unwrap().expect("builtin");

    let map = reader
        .read(&mut "[database]\nhost=localhost\n".as_bytes())
        .unwrap();
    assert_eq!(
        map.get_path("Database.Host").and_then(Value::as_str),
        Some("localhost")
    );
}

#[test]
fn custom_readers_can_override_builtins() {
    struct Fixed;

    impl FormatReader for Fixed {
        fn format(&self) -> &'static str {
            "fixed"
        }

        fn read(&self, _stream: &mut dyn std::io::Read) -> quince::Result<quince::CaseInsensitiveMap> {
            Ok([("answer", Value::Integer(42))].into_iter().collect())
        }
    }

    let registry = ReaderRegistry::with_builtins();
    registry
        .add(
            "json",
            Arc::new(|| -> quince::Result<Box<dyn FormatReader>> { Ok(Box::new(Fixed)) }),
        )
        .unwrap();

    let reader = registry.create("json").unwrap().unwrap();
    assert_eq!(reader.format(), "fixed");
}

// Tests below share the process-wide registry, so they run serially and
// reset it when done.

#[test]
#[serial]
fn global_registry_ships_with_builtins() {
    registry::global().reset();
    for name in ["ini", "json", "toml", "yaml"] {
        assert!(
            registry::get_reader(name).unwrap().is_some(),
            "missing builtin {name}"
        );
    }
}

#[test]
#[serial]
fn global_registry_add_get_remove() {
    registry::global().reset();

    let factory = JsonReader::factory();
    registry::add_reader("render", Arc::clone(&factory)).unwrap();

    let fetched = registry::get_reader("render").unwrap().expect("registered");
    assert!(Arc::ptr_eq(&fetched, &factory));

    let removed = registry::remove_reader("render").unwrap().expect("present");
    assert!(Arc::ptr_eq(&removed, &factory));
    assert!(registry::get_reader("render").unwrap().is_none());

    registry::global().reset();
}

#[test]
#[serial]
fn global_create_instantiates_builtins() {
    registry::global().reset();

    let reader = registry::create_reader("yaml").unwrap().expect("builtin");
    let map = reader
        .read(&mut "database:\n  host: localhost\n".as_bytes())
        .unwrap();
    assert_eq!(
        map.get_path("DATABASE.HOST").and_then(Value::as_str),
        Some("localhost")
    );
}
