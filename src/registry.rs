//! Name-keyed catalog of reader factories.
//!
//! The registry maps a string name to a [`ReaderFactory`]; instantiating
//! through a factory triggers the reader's construction-time backend guard,
//! exactly as direct construction would. A process-wide instance ships with
//! the built-in formats pre-registered under their canonical names (`ini`,
//! `json`, `toml`, `yaml`), and registries are also plain values so tests
//! can work against a private instance.
//!
//! Absence is a normal negative result (`Ok(None)`), never an error; a
//! blank name is a programmer error and is rejected before the store is
//! touched.

use std::sync::Arc;
use std::sync::OnceLock;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::readers::{FormatReader, IniReader, JsonReader, TomlReader, YamlReader};

/// Constructs a reader, running any construction-time guard the reader
/// carries.
pub type ReaderFactory = Arc<dyn Fn() -> Result<Box<dyn FormatReader>> + Send + Sync>;

/// A catalog mapping reader names to factories.
///
/// Mutation and lookup are guarded by a single lock, so a registry can be
/// shared across threads (plugin-style registration from several
/// initializers included). Registration overwrites any existing entry of
/// the same name; there is no uniqueness constraint across names.
pub struct ReaderRegistry {
    entries: Mutex<IndexMap<String, ReaderFactory>>,
}

impl ReaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(IndexMap::new()),
        }
    }

    /// Create a registry with the built-in readers pre-registered under
    /// their canonical names.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.install_builtins();
        registry
    }

    fn install_builtins(&self) {
        let mut entries = self.entries.lock();
        entries.insert("ini".to_owned(), IniReader::factory());
        entries.insert("json".to_owned(), JsonReader::factory());
        entries.insert("toml".to_owned(), TomlReader::factory());
        entries.insert("yaml".to_owned(), YamlReader::factory());
    }

    /// Associate `name` with a factory, replacing any prior association.
    pub fn add(&self, name: impl Into<String>, factory: ReaderFactory) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        tracing::debug!(name = %name, "registering reader");
        self.entries.lock().insert(name, factory);
        Ok(())
    }

    /// Look up the factory registered under `name`.
    ///
    /// An unknown name is `Ok(None)`, distinguishable from the blank-name
    /// misuse error.
    pub fn get(&self, name: &str) -> Result<Option<ReaderFactory>> {
        validate_name(name)?;
        Ok(self.entries.lock().get(name).cloned())
    }

    /// Remove and return the factory registered under `name`.
    ///
    /// Removing an unregistered name is a no-op signalled as `Ok(None)`.
    /// The order of the remaining entries is preserved.
    pub fn remove(&self, name: &str) -> Result<Option<ReaderFactory>> {
        validate_name(name)?;
        let removed = self.entries.lock().shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "removed reader");
        }
        Ok(removed)
    }

    /// Look up and instantiate in one step.
    ///
    /// Instantiation runs the reader's construction-time guard, so this
    /// can fail with [`Error::LibraryRequired`] even for a registered name.
    pub fn create(&self, name: &str) -> Result<Option<Box<dyn FormatReader>>> {
        match self.get(name)? {
            Some(factory) => factory().map(Some),
            None => Ok(None),
        }
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    /// Restore the initial state: exactly the built-ins, nothing else.
    ///
    /// Test suites use this as a teardown hook so registered names do not
    /// leak across tests sharing the process-wide registry.
    pub fn reset(&self) {
        self.entries.lock().clear();
        self.install_builtins();
    }
}

impl Default for ReaderRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidName(name.to_owned()));
    }
    Ok(())
}

static GLOBAL: OnceLock<ReaderRegistry> = OnceLock::new();

/// The process-wide registry, initialized with the built-ins on first use.
pub fn global() -> &'static ReaderRegistry {
    GLOBAL.get_or_init(ReaderRegistry::with_builtins)
}

/// Register a factory in the process-wide registry.
pub fn add_reader(name: impl Into<String>, factory: ReaderFactory) -> Result<()> {
    global().add(name, factory)
}

/// Look up a factory in the process-wide registry.
pub fn get_reader(name: &str) -> Result<Option<ReaderFactory>> {
    global().get(name)
}

/// Remove a factory from the process-wide registry.
pub fn remove_reader(name: &str) -> Result<Option<ReaderFactory>> {
    global().remove(name)
}

/// Instantiate a reader from the process-wide registry.
pub fn create_reader(name: &str) -> Result<Option<Box<dyn FormatReader>>> {
    global().create(name)
}
