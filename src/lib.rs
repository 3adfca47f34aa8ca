#![warn(missing_docs)]
#![deny(unsafe_code)]
//! # quince - case-insensitive configuration ingestion
//!
//! quince parses structured text (INI, JSON, TOML, YAML) into a uniform,
//! case-insensitive, hierarchically nested key/value representation, and
//! exposes a pluggable registry so callers can register custom format
//! readers under a name.
//!
//! The byte-level grammars are delegated to existing parser crates; what
//! this crate owns is the shape of the result and the contracts around it:
//!
//! - [`CaseInsensitiveMap`] - the nested, ordered container every reader
//!   produces. Keys match without regard to case at every level.
//! - [`FormatReader`] - the reader contract, with built-in [`IniReader`],
//!   [`JsonReader`], [`TomlReader`] and [`YamlReader`] implementations.
//! - [`BackendProbe`] - the construction-time guard for readers whose
//!   backing parser may be absent in a deployment: construction fails with
//!   [`Error::LibraryRequired`] instead of crashing later at parse time.
//! - [`ReaderRegistry`] - a name-keyed catalog of reader factories, with a
//!   process-wide instance pre-loaded with the built-ins.
//!
//! ## Quick start
//!
//! ```
//! use quince::{FormatReader, JsonReader, Value};
//!
//! let mut stream = r#"{"database": {"host": "localhost", "port": "1234"}}"#.as_bytes();
//! let config = JsonReader::new().read(&mut stream)?;
//!
//! // Lookups ignore case at every level, whatever casing the source used.
//! assert_eq!(
//!     config.get_path("Database.Host").and_then(Value::as_str),
//!     Some("localhost"),
//! );
//! # Ok::<(), quince::Error>(())
//! ```
//!
//! ## The registry
//!
//! Built-in readers are pre-registered under their canonical names; custom
//! readers join (or override) them at any point in the process lifetime:
//!
//! ```
//! use quince::{registry, JsonReader};
//!
//! registry::add_reader("render", JsonReader::factory())?;
//! let reader = registry::create_reader("render")?.expect("just registered");
//! assert_eq!(reader.format(), "json");
//!
//! // Unknown names are a normal negative result, not an error.
//! assert!(registry::get_reader("not_registered")?.is_none());
//! # quince::registry::global().reset();
//! # Ok::<(), quince::Error>(())
//! ```
//!
//! ## Optional backends
//!
//! TOML and YAML readers probe their backing parser when constructed, and
//! the probe is injectable so a test can simulate an absent backend:
//!
//! ```
//! use quince::{Backend, BackendProbe, Error, TomlReader};
//!
//! struct Unavailable;
//!
//! impl BackendProbe for Unavailable {
//!     fn is_available(&self, _backend: Backend) -> bool {
//!         false
//!     }
//! }
//!
//! let err = TomlReader::with_probe(&Unavailable).unwrap_err();
//! assert!(matches!(err, Error::LibraryRequired { library: "toml", .. }));
//!
//! // The check is per-construction, so the default probe succeeds next.
//! assert!(TomlReader::new().is_ok());
//! ```

pub mod backend;
pub mod error;
pub mod map;
pub mod readers;
pub mod registry;
pub mod value;

pub use backend::{Backend, BackendProbe, LinkedBackends};
pub use error::{Error, Result};
pub use map::CaseInsensitiveMap;
pub use readers::{FormatReader, IniReader, JsonReader, TomlReader, YamlReader};
pub use registry::{ReaderFactory, ReaderRegistry};
pub use value::Value;
