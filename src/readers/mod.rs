//! Format readers: one adapter per supported grammar.
//!
//! A reader converts a readable character stream into a
//! [`CaseInsensitiveMap`], delegating the byte-level grammar to an external
//! parser crate and then rebuilding every mapping level of the parsed tree
//! as a case-insensitive map. Sequences and scalar leaves pass through
//! unchanged, with the scalar types the backing parser reported.
//!
//! Readers carry no state across calls: instances are cheap, reusable, and
//! shareable. Construction of the TOML and YAML readers runs the optional
//! backend guard (see [`crate::backend`]); INI and JSON are always
//! available.

mod ini;
mod json;
mod toml;
mod yaml;

use std::io::Read;

use crate::error::Result;
use crate::map::CaseInsensitiveMap;

pub use self::ini::IniReader;
pub use self::json::JsonReader;
pub use self::toml::TomlReader;
pub use self::yaml::YamlReader;

/// A named parsing strategy turning a text stream into a nested
/// case-insensitive map.
///
/// Implement this to plug a new format (or override a built-in one) into
/// the [registry](crate::registry). The contract, shared by every built-in
/// reader:
///
/// - `read` consumes the stream but does not close it; the stream's
///   lifecycle stays with the caller.
/// - The whole document parses into a map or the call fails; there is no
///   partial success.
/// - The top level of the document must be a mapping.
/// - Every nested mapping in the result is itself a
///   [`CaseInsensitiveMap`], transitively.
pub trait FormatReader: Send + Sync {
    /// Short name of the format, used in diagnostics (`"json"`, `"yaml"`…).
    fn format(&self) -> &'static str;

    /// Parse the entire stream into a case-insensitive map.
    fn read(&self, stream: &mut dyn Read) -> Result<CaseInsensitiveMap>;
}

/// Drain a stream into a string, leaving the stream open.
pub(crate) fn slurp(stream: &mut dyn Read) -> Result<String> {
    let mut text = String::new();
    stream.read_to_string(&mut text)?;
    Ok(text)
}
