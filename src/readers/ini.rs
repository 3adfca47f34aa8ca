//! INI reader backed by `rust-ini`.

use std::io::Read;
use std::sync::Arc;

use ini::Ini;

use super::{slurp, FormatReader};
use crate::error::{Error, Result};
use crate::map::CaseInsensitiveMap;
use crate::registry::ReaderFactory;

/// Reads INI documents.
///
/// Sections become nested maps; properties outside any section land at the
/// top level. INI has no type system, so every scalar stays a string.
#[derive(Debug, Clone, Copy, Default)]
pub struct IniReader;

impl IniReader {
    /// Create a reader. The INI backend is always linked, so construction
    /// never fails.
    pub fn new() -> Self {
        Self
    }

    /// A factory for registering this reader under a custom name.
    pub fn factory() -> ReaderFactory {
        Arc::new(|| -> Result<Box<dyn FormatReader>> { Ok(Box::new(IniReader::new())) })
    }
}

impl FormatReader for IniReader {
    fn format(&self) -> &'static str {
        "ini"
    }

    fn read(&self, stream: &mut dyn Read) -> Result<CaseInsensitiveMap> {
        let text = slurp(stream)?;
        let document = Ini::load_from_str(&text).map_err(|e| Error::Parse {
            format: self.format(),
            message: e.to_string(),
        })?;

        let mut root = CaseInsensitiveMap::new();
        for (section, properties) in document.iter() {
            match section {
                Some(name) => {
                    let mut nested = CaseInsensitiveMap::new();
                    for (key, value) in properties.iter() {
                        nested.insert(key, value);
                    }
                    root.insert(name, nested);
                }
                None => {
                    for (key, value) in properties.iter() {
                        root.insert(key, value);
                    }
                }
            }
        }

        tracing::debug!(format = self.format(), keys = root.len(), "parsed document");
        Ok(root)
    }
}
