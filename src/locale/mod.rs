mod serialisation;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

use crate::{REPLACEMENT, TARGET};

#[derive(Debug, Error)]
pub enum LocaleError {
    /// The bytes were not a JSON object of entries.
    #[error("invalid JSON ({0})")]
    Malformed(#[source] serde_json::Error),
    #[error("unable to serialise locale file ({0})")]
    Serialise(#[source] serde_json::Error),
}

/// The fields of an entry which are scanned for the brand string. Every other field is passed
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Message,
    Description,
}

impl Field {
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// A `messages.json` file held in memory. Entry order is kept exactly as read so that a rewrite
/// only differs from the original where a substitution happened (and in whitespace).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleFile {
    entries: IndexMap<String, Value>,
}

impl LocaleFile {
    pub fn from_bytes(bytes: &[u8]) -> Result<LocaleFile, LocaleError> {
        serde_json::from_slice(bytes).map_err(LocaleError::Malformed)
    }

    pub fn entries(&self) -> &IndexMap<String, Value> {
        &self.entries
    }

    /// Replaces the brand string in the scanned fields of every entry. Returns the number of
    /// fields which changed, so zero means the file should not be rewritten.
    pub fn rebrand(&mut self) -> usize {
        let mut changed = 0usize;

        for record in self.entries.values_mut() {
            // Records which aren't objects have no fields to scan
            let Value::Object(record) = record else {
                continue;
            };

            for field in Field::iter() {
                let Some(Value::String(text)) = record.get_mut(field.key()) else {
                    continue;
                };

                if let Some(rebranded) = rebrand_text(text) {
                    *text = rebranded;
                    changed += 1;
                }
            }
        }

        changed
    }

    /// Serialises the file with 2 space indentation, leaving non-ASCII characters unescaped.
    pub fn dump(&self) -> Result<Vec<u8>, LocaleError> {
        serialisation::to_pretty_bytes(self).map_err(LocaleError::Serialise)
    }
}

/// Literal, case-sensitive replacement of every occurrence of the brand string. `None` when the
/// text doesn't contain it.
pub fn rebrand_text(text: &str) -> Option<String> {
    if text.contains(TARGET) {
        Some(text.replace(TARGET, REPLACEMENT))
    } else {
        None
    }
}
