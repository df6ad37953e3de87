//! Reading of the delimited text tables that describe a board.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::constants::FIELD_DELIMITER;
use crate::error::{BoardError, BoardResult};

/// A cleaned, row-major table of tokens read from a descriptor file.
///
/// Rows keep their original lengths; nothing is padded at this stage. Each field has had
/// every character other than `A-Z`, `0-9` and `-` stripped from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    rows: Vec<Vec<String>>,
}

impl Descriptor {
    /// Reads and cleans a descriptor file.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DescriptorUnavailable`] if the file is missing or cannot be read.
    pub fn load(path: impl AsRef<Path>) -> BoardResult<Descriptor> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoardError::DescriptorUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        let descriptor = Self::parse(&text);
        debug!(path = %path.display(), rows = descriptor.rows.len(), "Loaded descriptor");
        Ok(descriptor)
    }

    /// Splits already-loaded text into cleaned rows.
    pub fn parse(text: &str) -> Descriptor {
        let rows = text
            .lines()
            .map(|line| line.split(FIELD_DELIMITER).map(Self::clean_field).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        trace!(rows = rows.len(), "Parsed descriptor text");
        Descriptor { rows }
    }

    /// Strips everything but uppercase letters, digits and `-` from a raw field.
    pub fn clean_field(raw: &str) -> String {
        raw.chars().filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '-').collect()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
