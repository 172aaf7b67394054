// Answer Sheet
// JSON persistence for the query table, and the ordered (index, text)
// listing a grading harness reads

use crate::error::{QueryTableError, Result};
use crate::query::QueryTable;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// One answered (or unanswered) slot as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SheetEntry {
    pub index: i64,
    pub text: String,
}

/// A set of slot entries, serialized as `{ "queries": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnswerSheet {
    pub queries: Vec<SheetEntry>,
}

impl AnswerSheet {
    /// Capture every slot of `table` in index order
    pub fn from_table(table: &QueryTable) -> Self {
        let queries = table
            .slots()
            .map(|slot| SheetEntry {
                index: slot.index as i64,
                text: slot.text.to_string(),
            })
            .collect();
        Self { queries }
    }

    /// Parse a sheet from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the sheet as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write every entry into `table`
    ///
    /// Either all entries are applied or none are: a duplicate index, an
    /// out-of-range index, or an empty query leaves `table` as it was.
    pub fn apply(&self, table: &mut QueryTable) -> Result<()> {
        let mut seen = HashSet::new();
        let mut staged = table.clone();

        for entry in &self.queries {
            if !seen.insert(entry.index) {
                return Err(QueryTableError::DuplicateEntry { index: entry.index });
            }
            staged.set(entry.index, entry.text.as_str())?;
        }

        *table = staged;
        Ok(())
    }

    /// Read a sheet from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let sheet = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), entries = sheet.queries.len(), "answer sheet loaded");
        Ok(sheet)
    }

    /// Write the sheet to a JSON file, replacing any existing file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), entries = self.queries.len(), "answer sheet saved");
        Ok(())
    }
}
