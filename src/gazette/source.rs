//! Input boundary: where raw items come from.
//!
//! Fetching and parsing the gazette page is a collaborator's job. The core
//! only needs an ordered list of items, so the seam is a single trait.

use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::SourceError;
use crate::gazette::item::GazetteItem;

/// Trait for item sources: pure I/O, no scoring.
pub trait ItemSource {
    /// Source name for logging.
    fn name(&self) -> &str;

    /// Load all items for one run, in index order.
    fn load(&self) -> Result<Vec<GazetteItem>, SourceError>;
}

/// Where a JSON item list is read from.
#[derive(Debug, Clone)]
pub enum JsonInput {
    Stdin,
    File(PathBuf),
}

impl JsonInput {
    /// `-` means stdin, anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

/// Reads a JSON array of items, as written by the scraping collaborator.
pub struct JsonItemSource {
    input: JsonInput,
    label: String,
}

impl JsonItemSource {
    pub fn new(input: JsonInput) -> Self {
        let label = match &input {
            JsonInput::Stdin => "stdin".to_string(),
            JsonInput::File(path) => path.display().to_string(),
        };
        Self { input, label }
    }
}

impl ItemSource for JsonItemSource {
    fn name(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<Vec<GazetteItem>, SourceError> {
        let raw = match &self.input {
            JsonInput::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
            JsonInput::File(path) => std::fs::read_to_string(path)?,
        };
        let items = parse_items(&raw)?;
        debug!(source = %self.label, count = items.len(), "Loaded items");
        Ok(items)
    }
}

/// Parse a JSON item list. Blank input is an empty list.
///
/// Entries are decoded one at a time; an entry that does not decode is
/// logged and skipped so the rest of the run still gets evaluated.
pub fn parse_items(raw: &str) -> Result<Vec<GazetteItem>, SourceError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let serde_json::Value::Array(entries) = value else {
        return Err(SourceError::Invalid {
            reason: "expected a JSON array of items".into(),
        });
    };

    let items = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<GazetteItem>(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(index, error = %e, "Skipping undecodable item");
                None
            }
        })
        .collect();
    Ok(items)
}
