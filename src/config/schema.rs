use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitterError};

/// On-disk shape of the shortcut config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShortcutFile {
    /// Informational only; not used for resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,

    /// Resource kind -> short code used as the output filename prefix.
    pub shortcuts: BTreeMap<String, String>,
}

/// The resolved kind -> short code table, with the path it came from.
#[derive(Debug, Clone)]
pub struct ShortcutTable {
    shortcuts: BTreeMap<String, String>,
    source: PathBuf,
}

impl ShortcutTable {
    pub fn new(shortcuts: BTreeMap<String, String>, source: impl Into<PathBuf>) -> Self {
        Self {
            shortcuts,
            source: source.into(),
        }
    }

    /// Path the table was loaded from. This is the file an operator edits to
    /// add a missing kind.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.shortcuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shortcuts.is_empty()
    }

    /// Look up the short code for `kind`. An empty code counts as missing.
    pub fn code_for(&self, kind: &str) -> Result<&str> {
        match self.shortcuts.get(kind) {
            Some(code) if !code.is_empty() => Ok(code),
            _ => Err(SplitterError::UnknownKind {
                kind: kind.to_string(),
                config_path: self.source.clone(),
            }),
        }
    }
}
