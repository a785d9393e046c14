// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus configuration.
//!
//! A data directory may carry a `wordex.json` describing which files to read
//! and which stop words to drop. Every field is optional:
//!
//! ```json
//! {
//!   "extensions": ["html", "txt", "md"],
//!   "extraStopwords": ["lorem", "ipsum"],
//!   "stopwordsEnabled": true
//! }
//! ```
//!
//! `stopwords` replaces the default English list outright; `extraStopwords`
//! adds to whichever list is in effect.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::stopwords::StopWords;

/// Name of the config file looked up inside the data directory.
pub const CONFIG_FILE: &str = "wordex.json";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CorpusConfig {
    /// File extensions to index, without the dot. Empty means every file.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Replacement stop-word list.
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default = "default_true")]
    pub stopwords_enabled: bool,
}

fn default_extensions() -> Vec<String> {
    ["html", "htm", "txt"].iter().map(|e| e.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            stopwords: None,
            extra_stopwords: Vec::new(),
            stopwords_enabled: true,
        }
    }
}

impl CorpusConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Invalid config JSON in {}: {}", path.display(), e))
    }

    /// Resolve the config for a data directory.
    ///
    /// An explicit path must exist. Otherwise `wordex.json` in the data
    /// directory is used when present, and the defaults when not.
    pub fn discover(data_dir: &Path, explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = data_dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// The stop words this config puts in effect.
    pub fn stop_words(&self) -> StopWords {
        if !self.stopwords_enabled {
            return StopWords::none();
        }

        let mut words = match &self.stopwords {
            Some(list) => StopWords::from_words(list),
            None => StopWords::english(),
        };
        words.extend(&self.extra_stopwords);
        words
    }

    /// Whether a file should be indexed, judged by its extension.
    pub fn accepts(&self, path: &Path) -> bool {
        if path.file_name().and_then(|n| n.to_str()) == Some(CONFIG_FILE) {
            return false;
        }
        if self.extensions.is_empty() {
            return true;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
