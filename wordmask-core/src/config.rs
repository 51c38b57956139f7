//! Configuration management for `wordmask-core`.
//!
//! This module defines the data structures describing a keyword filter
//! configuration. It handles serialization/deserialization of YAML
//! configurations and provides utilities for loading and merging them.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info, warn};

use crate::errors::WordMaskError;

/// The mask character used when a caller does not specify one.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Keywords longer than this are almost certainly configuration mistakes;
/// they are still honored, but logged.
pub const MAX_KEYWORD_LENGTH: usize = 64;

/// Top-level configuration for a keyword filter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    /// The banned keywords to detect and mask. Empty entries are skipped.
    pub keywords: Vec<String>,
    /// The character each masked keyword character is replaced with.
    pub mask_char: char,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl FilterConfig {
    /// Loads a filter configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordMaskError> {
        let path = path.as_ref();
        info!("Loading filter configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config: FilterConfig = serde_yml::from_str(&text)
            .map_err(|e| WordMaskError::ConfigParse(path.display().to_string(), e))?;

        validate_keywords(&config.keywords);
        info!(
            "Loaded {} keyword entries from {}.",
            config.keywords.len(),
            path.display()
        );

        Ok(config)
    }

    /// Number of non-empty keyword entries.
    pub fn keyword_count(&self) -> usize {
        self.keywords.iter().filter(|k| !k.is_empty()).count()
    }
}

/// Merges an additional configuration on top of a base one.
///
/// Keyword lists are unioned, preserving first-seen order; the extra
/// configuration's mask character wins. This is the config-level
/// counterpart of the engine's additive keyword insertion.
pub fn merge_configs(base: FilterConfig, extra: Option<FilterConfig>) -> FilterConfig {
    debug!("merge_configs called. Base keyword count: {}", base.keywords.len());

    let Some(extra) = extra else {
        return base;
    };

    let mut seen: HashSet<String> = base.keywords.iter().cloned().collect();
    let mut keywords = base.keywords;
    for keyword in extra.keywords {
        if seen.insert(keyword.clone()) {
            keywords.push(keyword);
        }
    }

    debug!("Final keyword count after merge: {}", keywords.len());
    FilterConfig {
        keywords,
        mask_char: extra.mask_char,
    }
}

/// Soft validation: garbage entries are logged, never fatal.
fn validate_keywords(keywords: &[String]) {
    for keyword in keywords {
        if keyword.is_empty() {
            debug!("Configuration contains an empty keyword entry; it will be skipped.");
        } else if keyword.chars().count() > MAX_KEYWORD_LENGTH {
            warn!(
                "Keyword of {} characters exceeds the expected maximum of {}; \
                 it will be honored but is likely a configuration mistake.",
                keyword.chars().count(),
                MAX_KEYWORD_LENGTH
            );
        }
    }
}
