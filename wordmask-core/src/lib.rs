// wordmask-core/src/lib.rs
//! # wordmask Core Library
//!
//! `wordmask-core` provides the fundamental, platform-independent logic for
//! detecting and masking banned keywords in arbitrary text, while tolerating
//! deliberate evasion attempts where noise characters (punctuation, digits,
//! stray letters, whitespace, selected CJK radical components) are inserted
//! between the letters of a banned word.
//!
//! The library is designed to be pure and stateless beyond the keyword index
//! itself, focusing solely on the transformation of input text based on a
//! configured keyword set, without concerns for I/O or application-specific
//! state management.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` for specifying keyword sets and the mask character.
//! * `trie`: The shared prefix index built from the keyword list.
//! * `noise`: The constant-time classifier for evasion-noise characters.
//! * `scanner`: Walks the index over input text, recording match candidates.
//! * `rewriter`: Rewrites scanned text into its masked form.
//! * `keyword_match`: The candidate record produced by the scanner.
//! * `engine`: The `WordFilter` engine tying index, classifier, scanner, and rewriter together.
//! * `shared`: An optional process-wide filter handle.
//! * `errors`: Structured error types for configuration loading.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordmask_core::{mask_string, FilterConfig, WordFilter};
//!
//! // Explicit, caller-owned engine.
//! let mut filter = WordFilter::new();
//! filter.insert_keywords(["text"]);
//! assert_eq!(filter.mask("This is text word!"), "This is **** word!");
//!
//! // Evasion noise between keyword characters is absorbed and elided.
//! assert_eq!(filter.mask("t-e-x-t"), "****");
//!
//! // One-shot convenience from a configuration.
//! let config = FilterConfig {
//!     keywords: vec!["治国".into()],
//!     mask_char: '?',
//! };
//! assert_eq!(mask_string(&config, "治@国 ok"), "?? ok");
//! ```
//!
//! ## Error Handling
//!
//! Masking fails open: a filter that was never given keywords returns its
//! input unchanged, and empty keyword entries are skipped rather than
//! rejected. The only fallible surface is configuration loading, reported
//! through [`WordMaskError`].
//!
//! ## Design Principles
//!
//! * **Explicit instances:** Engines are caller-constructed; independent
//!   filters share no state. The process-wide handle in [`shared`] is a
//!   convenience, never a requirement.
//! * **Build once, scan many:** The keyword index and noise classifier are
//!   built at insertion time; scanning and masking take `&self`.
//! * **Character-unit iteration:** All offsets are Unicode scalar indices,
//!   so supplementary-plane characters are never split mid-match.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod keyword_match;
pub mod noise;
pub mod rewriter;
pub mod scanner;
pub mod shared;
pub mod trie;

/// Re-exports the public configuration types and constants.
pub use config::{merge_configs, FilterConfig, DEFAULT_MASK_CHAR, MAX_KEYWORD_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::WordMaskError;

/// Re-exports the engine and its one-shot convenience entry point.
pub use engine::{mask_string, WordFilter};

/// Re-exports the candidate record and content-safe logging helpers.
pub use keyword_match::{redact_content, KeywordMatch};

/// Re-exports the noise classifier for hosts that want to query it directly.
pub use noise::NoiseClassifier;

/// Re-exports the keyword index for advanced usage.
pub use trie::KeywordTrie;

/// Re-exports the process-wide convenience handle.
pub use shared::{insert_shared_keywords, mask_shared, mask_shared_with};
