//! # buildlint - Dockerfile anti-pattern checks
//!
//! buildlint scans the raw text of a build manifest (a Dockerfile) for
//! patterns that bloat or weaken production images.
//!
//! ## Overview
//!
//! A [`RuleEngine`] holds an ordered list of rules. Each rule is a substring
//! predicate with a fixed message; validating a manifest returns the message
//! of every rule it violates, in rule order. There is no parsing: matching is
//! exact and case-sensitive over the whole text.
//!
//! Built-in rules:
//!
//! - `multi-stage-build`: the manifest never mentions `AS builder`
//! - `production-deps-only`: `npm install` appears without `--production`
//!
//! ## Modules
//!
//! - [`engine`] - The rule engine and findings
//! - [`rules`] - Rule records, predicates, and the built-in set
//! - [`manifest`] - Manifest text and byte decoding
//! - [`config`] - Layered configuration (disabled and custom rules, output)
//! - [`report`] - Text and JSON rendering of results
//! - [`template`] - The embedded sample Dockerfile
//!
//! ## Example
//!
//! ```
//! use buildlint::{Manifest, RuleEngine};
//!
//! let engine = RuleEngine::builtin();
//! let issues = engine.validate(&Manifest::from("FROM node:18\nRUN npm install\n"));
//! assert_eq!(
//!     issues,
//!     vec![
//!         "Missing multi-stage build",
//!         "Installing devDependencies in production",
//!     ]
//! );
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod rules;
pub mod template;

pub use engine::{Finding, RuleEngine};
pub use error::{InvalidInputError, RuleError};
pub use manifest::Manifest;
pub use rules::{Predicate, Rule};

/// Default path constants.
pub mod paths {
    /// Project config file, relative to the working directory: `.buildlint.md`
    pub const PROJECT_CONFIG: &str = ".buildlint.md";
    /// Manifest checked when `check` is given no paths: `Dockerfile`
    pub const DEFAULT_MANIFEST: &str = "Dockerfile";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
