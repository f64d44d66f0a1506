//! Configuration management for buildlint.
//!
//! Config files are markdown documents whose YAML frontmatter carries the
//! settings; the body is free-form notes and is ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::RuleEngine;
use crate::paths::PROJECT_CONFIG;
use crate::rules::Rule;

pub mod output;

pub use output::*;

use output::PartialOutputConfig;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub lint: LintConfig,
    pub output: OutputConfig,
}

/// Rule selection for the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LintConfig {
    /// Rule names to skip, built-in or custom
    #[serde(default)]
    pub disable: Vec<String>,
    /// Extra substring rules, evaluated after the built-ins in file order
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl LintConfig {
    pub fn validate(&self) -> Result<()> {
        RuleEngine::from_config(self)
            .map(|_| ())
            .context("Invalid lint configuration")
    }
}

impl Config {
    /// Load configuration with full merge semantics.
    /// Merge order (later overrides earlier):
    /// 1. Global config (~/.config/buildlint/config.md)
    /// 2. Project config (./.buildlint.md)
    /// 3. Explicit config passed with `--config`
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(PROJECT_CONFIG),
            explicit,
        )
    }

    /// Parse a single config document, filling unset fields with defaults.
    pub fn parse(content: &str) -> Result<Self> {
        let config = PartialConfig::parse(content)?.finish();
        config.lint.validate()?;
        Ok(config)
    }

    /// Load and merge the global, project, and explicit configs.
    /// Missing global or project files are skipped; an explicit path must exist.
    pub fn load_merged_from(
        global_path: Option<&Path>,
        project_path: &Path,
        explicit_path: Option<&Path>,
    ) -> Result<Self> {
        let global = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project = Some(project_path)
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let explicit = explicit_path
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let config = global.merge(project).merge(explicit).finish();
        config.lint.validate()?;

        Ok(config)
    }

    /// Build the rule engine described by this config.
    pub fn rule_engine(&self) -> Result<RuleEngine> {
        RuleEngine::from_config(&self.lint).context("Invalid lint configuration")
    }
}

/// Location of the user-wide config file, if `HOME` is set.
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/buildlint/config.md"))
}

/// Return the YAML between the opening `---` line and the next `---` line.
pub fn split_frontmatter(content: &str) -> Option<&str> {
    let content = content.trim_start();
    let rest = content.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }
    None
}

/// Config as read from a single file; every section is optional so files
/// can be layered.
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub lint: Option<LintConfig>,
    pub output: Option<PartialOutputConfig>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            split_frontmatter(content).context("Failed to extract frontmatter from config")?;

        if frontmatter.trim().is_empty() {
            return Ok(PartialConfig::default());
        }

        serde_yaml::from_str(frontmatter).context("Failed to parse config frontmatter")
    }

    /// Layer `other` on top of `self`. The lint section is replaced whole;
    /// output fields override one at a time.
    fn merge(self, other: PartialConfig) -> PartialConfig {
        let output = match (self.output, other.output) {
            (Some(base), Some(top)) => Some(base.merge(top)),
            (base, top) => top.or(base),
        };

        PartialConfig {
            lint: other.lint.or(self.lint),
            output,
        }
    }

    fn finish(self) -> Config {
        Config {
            lint: self.lint.unwrap_or_default(),
            output: self.output.map(PartialOutputConfig::finish).unwrap_or_default(),
        }
    }
}
