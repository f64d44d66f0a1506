//! Rule engine: applies an ordered rule set to manifest text.
//!
//! The engine is built once and never changes afterwards. Evaluation is a
//! pure function of the manifest, so one engine can be shared across threads
//! and called any number of times.

use std::collections::HashSet;

use serde::Serialize;

use crate::config::LintConfig;
use crate::error::{InvalidInputError, RuleError};
use crate::manifest::Manifest;
use crate::rules::{builtin_rules, is_builtin, Rule};

/// A diagnostic together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: String,
    pub message: String,
}

/// Ordered, immutable set of rules.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RuleEngine {
    /// Engine with the built-in rules only.
    pub fn builtin() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Engine over an explicit rule list, evaluated in the given order.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleError> {
        check_rules(&rules)?;
        Ok(Self { rules })
    }

    /// Built-in rules minus any disabled ones, then custom rules in file order.
    pub fn from_config(config: &LintConfig) -> Result<Self, RuleError> {
        // Disabled custom rules must still be well formed
        check_rules(&config.rules)?;

        if let Some(unknown) = config
            .disable
            .iter()
            .find(|name| !is_builtin(name) && !config.rules.iter().any(|r| &r.name == *name))
        {
            return Err(RuleError::UnknownRule(unknown.clone()));
        }

        // Custom rules may not shadow a built-in, even one that is disabled
        if let Some(shadow) = config.rules.iter().find(|r| is_builtin(&r.name)) {
            return Err(RuleError::Duplicate(shadow.name.clone()));
        }

        let disabled = |rule: &Rule| config.disable.iter().any(|name| *name == rule.name);

        let rules = builtin_rules()
            .into_iter()
            .chain(config.rules.iter().cloned())
            .filter(|rule| !disabled(rule))
            .collect();

        Self::new(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Diagnostic messages for every violated rule, in registration order.
    pub fn validate(&self, manifest: &Manifest) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(manifest))
            .map(str::to_string)
            .collect()
    }

    /// Like [`RuleEngine::validate`], keeping the rule name with each message.
    pub fn findings(&self, manifest: &Manifest) -> Vec<Finding> {
        self.rules
            .iter()
            .filter_map(|rule| {
                rule.check(manifest).map(|message| Finding {
                    rule: rule.name.clone(),
                    message: message.to_string(),
                })
            })
            .collect()
    }

    /// Decode `bytes` as a manifest and validate it.
    pub fn validate_bytes(&self, bytes: &[u8]) -> Result<Vec<String>, InvalidInputError> {
        let manifest = Manifest::from_bytes(bytes)?;
        Ok(self.validate(&manifest))
    }
}

/// Every rule is well formed and no name repeats.
fn check_rules(rules: &[Rule]) -> Result<(), RuleError> {
    let mut seen = HashSet::new();
    for rule in rules {
        rule.validate()?;
        if !seen.insert(rule.name.as_str()) {
            return Err(RuleError::Duplicate(rule.name.clone()));
        }
    }
    Ok(())
}
