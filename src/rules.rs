//! Rule definitions for manifest linting.
//!
//! Each rule is a plain record of a name, a fixed message, and a substring
//! predicate. Matching is exact and case-sensitive; there is no tokenizing,
//! trimming, or comment handling, so `AS builder` inside a comment still
//! counts as present.

use serde::{Deserialize, Serialize};

use crate::error::RuleError;
use crate::manifest::Manifest;

/// Name of the rule that requires a `builder` stage.
pub const MULTI_STAGE_BUILD: &str = "multi-stage-build";
/// Name of the rule that flags dev dependency installs.
pub const PRODUCTION_DEPS_ONLY: &str = "production-deps-only";

/// Condition under which a rule reports a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    /// Violated when `needle` does not occur anywhere in the manifest.
    Missing { needle: String },
    /// Violated when `needle` occurs anywhere in the manifest.
    Contains { needle: String },
    /// Violated when `needle` occurs and `unless` does not.
    ContainsWithout { needle: String, unless: String },
}

impl Predicate {
    /// Returns true if `text` violates this predicate.
    pub fn is_violated_by(&self, text: &str) -> bool {
        match self {
            Predicate::Missing { needle } => !text.contains(needle.as_str()),
            Predicate::Contains { needle } => text.contains(needle.as_str()),
            Predicate::ContainsWithout { needle, unless } => {
                text.contains(needle.as_str()) && !text.contains(unless.as_str())
            }
        }
    }

    /// Short human description, used by `buildlint rules`.
    pub fn describe(&self) -> String {
        match self {
            Predicate::Missing { needle } => format!("text lacks '{}'", needle),
            Predicate::Contains { needle } => format!("text contains '{}'", needle),
            Predicate::ContainsWithout { needle, unless } => {
                format!("text contains '{}' but not '{}'", needle, unless)
            }
        }
    }

    fn needles(&self) -> Vec<&str> {
        match self {
            Predicate::Missing { needle } | Predicate::Contains { needle } => vec![needle.as_str()],
            Predicate::ContainsWithout { needle, unless } => {
                vec![needle.as_str(), unless.as_str()]
            }
        }
    }
}

/// A named check with a fixed diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub message: String,
    #[serde(rename = "when")]
    pub predicate: Predicate,
}

impl Rule {
    pub fn new(name: impl Into<String>, message: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            predicate,
        }
    }

    /// The rule's message if `manifest` violates it.
    pub fn check(&self, manifest: &Manifest) -> Option<&str> {
        self.predicate
            .is_violated_by(manifest.as_str())
            .then_some(self.message.as_str())
    }

    /// Reject rules that could never be reported meaningfully.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.name.trim().is_empty() {
            return Err(RuleError::EmptyName);
        }
        if self.message.trim().is_empty() {
            return Err(RuleError::EmptyMessage(self.name.clone()));
        }
        if self.predicate.needles().iter().any(|n| n.is_empty()) {
            return Err(RuleError::EmptyNeedle(self.name.clone()));
        }
        Ok(())
    }
}

/// The built-in rules, in evaluation order.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            MULTI_STAGE_BUILD,
            "Missing multi-stage build",
            Predicate::Missing {
                needle: "AS builder".to_string(),
            },
        ),
        Rule::new(
            PRODUCTION_DEPS_ONLY,
            "Installing devDependencies in production",
            Predicate::ContainsWithout {
                needle: "npm install".to_string(),
                unless: "--production".to_string(),
            },
        ),
    ]
}

/// Returns true if `name` belongs to a built-in rule.
pub fn is_builtin(name: &str) -> bool {
    name == MULTI_STAGE_BUILD || name == PRODUCTION_DEPS_ONLY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(needle: &str) -> Predicate {
        Predicate::Missing {
            needle: needle.to_string(),
        }
    }

    #[test]
    fn test_missing_predicate() {
        let p = missing("AS builder");
        assert!(p.is_violated_by(""));
        assert!(p.is_violated_by("FROM node:18 as builder"));
        assert!(!p.is_violated_by("FROM node:18 AS builder"));
    }

    #[test]
    fn test_missing_predicate_matches_inside_comment() {
        let p = missing("AS builder");
        assert!(!p.is_violated_by("# TODO: FROM node AS builder\nFROM node:18"));
    }

    #[test]
    fn test_contains_predicate() {
        let p = Predicate::Contains {
            needle: "ADD http".to_string(),
        };
        assert!(p.is_violated_by("ADD https://example.com/x.tgz /tmp"));
        assert!(!p.is_violated_by("COPY . ."));
    }

    #[test]
    fn test_contains_without_predicate() {
        let p = Predicate::ContainsWithout {
            needle: "npm install".to_string(),
            unless: "--production".to_string(),
        };
        assert!(p.is_violated_by("RUN npm install"));
        assert!(!p.is_violated_by("RUN npm install --production"));
        // The unless text may appear anywhere
        assert!(!p.is_violated_by("RUN npm install\n# --production later"));
        assert!(!p.is_violated_by("RUN npm ci"));
        assert!(!p.is_violated_by("--production"));
    }

    #[test]
    fn test_builtin_order_and_messages() {
        let rules = builtin_rules();
        let names: Vec<&str> = rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec![MULTI_STAGE_BUILD, PRODUCTION_DEPS_ONLY]);
        assert_eq!(rules[0].message, "Missing multi-stage build");
        assert_eq!(rules[1].message, "Installing devDependencies in production");
    }

    #[test]
    fn test_rule_check_returns_message() {
        let rule = &builtin_rules()[0];
        assert_eq!(
            rule.check(&Manifest::from("FROM alpine")),
            Some("Missing multi-stage build")
        );
        assert_eq!(rule.check(&Manifest::from("FROM alpine AS builder")), None);
    }

    #[test]
    fn test_rule_validate_rejects_empty_fields() {
        assert_eq!(
            Rule::new(" ", "msg", missing("x")).validate(),
            Err(RuleError::EmptyName)
        );
        assert_eq!(
            Rule::new("r", "", missing("x")).validate(),
            Err(RuleError::EmptyMessage("r".to_string()))
        );
        assert_eq!(
            Rule::new("r", "msg", missing("")).validate(),
            Err(RuleError::EmptyNeedle("r".to_string()))
        );
        let p = Predicate::ContainsWithout {
            needle: "npm install".to_string(),
            unless: String::new(),
        };
        assert_eq!(
            Rule::new("r", "msg", p).validate(),
            Err(RuleError::EmptyNeedle("r".to_string()))
        );
    }

    #[test]
    fn test_rule_deserializes_from_yaml() {
        let yaml = r#"
name: non-root-user
message: Image runs as root
when:
  type: missing
  needle: "USER "
"#;
        let rule: Rule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.name, "non-root-user");
        assert_eq!(rule.predicate, missing("USER "));
    }

    #[test]
    fn test_is_builtin() {
        assert!(is_builtin("multi-stage-build"));
        assert!(is_builtin("production-deps-only"));
        assert!(!is_builtin("non-root-user"));
    }
}
