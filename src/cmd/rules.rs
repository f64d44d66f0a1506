//! `buildlint rules`: show the active rule set.

use anyhow::Result;
use colored::Colorize;

use buildlint::rules::is_builtin;
use buildlint::Rule;

use super::Session;
use crate::exit_codes;

/// One line per rule, in evaluation order.
pub fn format_rules(rules: &[Rule]) -> String {
    if rules.is_empty() {
        return "(no rules enabled)".dimmed().to_string();
    }

    let width = rules.iter().map(|r| r.name.len()).max().unwrap_or(0);
    rules
        .iter()
        .enumerate()
        .map(|(i, rule)| {
            let origin = if is_builtin(&rule.name) {
                "built-in"
            } else {
                "custom"
            };
            format!(
                "{:>2}. {:<width$}  {}\n    {} when {} ({})",
                i + 1,
                rule.name.cyan(),
                rule.message,
                "→".cyan(),
                rule.predicate.describe(),
                origin,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cmd_rules(session: &Session) -> Result<i32> {
    println!("{}", format_rules(session.engine.rules()));
    Ok(exit_codes::OK)
}
