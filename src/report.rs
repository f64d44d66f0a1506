//! Report formatting for lint results.
//!
//! Transforms per-manifest findings into colored text or a JSON document.
//! Nothing here decides exit codes; callers inspect [`LintReport::has_issues`].

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::engine::Finding;

/// Source label used when a manifest is read from stdin.
pub const STDIN_SOURCE: &str = "<stdin>";

/// Findings for a single checked manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestReport {
    pub source: String,
    pub findings: Vec<Finding>,
}

impl ManifestReport {
    pub fn new(source: impl Into<String>, findings: Vec<Finding>) -> Self {
        Self {
            source: source.into(),
            findings,
        }
    }

    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Results for every manifest in one `check` run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub manifests: Vec<ManifestReport>,
}

impl LintReport {
    pub fn push(&mut self, report: ManifestReport) {
        self.manifests.push(report);
    }

    pub fn total_issues(&self) -> usize {
        self.manifests.iter().map(|m| m.findings.len()).sum()
    }

    pub fn has_issues(&self) -> bool {
        self.manifests.iter().any(|m| !m.passed())
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    checked_at: &'a str,
    manifests: Vec<JsonManifest<'a>>,
    total_issues: usize,
}

#[derive(Serialize)]
struct JsonManifest<'a> {
    source: &'a str,
    passed: bool,
    issues: &'a [Finding],
}

/// Format a report as lines of text, one per diagnostic, plus a summary.
pub fn format_text(report: &LintReport) -> String {
    let mut output = Vec::new();

    for manifest in &report.manifests {
        if manifest.passed() {
            output.push(format!("{} {}", "✓".green(), manifest.source));
        } else {
            output.extend(failure_lines(manifest));
        }
    }

    output.push(String::new());
    output.push(summary_line(report));
    output.join("\n")
}

/// Only the diagnostic lines, for `--quiet`. Empty when everything passed.
pub fn format_failures(report: &LintReport) -> String {
    report
        .manifests
        .iter()
        .flat_map(failure_lines)
        .collect::<Vec<_>>()
        .join("\n")
}

fn failure_lines(manifest: &ManifestReport) -> Vec<String> {
    manifest
        .findings
        .iter()
        .map(|finding| format!("{} {}: {}", "✗".red(), manifest.source, finding.message))
        .collect()
}

fn summary_line(report: &LintReport) -> String {
    let count = report.manifests.len();
    let noun = if count == 1 { "manifest" } else { "manifests" };
    let issues = report.total_issues();

    if issues == 0 {
        format!("All {} {} passed.", count, noun)
    } else {
        format!(
            "Found {} {} in {} {}.",
            issues,
            if issues == 1 { "issue" } else { "issues" },
            count,
            noun
        )
    }
}

/// Format a report as pretty-printed JSON.
pub fn format_json(report: &LintReport, checked_at: &str) -> Result<String> {
    let json = JsonReport {
        checked_at,
        manifests: report
            .manifests
            .iter()
            .map(|m| JsonManifest {
                source: &m.source,
                passed: m.passed(),
                issues: &m.findings,
            })
            .collect(),
        total_issues: report.total_issues(),
    };

    serde_json::to_string_pretty(&json).context("Failed to serialize lint report")
}
