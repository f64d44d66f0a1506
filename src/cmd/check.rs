//! `buildlint check`: lint manifests from files or stdin.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

use buildlint::config::OutputFormat;
use buildlint::paths::DEFAULT_MANIFEST;
use buildlint::report::{self, LintReport, ManifestReport, STDIN_SOURCE};
use buildlint::Manifest;

use super::Session;
use crate::exit_codes;

/// Where a manifest comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn source(&self) -> String {
        match self {
            Input::Stdin => STDIN_SOURCE.to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    tracing::warn!("reading manifest from an interactive terminal");
                }
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .context("Failed to read manifest from stdin")?;
                Ok(bytes)
            }
            Input::File(path) => std::fs::read(path)
                .with_context(|| format!("Failed to read manifest {}", path.display())),
        }
    }
}

/// Turn command-line arguments into inputs.
///
/// No arguments means `./Dockerfile`; `-` means stdin. An existing file is
/// taken literally even if its name has glob metacharacters; other arguments
/// with metacharacters are expanded and must match at least one file.
pub fn resolve_inputs(args: &[String]) -> Result<Vec<Input>> {
    if args.is_empty() {
        return Ok(vec![Input::File(PathBuf::from(DEFAULT_MANIFEST))]);
    }

    let mut inputs = Vec::new();
    for arg in args {
        if arg == "-" {
            inputs.push(Input::Stdin);
            continue;
        }

        if !is_glob_pattern(arg) || Path::new(arg).is_file() {
            inputs.push(Input::File(PathBuf::from(arg)));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob::glob(arg)
            .with_context(|| format!("Invalid glob pattern '{}'", arg))?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        if matched.is_empty() {
            bail!("No manifests match '{}'", arg);
        }
        matched.sort();
        inputs.extend(matched.into_iter().map(Input::File));
    }

    if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
        bail!("stdin ('-') can only be given once");
    }

    Ok(inputs)
}

fn is_glob_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Lint every input and build a report. Stops at the first unreadable
/// or non-text input.
pub fn lint_inputs(session: &Session, inputs: &[Input]) -> Result<LintReport> {
    let mut report = LintReport::default();

    for input in inputs {
        let source = input.source();
        let bytes = input.read()?;
        let manifest = Manifest::from_bytes(&bytes)
            .with_context(|| format!("Invalid manifest {}", source))?;

        tracing::debug!(source = %source, bytes = manifest.len(), "checking manifest");
        let findings = session.engine.findings(&manifest);
        tracing::debug!(source = %source, issues = findings.len(), "checked manifest");

        report.push(ManifestReport::new(source, findings));
    }

    Ok(report)
}

/// Print a report in the requested format and return the exit code.
pub fn emit(session: &Session, report: &LintReport, format: OutputFormat) -> Result<i32> {
    match format {
        OutputFormat::Json => {
            println!("{}", report::format_json(report, &buildlint::utc_now_iso())?);
        }
        OutputFormat::Text if session.quiet => {
            let failures = report::format_failures(report);
            if !failures.is_empty() {
                println!("{}", failures);
            }
        }
        OutputFormat::Text => println!("{}", report::format_text(report)),
    }

    Ok(if report.has_issues() {
        exit_codes::VIOLATIONS
    } else {
        exit_codes::OK
    })
}

pub fn cmd_check(session: &Session, paths: &[String], format: Option<&str>) -> Result<i32> {
    let format = session.format(format)?;
    let inputs = resolve_inputs(paths)?;
    let report = lint_inputs(session, &inputs)?;
    emit(session, &report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_defaults_to_dockerfile() {
        let inputs = resolve_inputs(&[]).unwrap();
        assert_eq!(inputs, vec![Input::File(PathBuf::from("Dockerfile"))]);
    }

    #[test]
    fn test_resolve_stdin_and_literal_paths() {
        let inputs = resolve_inputs(&args(&["-", "missing/Dockerfile"])).unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Stdin,
                Input::File(PathBuf::from("missing/Dockerfile"))
            ]
        );
    }

    #[test]
    fn test_resolve_rejects_double_stdin() {
        assert!(resolve_inputs(&args(&["-", "-"])).is_err());
    }

    #[test]
    fn test_resolve_expands_globs_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["b", "a"] {
            let dir = tmp.path().join(name);
            fs::create_dir_all(&dir).unwrap();
            fs::write(dir.join("Dockerfile"), "FROM scratch\n").unwrap();
        }

        let pattern = format!("{}/*/Dockerfile", tmp.path().display());
        let inputs = resolve_inputs(&[pattern]).unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::File(tmp.path().join("a").join("Dockerfile")),
                Input::File(tmp.path().join("b").join("Dockerfile")),
            ]
        );
    }

    #[test]
    fn test_resolve_glob_without_matches_fails() {
        let tmp = TempDir::new().unwrap();
        let pattern = format!("{}/*.Dockerfile", tmp.path().display());
        let err = resolve_inputs(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No manifests match"));
    }

    #[test]
    fn test_resolve_prefers_existing_file_over_glob() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("svc[1]");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Dockerfile"), "FROM scratch\n").unwrap();

        let literal = dir.join("Dockerfile").display().to_string();
        let inputs = resolve_inputs(&[literal]).unwrap();
        assert_eq!(inputs, vec![Input::File(dir.join("Dockerfile"))]);
    }

    #[test]
    fn test_input_source_labels() {
        assert_eq!(Input::Stdin.source(), "<stdin>");
        assert_eq!(
            Input::File(PathBuf::from("svc/Dockerfile")).source(),
            "svc/Dockerfile"
        );
    }
}
