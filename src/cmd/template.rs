//! `buildlint template`: print or lint the bundled sample Dockerfile.

use anyhow::Result;

use buildlint::report::{LintReport, ManifestReport};
use buildlint::template;

use super::check::emit;
use super::Session;
use crate::exit_codes;

/// Source label for the bundled template in reports.
const TEMPLATE_SOURCE: &str = "<template>";

pub fn cmd_template(session: &Session, check: bool, format: Option<&str>) -> Result<i32> {
    if !check {
        print!("{}", template::node_dockerfile_text());
        return Ok(exit_codes::OK);
    }

    let format = session.format(format)?;
    let findings = session.engine.findings(&template::node_dockerfile());

    let mut report = LintReport::default();
    report.push(ManifestReport::new(TEMPLATE_SOURCE, findings));
    emit(session, &report, format)
}
