//! Sample Dockerfile shipped with the binary.
//!
//! The template is a single-stage Node.js image that installs every
//! dependency, which makes it a handy fixture for demonstrating both
//! built-in rules.

use crate::manifest::Manifest;

const NODE_DOCKERFILE: &str = include_str!("../templates/node.Dockerfile");

/// Raw text of the embedded Node.js Dockerfile.
pub fn node_dockerfile_text() -> &'static str {
    NODE_DOCKERFILE
}

/// The embedded Node.js Dockerfile as a manifest.
pub fn node_dockerfile() -> Manifest {
    Manifest::new(NODE_DOCKERFILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RuleEngine;

    #[test]
    fn test_template_is_single_stage_npm_install() {
        let text = node_dockerfile_text();
        assert!(text.contains("FROM node:18"));
        assert!(text.contains("RUN npm install"));
        assert!(!text.contains("AS builder"));
        assert!(!text.contains("--production"));
    }

    #[test]
    fn test_template_fails_both_builtin_rules() {
        let issues = RuleEngine::builtin().validate(&node_dockerfile());
        assert_eq!(
            issues,
            vec![
                "Missing multi-stage build",
                "Installing devDependencies in production"
            ]
        );
    }
}
