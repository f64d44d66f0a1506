use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the
/// buildlint binary. `HOME` points inside the temp dir so a developer's
/// global config never leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub binary: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(dir.path().join("home")).expect("Failed to create home dir");

        TestHarness {
            dir,
            binary: PathBuf::from(env!("CARGO_BIN_EXE_buildlint")),
        }
    }

    /// Creates a harness with `.buildlint.md` holding the given content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        harness.write(".buildlint.md", config_content);
        harness
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    /// Writes a file relative to the harness directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.home())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        command
    }

    /// Executes the buildlint binary with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to run buildlint")
    }

    /// Executes the buildlint binary, feeding `input` on stdin.
    #[allow(dead_code)]
    pub fn run_with_stdin(&self, args: &[&str], input: &[u8]) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn buildlint");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input)
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for buildlint")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
