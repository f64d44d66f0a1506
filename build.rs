use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=GIT_SHA");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");

    // Release images pass these in; local builds ask git and date
    let git_sha = std::env::var("GIT_SHA")
        .unwrap_or_else(|_| command_stdout("git", &["rev-parse", "--short", "HEAD"]));
    println!("cargo:rustc-env=BUILDLINT_GIT_SHA={}", git_sha);

    let build_date =
        std::env::var("BUILD_DATE").unwrap_or_else(|_| command_stdout("date", &["+%Y-%m-%d"]));
    println!("cargo:rustc-env=BUILDLINT_BUILD_DATE={}", build_date);
}

fn command_stdout(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
