//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-core`: 运行 fx-runtime 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率

use std::process::{Command, ExitCode};

fn run(step: &str, cmd: &mut Command) -> anyhow::Result<()> {
    eprintln!("\n==> {step}");
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("{step} failed with {status}");
    }
    Ok(())
}

fn ensure_cargo_llvm_cov_available() -> anyhow::Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.args(["llvm-cov", "--version"]);
    let status = cmd.status();
    match status {
        Ok(s) if s.success() => Ok(()),
        _ => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => {
            let mut fmt = Command::new("cargo");
            fmt.args(["fmt", "--all", "--", "--check"]);
            run("cargo fmt --all -- --check", &mut fmt)?;

            let mut clippy = Command::new("cargo");
            clippy.args(["clippy", "--workspace", "--all-targets"]);
            run("cargo clippy --workspace --all-targets", &mut clippy)?;

            let mut test = Command::new("cargo");
            test.args(["test", "--workspace"]);
            run("cargo test --workspace", &mut test)?;
        }
        "cov-core" => {
            ensure_cargo_llvm_cov_available()?;

            let mut cov = Command::new("cargo");
            cov.args(["llvm-cov", "-p", "fx-runtime", "--all-features", "--html"]);
            run(
                "cargo llvm-cov -p fx-runtime --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "cov-workspace" => {
            ensure_cargo_llvm_cov_available()?;

            // 说明：
            // - workspace 覆盖率不作为主目标，主要用于"趋势观察"
            // - 在口径上排除 tool crates（xtask）以免稀释信号
            let mut cov = Command::new("cargo");
            cov.args([
                "llvm-cov",
                "--workspace",
                "--exclude",
                "xtask",
                "--all-features",
                "--html",
            ]);
            run(
                "cargo llvm-cov --workspace --exclude xtask --all-features --html",
                &mut cov,
            )?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov-core        运行 fx-runtime 覆盖率报告
  cov-workspace   运行 workspace 覆盖率报告

ALIASES (in .cargo/config.toml):
  cargo check-all     -> cargo xtask check-all
  cargo cov-core      -> cargo xtask cov-core
  cargo cov-workspace -> cargo xtask cov-workspace
"#
    );
}
