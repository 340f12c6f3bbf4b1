//! Custom cargo commands for the autocomplete crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contract markers + tests in both feature sets + clippy)
  test      Run all Rust tests
  check     Quick check (cargo test + clippy)
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Autocomplete Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running Rust tests (default features)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running Rust tests (sequential batch, no rayon)...");
    run_cargo(&["test", "--quiet", "--no-default-features"])?;
    println!("✓ All Rust tests passed without parallel feature\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// The debug contracts guard the sorted-table and tight-range invariants.
/// Fail loudly if someone strips them out.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read src/verify/contracts.rs")?;

    let count = contracts.matches("Contract violation:").count();
    if count < 5 {
        bail!(
            "Expected at least 5 contract assertions, found {}. Someone may have removed invariant checks!",
            count
        );
    }

    let autocomplete = std::fs::read_to_string(root.join("src/autocomplete.rs"))
        .context("Failed to read src/autocomplete.rs")?;
    for call in ["check_sorted_by", "check_match_range", "check_weight_descending"] {
        if !autocomplete.contains(&format!("{}(", call)) {
            bail!("src/autocomplete.rs no longer calls {}", call);
        }
    }

    Ok(())
}
