//! Custom cargo commands for the search widget crate.
//!
//! Usage:
//!   cargo xtask verify      - Run full verification suite
//!   cargo xtask test        - Run all native tests
//!   cargo xtask test-wasm   - Run the browser tests in headless Firefox
//!   cargo xtask build-wasm  - Build the browser package into pkg/
//!   cargo xtask check       - Quick check (no wasm build)
//!   cargo xtask bench       - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

const FIXTURE_INDEX: &str = "tests/fixtures/search_index.json";

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("test-wasm") => test_wasm()?,
        Some("build-wasm") => build_wasm()?,
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
  verify      Run full verification suite (tests + clippy + fixture lint + wasm build)
  test        Run all Rust tests
  test-wasm   Run the runSearch browser tests (wasm-pack, headless Firefox)
  build-wasm  Build the browser package with wasm-pack (runs wasm-opt if installed)
  check       Quick check (cargo check + test + clippy)
  bench       Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Search Widget Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[2/4] Running clippy (native + wasm feature)...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    run_cargo(&[
        "clippy",
        "--quiet",
        "--features",
        "wasm",
        "--target",
        "wasm32-unknown-unknown",
        "--lib",
        "--",
        "-D",
        "warnings",
    ])?;
    println!("✓ Clippy passed\n");

    println!("[3/4] Linting fixture index...");
    run_cargo(&["run", "--quiet", "--", "check", FIXTURE_INDEX])?;
    println!("✓ Fixture index is clean\n");

    println!("[4/4] Running browser tests and building wasm package...");
    test_wasm()?;
    build_wasm()?;
    println!("✓ Browser tests passed, wasm package built\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Browser tests for the DOM runtime
fn test_wasm() -> Result<()> {
    let status = Command::new("wasm-pack")
        .args(["test", "--headless", "--firefox", "--", "--features", "wasm", "--lib"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack test failed");
    }
    Ok(())
}

/// Build pkg/ with wasm-pack, then shrink it with wasm-opt when available.
///
/// wasm-pack's own wasm-opt step is disabled in Cargo.toml so the flags stay
/// in one place.
fn build_wasm() -> Result<()> {
    let root = project_root()?;

    let status = Command::new("wasm-pack")
        .args(["build", "--target", "web", "--release", "--", "--features", "wasm"])
        .current_dir(&root)
        .status()
        .context("Failed to run wasm-pack (is it installed?)")?;

    if !status.success() {
        bail!("wasm-pack build failed");
    }

    let wasm = root.join("pkg").join("tissue_search_bg.wasm");
    if !wasm.exists() {
        bail!("expected {} after wasm-pack build", wasm.display());
    }

    match Command::new("wasm-opt").arg("--version").output() {
        Ok(out) if out.status.success() => optimize(&wasm)?,
        _ => println!("  (wasm-opt not found, skipping size optimization)"),
    }

    Ok(())
}

fn optimize(wasm: &Path) -> Result<()> {
    let before = std::fs::metadata(wasm)?.len();

    let status = Command::new("wasm-opt")
        .arg("-Os")
        .arg(wasm)
        .arg("-o")
        .arg(wasm)
        .status()
        .context("Failed to run wasm-opt")?;

    if !status.success() {
        bail!("wasm-opt failed on {}", wasm.display());
    }

    let after = std::fs::metadata(wasm)?.len();
    println!(
        "  wasm-opt: {} -> {} bytes ({:.1}% smaller)",
        before,
        after,
        100.0 * (before.saturating_sub(after)) as f64 / before.max(1) as f64
    );
    Ok(())
}

/// Quick check (no wasm build)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
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
