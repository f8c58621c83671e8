//! Build automation tasks for North Haven Adventures
//!
//! Usage:
//!   cargo xtask build-web                 # Build WASM into dist/web
//!   cargo xtask package-itch              # Zip dist/web for itch.io
//!   cargo xtask package-native [--target] # Release binary + assets into dist/native

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::Command;

const BIN_NAME: &str = "north-haven";
const MQ_JS_BUNDLE_URL: &str = "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for North Haven Adventures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds a DEV tag to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a native release with its assets next to it
    PackageNative {
        /// Rust target triple (defaults to the host)
        #[arg(long)]
        target: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::PackageItch => package_itch(),
        Commands::PackageNative { target } => package_native(target),
    }
}

/// Workspace root (parent of xtask/)
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().with_context(|| format!("Failed to execute {:?}", cmd.get_program()))?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(Command::new("curl").args(["-L", "--fail", "-o"]).arg(dest).arg(url))
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("Reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Wipe and recreate an output folder
fn fresh_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)?;
    }
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "--bin", BIN_NAME]),
    )?;

    fresh_dir(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", BIN_NAME);
    std::fs::copy(root.join("target/wasm32-unknown-unknown/release").join(&wasm), dist.join(&wasm))
        .context("WASM binary missing after build")?;

    // Page + gamepad plugin
    copy_dir_recursive(&root.join("web"), &dist)?;

    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(MQ_JS_BUNDLE_URL, &mq_js)?;
    }

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>North Haven", "<title>[DEV] North Haven");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", BIN_NAME);
    let zip_path = dist.join(&zip_name);

    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .arg("-r")
            .arg(format!("../{}", zip_name))
            .arg("."),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

/// Native release build, binary and assets side by side
fn package_native(target: Option<String>) -> Result<()> {
    let root = project_root()?;
    let label = target.clone().unwrap_or_else(|| std::env::consts::OS.to_string());
    let dist = root.join("dist/native").join(&label);

    println!("Building native release for {}...", label);
    fresh_dir(&dist)?;

    let mut build = Command::new("cargo");
    build.current_dir(&root).args(["build", "--release", "--bin", BIN_NAME]);
    if let Some(t) = &target {
        build.args(["--target", t]);
    }
    run_cmd(&mut build)?;

    let windows = target.as_deref().map_or(cfg!(target_os = "windows"), |t| t.contains("windows"));
    let binary = if windows { format!("{}.exe", BIN_NAME) } else { BIN_NAME.to_string() };
    let release_dir = match &target {
        Some(t) => root.join("target").join(t).join("release"),
        None => root.join("target/release"),
    };
    std::fs::copy(release_dir.join(&binary), dist.join(&binary))
        .with_context(|| format!("{} missing after build", binary))?;

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Native build complete: dist/native/{}/", label);
    Ok(())
}
