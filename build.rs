//! Build script for the Learnitor admin client.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory, next to the `.env` file the client reads at startup:
//! - Linux: `~/.local/share/learnitor-admin/.env.example`
//! - macOS: `~/Library/Application Support/learnitor-admin/.env.example`
//! - Windows: `%LOCALAPPDATA%/learnitor-admin/.env.example`
//!
//! Nothing here is required for the build to succeed. A missing template or
//! an unwritable data directory only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    if let Err(e) = copy_template() {
        println!("cargo:warning=could not install .env.example: {}", e);
    }
}

fn copy_template() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return Ok(());
    }

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("learnitor-admin");
    fs::create_dir_all(&out_dir)?;

    fs::copy(&template, out_dir.join(".env.example"))?;
    Ok(())
}
