use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use crate::config::Config;
use crate::inline::{self, AssetRole, InlineOutcome};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{} not found", .0.display())]
    Missing(PathBuf),
}

/// Check that every input exists before anything is read or written. The
/// first missing path wins.
pub fn check_inputs(config: &Config) -> Result<(), InputError> {
    for path in [&config.html_path, &config.css_path, &config.js_path] {
        if !path.exists() {
            return Err(InputError::Missing(path.clone()));
        }
    }
    Ok(())
}

/// Read the three inputs and run the style pass, then the script pass, on
/// the cumulative buffer. Returns the merged document without writing it.
pub fn assemble(config: &Config) -> Result<String> {
    let document = read_input(&config.html_path)?;
    let css = read_input(&config.css_path)?;
    let js = read_input(&config.js_path)?;

    let document = apply(document, AssetRole::Style, &css, &config.html_path);
    let document = apply(document, AssetRole::Script, &js, &config.html_path);
    Ok(document)
}

pub fn run(config: &Config) -> Result<()> {
    check_inputs(config)?;
    let merged = assemble(config)?;
    fs::write(&config.out_path, merged)
        .with_context(|| format!("failed to write {}", config.out_path.display()))?;
    Ok(())
}

fn apply(document: String, role: AssetRole, asset: &str, html_path: &Path) -> String {
    match inline::inline(&document, role, asset) {
        InlineOutcome::Replaced { document } => document,
        InlineOutcome::NoMatch => {
            eprintln!(
                "warning: no {} marker pair in {}, section left unchanged",
                role.token(),
                html_path.display()
            );
            document
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
