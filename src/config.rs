use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

const DEFAULT_HTML_PATH: &str = "src/tab.html";
const DEFAULT_CSS_PATH: &str = "src/tab.css";
const DEFAULT_JS_PATH: &str = "src/tab.js";
const DEFAULT_OUT_PATH: &str = "tab.browser.iWonder.html";

/// Input and output paths are fixed; the parser only provides
/// `--help`/`--version` and rejects stray arguments.
#[derive(Debug, Parser)]
#[command(
    name = "tabweld",
    version,
    about = "Inline the tab page stylesheet and script into a single self-contained HTML file."
)]
pub struct Cli {}

#[derive(Debug, Clone)]
pub struct Config {
    pub html_path: PathBuf,
    pub css_path: PathBuf,
    pub js_path: PathBuf,
    pub out_path: PathBuf,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let _cli = Cli::parse();
        Ok(Self::default())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            css_path: PathBuf::from(DEFAULT_CSS_PATH),
            js_path: PathBuf::from(DEFAULT_JS_PATH),
            out_path: PathBuf::from(DEFAULT_OUT_PATH),
        }
    }
}
