//! Hand-off of the final dashboard URL

use std::io::{self, Write};
use log::info;

use anyhow::{Context, Result};

/// Receives the fully formed dashboard URL
pub trait Launcher {
    fn launch(&self, url: &str) -> Result<()>;
}

/// Opens the URL in the user's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLauncher;

impl Launcher for BrowserLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        info!("Opening {} in the default browser", url);
        webbrowser::open(url)
            .with_context(|| format!("Failed to open browser for URL: {}", url))?;
        Ok(())
    }
}

/// Writes the URL to stdout instead of opening it
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", url).context("Failed to write URL to stdout")
    }
}
