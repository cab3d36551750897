//! User-facing output lines
//!
//! Colour follows NO_COLOR and is only used when stdout is a terminal.

use std::io::IsTerminal;
use colored::Colorize;

pub const ERROR_PREFIX: &str = "ERROR:";

/// Whether coloured output should be produced
pub fn colours_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// One-line failure diagnostic
pub fn error_line(message: &str, colour: bool) -> String {
    if colour {
        format!("{} {}", ERROR_PREFIX.red().bold(), message)
    } else {
        format!("{} {}", ERROR_PREFIX, message)
    }
}

/// Status line shown when the browser is launched
pub fn opening_line(url: &str, colour: bool) -> String {
    if colour {
        format!("Opening {}", url.cyan().underline())
    } else {
        format!("Opening {}", url)
    }
}
