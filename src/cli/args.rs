use clap::{CommandFactory, Parser};
use anyhow::Result;
use std::path::PathBuf;

/// Open the Kibana dashboard for an application sharing a logging service with a Kibana app
#[derive(Parser, Debug)]
#[command(name = "kibana-me-logs")]
#[command(about = "Open the Kibana dashboard for an application that shares a logging service with a Kibana app")]
#[command(version)]
pub struct Args {
    /// Name of the Kibana application in the targeted space
    #[arg(value_name = "KIBANA_APP")]
    pub kibana_app: Option<String>,

    /// Name of the application whose logs should be shown
    #[arg(value_name = "APP")]
    pub app: Option<String>,

    /// Verbose output (debug level logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet output (error level logging only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Debug output (trace level logging)
    #[arg(long)]
    pub debug: bool,

    /// Log format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub log_format: String,

    /// Log file path for file output
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level for file output (independent of console level)
    #[arg(long, value_name = "LEVEL")]
    pub log_file_level: Option<String>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Configuration section name
    #[arg(long, value_name = "SECTION")]
    pub config_name: Option<String>,

    /// Service label shared by both applications (default: logstash14)
    #[arg(short = 's', long, value_name = "LABEL")]
    pub service_label: Option<String>,

    /// Path to the cf executable
    #[arg(long, value_name = "PATH")]
    pub cf_binary: Option<PathBuf>,

    /// Directory containing the .cf session directory (overrides CF_HOME)
    #[arg(long, value_name = "DIR")]
    pub cf_home: Option<PathBuf>,

    /// Print the dashboard URL instead of opening a browser
    #[arg(short = 'p', long)]
    pub print_url: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    /// Both application names, when supplied
    pub fn targets(&self) -> Option<(&str, &str)> {
        match (self.kibana_app.as_deref(), self.app.as_deref()) {
            (Some(kibana_app), Some(app)) => Some((kibana_app, app)),
            _ => None,
        }
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Rendered usage text shown when application names are missing
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Validate CLI argument combinations
pub fn validate_args(args: &Args) -> Result<()> {
    let log_flags_count = [args.verbose, args.quiet, args.debug]
        .iter()
        .filter(|&&flag| flag)
        .count();

    if log_flags_count > 1 {
        return Err(anyhow::anyhow!(
            "Conflicting log level flags: only one of --verbose, --quiet, or --debug may be specified"
        ));
    }

    match args.log_format.to_lowercase().as_str() {
        "text" | "json" => {}
        _ => {
            return Err(anyhow::anyhow!(
                "Invalid log format '{}'. Valid options: text, json",
                args.log_format
            ))
        }
    }

    if let Some(ref level) = args.log_file_level {
        match level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log file level '{}'. Valid levels: error, warn, info, debug, trace",
                    level
                ))
            }
        }
    }

    if args.log_file_level.is_some() && args.log_file.is_none() {
        return Err(anyhow::anyhow!("--log-file-level requires --log-file to be specified"));
    }

    for (flag, name) in [("KIBANA_APP", &args.kibana_app), ("APP", &args.app)] {
        if matches!(name, Some(value) if value.trim().is_empty()) {
            return Err(anyhow::anyhow!("{} must not be empty", flag));
        }
    }

    if matches!(&args.service_label, Some(label) if label.trim().is_empty()) {
        return Err(anyhow::anyhow!("--service-label must not be empty"));
    }

    Ok(())
}
