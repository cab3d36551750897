//! Collaborator wiring and workflow execution

use anyhow::Result;
use log::{debug, info};

use crate::cli::Args;
use crate::config::ConfigManager;
use crate::display;
use crate::launcher::{BrowserLauncher, Launcher, PrintLauncher};
use crate::platform::CfCli;
use crate::session::CfSession;
use crate::workflow::{DashboardReport, DashboardWorkflow};

/// Look up the dashboard for `app` via `kibana_app` and hand the URL off
pub fn run_dashboard(
    args: &Args,
    config: &ConfigManager,
    kibana_app: &str,
    app: &str,
    colour: bool,
) -> Result<DashboardReport> {
    let cf_config = config.get_cf_config();
    let binary = args.cf_binary.clone().unwrap_or(cf_config.binary);
    let cf_home = args.cf_home.clone().or(cf_config.home);

    let session = CfSession::load(cf_home.as_deref())?;
    let runner = CfCli::new(binary).with_cf_home(cf_home);
    debug!("Using cf client at {}", runner.binary().display());

    let mut dashboard = config.get_dashboard_config()?;
    if let Some(label) = &args.service_label {
        dashboard.service_label = label.clone();
    }
    let settings = dashboard.workflow_settings()?;

    info!(
        "Correlating '{}' with '{}' over {} in space '{}'",
        kibana_app, app, settings.service_label, session.space_name
    );
    let workflow = DashboardWorkflow::new(&runner, session.space_guid.as_str(), dashboard.route_parser(), settings);

    let launcher: &dyn Launcher = if args.print_url {
        &PrintLauncher
    } else {
        &BrowserLauncher
    };

    let report = workflow.run(kibana_app, app, launcher)?;

    if !args.print_url {
        println!("{}", display::opening_line(&report.url, colour));
    }

    Ok(report)
}
