//! Dashboard lookup pipeline
//!
//! ```text
//! status(kibana) -> resolve(kibana) -> status(app) -> resolve(app)
//!   -> extract(kibana, label) -> extract(app, label) -> correlate
//!   -> parse routes(kibana status) -> build URL -> launch
//! ```
//!
//! Every step is blocking and the first failure ends the run.

use anyhow::Result;
use log::info;

use crate::binding::BindingExtractor;
use crate::correlation::ensure_shared;
use crate::error::KibanaResult;
use crate::launcher::Launcher;
use crate::platform::{fetch_status, CommandRunner};
use crate::resolver::AppResolver;
use crate::routes::{first_base_url, DashboardTemplate, RouteParser};

/// Service type shared by Kibana and the applications it indexes
pub const DEFAULT_SERVICE_LABEL: &str = "logstash14";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowSettings {
    pub service_label: String,
    pub template: DashboardTemplate,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            service_label: DEFAULT_SERVICE_LABEL.to_string(),
            template: DashboardTemplate::default(),
        }
    }
}

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardReport {
    pub kibana_guid: String,
    pub app_guid: String,
    pub service_name: String,
    pub url: String,
}

pub struct DashboardWorkflow<'a, R: CommandRunner + ?Sized, P: RouteParser> {
    runner: &'a R,
    space_guid: String,
    parser: P,
    settings: WorkflowSettings,
}

impl<'a, R: CommandRunner + ?Sized, P: RouteParser> DashboardWorkflow<'a, R, P> {
    pub fn new(runner: &'a R, space_guid: impl Into<String>, parser: P, settings: WorkflowSettings) -> Self {
        Self {
            runner,
            space_guid: space_guid.into(),
            parser,
            settings,
        }
    }

    /// Run every lookup step and compose the dashboard URL
    pub fn derive(&self, kibana_app: &str, app: &str) -> KibanaResult<DashboardReport> {
        let resolver = AppResolver::new(self.runner, self.space_guid.as_str());
        let extractor = BindingExtractor::new(self.runner);
        let label = self.settings.service_label.as_str();

        let kibana_status = fetch_status(self.runner, kibana_app)?;
        let kibana_guid = resolver.resolve(kibana_app)?;

        fetch_status(self.runner, app)?;
        let app_guid = resolver.resolve(app)?;

        let kibana_service = extractor
            .extract(&kibana_guid, label)
            .map_err(|e| e.for_app(kibana_app))?;
        let app_service = extractor.extract(&app_guid, label).map_err(|e| e.for_app(app))?;
        ensure_shared(&kibana_service, &app_service, label)?;

        let base_urls = self.parser.parse_base_urls(kibana_app, &kibana_status)?;
        let base_url = first_base_url(kibana_app, &base_urls)?;
        let url = self.settings.template.build(base_url, &app_guid);
        info!("Dashboard for '{}' is {}", app, url);

        Ok(DashboardReport {
            kibana_guid,
            app_guid,
            service_name: kibana_service.name,
            url,
        })
    }

    /// Derive the dashboard URL and hand it to `launcher`
    pub fn run<L: Launcher + ?Sized>(&self, kibana_app: &str, app: &str, launcher: &L) -> Result<DashboardReport> {
        let report = self.derive(kibana_app, app)?;
        launcher.launch(&report.url)?;
        Ok(report)
    }
}
