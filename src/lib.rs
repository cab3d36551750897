//! Locate a Kibana application and a target application on Cloud Foundry,
//! confirm they share a logging service, and open the Kibana dashboard for the
//! target application.

pub mod app;
pub mod binding;
pub mod cli;
pub mod config;
pub mod correlation;
pub mod display;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod platform;
pub mod resolver;
pub mod routes;
pub mod session;
pub mod workflow;

pub use binding::{BindingExtractor, ServiceBinding};
pub use correlation::correlate;
pub use error::{KibanaError, KibanaResult};
pub use platform::{CfCli, CommandRunner};
pub use resolver::AppResolver;
pub use routes::{build_dashboard_url, DashboardTemplate, RouteParser, StatusRouteParser};
pub use workflow::{DashboardReport, DashboardWorkflow, WorkflowSettings};
