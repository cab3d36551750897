//! Route and Dashboard URL Derivation
//!
//! Routes are scraped from the free-form `cf app` status block, so parsing sits
//! behind [`RouteParser`] and can be replaced if the host CLI output changes.

use log::debug;

use crate::error::{KibanaError, KibanaResult};

/// Status line label carrying routes in classic `cf app` output
pub const URLS_LABEL: &str = "urls:";
/// Status line label used by newer host CLI releases
pub const ROUTES_LABEL: &str = "routes:";
pub const DEFAULT_SCHEME: &str = "http://";
pub const APP_GUID_PLACEHOLDER: &str = "{app_guid}";
pub const DEFAULT_PATH_TEMPLATE: &str = "/#/dashboard/file/app-logs-{app_guid}.json";

/// Extracts an application's base URLs from its status output
pub trait RouteParser {
    /// Base URLs in the order reported; empty when no route line exists
    fn parse_base_urls(&self, app: &str, status_lines: &[String]) -> KibanaResult<Vec<String>>;
}

/// Parses the line whose first whitespace-delimited token is the route label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRouteParser {
    label: String,
    scheme: String,
}

impl StatusRouteParser {
    pub fn new(label: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scheme: scheme.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl Default for StatusRouteParser {
    fn default() -> Self {
        Self::new(URLS_LABEL, DEFAULT_SCHEME)
    }
}

impl RouteParser for StatusRouteParser {
    fn parse_base_urls(&self, app: &str, status_lines: &[String]) -> KibanaResult<Vec<String>> {
        let mut urls = Vec::new();

        for line in status_lines {
            let mut tokens = line.split_whitespace();
            if tokens.next() != Some(self.label.as_str()) {
                continue;
            }

            let hosts: Vec<&str> = tokens
                .map(|token| token.trim_matches(',').trim())
                .filter(|host| !host.is_empty())
                .collect();

            if hosts.is_empty() {
                return Err(KibanaError::NoRoute { app: app.to_string() });
            }

            urls.extend(hosts.into_iter().map(|host| format!("{}{}", self.scheme, host)));
        }

        debug!("Parsed base URLs for '{}': {:?}", app, urls);
        Ok(urls)
    }
}

/// First parsed base URL, or `NoRoute` when none were found
pub fn first_base_url<'u>(app: &str, urls: &'u [String]) -> KibanaResult<&'u str> {
    urls.first()
        .map(String::as_str)
        .ok_or_else(|| KibanaError::NoRoute { app: app.to_string() })
}

/// Path template appended to the Kibana base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardTemplate {
    path_template: String,
}

impl DashboardTemplate {
    pub fn new(path_template: impl Into<String>) -> KibanaResult<Self> {
        let path_template = path_template.into();
        if !path_template.contains(APP_GUID_PLACEHOLDER) {
            return Err(KibanaError::InvalidInput {
                message: format!(
                    "dashboard path template '{}' must contain {}",
                    path_template, APP_GUID_PLACEHOLDER
                ),
            });
        }
        Ok(Self { path_template })
    }

    pub fn path_template(&self) -> &str {
        &self.path_template
    }

    pub fn build(&self, base_url: &str, app_guid: &str) -> String {
        let path = self.path_template.replace(APP_GUID_PLACEHOLDER, app_guid);
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

impl Default for DashboardTemplate {
    fn default() -> Self {
        Self {
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
        }
    }
}

/// Dashboard URL for `app_guid` under the default template
pub fn build_dashboard_url(base_url: &str, app_guid: &str) -> String {
    DashboardTemplate::default().build(base_url, app_guid)
}
