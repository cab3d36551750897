//! Service Binding Extraction
//!
//! Bound services are reported inside the application environment under
//! `system_env_json.VCAP_SERVICES`, grouped by service label. Only the first
//! binding of a label is considered; an application bound more than once to the
//! same service type is not an error.

use std::collections::HashMap;
use log::{debug, info};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{KibanaError, KibanaResult};
use crate::platform::{app_env_path, curl_json, CommandRunner};

/// Well-known key of the bound services inside the system environment
pub const VCAP_SERVICES: &str = "VCAP_SERVICES";

/// One bound service instance as exposed to the application runtime
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceBinding {
    /// Instance name, the correlation key
    pub name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub plan: String,
    /// Service-defined credentials, passed through untouched
    #[serde(default)]
    pub credentials: Map<String, Value>,
}

impl ServiceBinding {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            tags: Vec::new(),
            plan: String::new(),
            credentials: Map::new(),
        }
    }
}

/// Bindings grouped by service label
pub type ServiceGroups = HashMap<String, Vec<ServiceBinding>>;

#[derive(Debug, Deserialize)]
struct AppEnvironment {
    system_env_json: Map<String, Value>,
}

/// Decode the bound-service groups out of an environment snapshot
pub fn decode_service_groups(body: &str, context: &str) -> KibanaResult<ServiceGroups> {
    let environment: AppEnvironment =
        serde_json::from_str(body).map_err(|e| KibanaError::malformed(context, e))?;

    let services = environment
        .system_env_json
        .get(VCAP_SERVICES)
        .ok_or_else(|| KibanaError::malformed(context, format!("system_env_json has no {}", VCAP_SERVICES)))?;

    ServiceGroups::deserialize(services).map_err(|e| KibanaError::malformed(context, e))
}

/// Pick the first binding for `label` out of decoded groups
pub fn first_binding(groups: &ServiceGroups, app: &str, label: &str) -> KibanaResult<ServiceBinding> {
    groups
        .get(label)
        .and_then(|group| group.first())
        .cloned()
        .ok_or_else(|| KibanaError::NotBound {
            app: app.to_string(),
            label: label.to_string(),
        })
}

/// Fetches application environments and extracts bindings by service label
pub struct BindingExtractor<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
}

impl<'a, R: CommandRunner + ?Sized> BindingExtractor<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    /// Return the first `label` binding of the application with `app_guid`
    pub fn extract(&self, app_guid: &str, label: &str) -> KibanaResult<ServiceBinding> {
        let path = app_env_path(app_guid);
        debug!("Fetching environment for {} with {}", app_guid, path);
        let body = curl_json(self.runner, &path)?;

        let groups = decode_service_groups(&body, &path)?;
        debug!("App {} has bindings for labels: {:?}", app_guid, groups.keys().collect::<Vec<_>>());

        let binding = first_binding(&groups, app_guid, label)?;
        info!("App {} is bound to {} service '{}'", app_guid, label, binding.name);
        Ok(binding)
    }
}
