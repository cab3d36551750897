//! Application GUID resolution within the targeted space

use log::{debug, info};
use serde::Deserialize;

use crate::error::{KibanaError, KibanaResult};
use crate::platform::{app_search_path, curl_json, CommandRunner};

#[derive(Debug, Deserialize)]
struct AppSearchMetadata {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct AppSearchResource {
    metadata: AppSearchMetadata,
}

#[derive(Debug, Deserialize)]
struct AppSearchResults {
    resources: Vec<AppSearchResource>,
}

/// Resolves application names to GUIDs through the v2 search endpoint
pub struct AppResolver<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    space_guid: String,
}

impl<'a, R: CommandRunner + ?Sized> AppResolver<'a, R> {
    pub fn new(runner: &'a R, space_guid: impl Into<String>) -> Self {
        Self {
            runner,
            space_guid: space_guid.into(),
        }
    }

    pub fn space_guid(&self) -> &str {
        &self.space_guid
    }

    /// Return the GUID of the first application named `name` in the space
    pub fn resolve(&self, name: &str) -> KibanaResult<String> {
        if name.trim().is_empty() {
            return Err(KibanaError::InvalidInput {
                message: "application name must not be empty".to_string(),
            });
        }

        let path = app_search_path(&self.space_guid, name);
        debug!("Searching for app '{}' with {}", name, path);
        let body = curl_json(self.runner, &path)?;

        let results: AppSearchResults =
            serde_json::from_str(&body).map_err(|e| KibanaError::malformed(&path, e))?;

        let first = results
            .resources
            .into_iter()
            .next()
            .ok_or_else(|| KibanaError::NotFound { app: name.to_string() })?;

        info!("Resolved app '{}' to {}", name, first.metadata.guid);
        Ok(first.metadata.guid)
    }
}
