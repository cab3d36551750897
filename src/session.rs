//! Host CLI Session
//!
//! The `cf` client persists the targeted API endpoint, organisation and space in
//! `$CF_HOME/.cf/config.json` (falling back to the home directory). The space
//! GUID read here is handed to the resolver explicitly.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, info};
use serde::Deserialize;

use crate::error::{KibanaError, KibanaResult};

const SESSION_DIR: &str = ".cf";
const SESSION_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
struct NamedFields {
    #[serde(rename = "GUID", alias = "Guid", default)]
    guid: String,
    #[serde(rename = "Name", default)]
    name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SessionFile {
    #[serde(rename = "Target", default)]
    target: String,
    #[serde(rename = "OrganizationFields", default)]
    organization: NamedFields,
    #[serde(rename = "SpaceFields", default)]
    space: NamedFields,
}

/// Targeted space as recorded by the host CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfSession {
    pub api_endpoint: String,
    pub organization: String,
    pub space_name: String,
    pub space_guid: String,
}

impl CfSession {
    /// Locate the session file, honouring an explicit home, then `$CF_HOME`
    pub fn default_path(cf_home: Option<&Path>) -> KibanaResult<PathBuf> {
        let base = match cf_home {
            Some(home) => home.to_path_buf(),
            None => match env::var_os("CF_HOME") {
                Some(home) if !home.is_empty() => PathBuf::from(home),
                _ => dirs::home_dir()
                    .ok_or_else(|| KibanaError::session("unable to determine home directory"))?,
            },
        };
        Ok(base.join(SESSION_DIR).join(SESSION_FILE))
    }

    pub fn load(cf_home: Option<&Path>) -> KibanaResult<Self> {
        let path = Self::default_path(cf_home)?;
        Self::load_from_file(&path)
    }

    pub fn load_from_file(path: &Path) -> KibanaResult<Self> {
        debug!("Reading cf session from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            KibanaError::session(format!("unable to read {}: {} (have you run 'cf login'?)", path.display(), e))
        })?;
        let session = Self::parse(&content)
            .map_err(|e| KibanaError::session(format!("{} in {}", e, path.display())))?;
        info!(
            "Targeting org '{}' space '{}' on {}",
            session.organization, session.space_name, session.api_endpoint
        );
        Ok(session)
    }

    fn parse(content: &str) -> Result<Self, String> {
        let file: SessionFile =
            serde_json::from_str(content).map_err(|e| format!("invalid session file: {}", e))?;

        if file.space.guid.trim().is_empty() {
            return Err("no space targeted, run 'cf target -s <space>'".to_string());
        }

        Ok(Self {
            api_endpoint: file.target,
            organization: file.organization.name,
            space_name: file.space.name,
            space_guid: file.space.guid,
        })
    }
}
