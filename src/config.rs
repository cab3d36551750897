use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;
use anyhow::{Context, Result};
use toml::Value;
use log::{debug, info};

use crate::platform::cf::DEFAULT_CF_BINARY;
use crate::routes::{DashboardTemplate, StatusRouteParser, DEFAULT_PATH_TEMPLATE, DEFAULT_SCHEME, URLS_LABEL};
use crate::workflow::{WorkflowSettings, DEFAULT_SERVICE_LABEL};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "KIBANA_ME_LOGS_CONFIG";

/// Configuration storage - section_name -> key -> value
pub type Configuration = HashMap<String, HashMap<String, String>>;

/// Host CLI settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CfConfig {
    pub binary: PathBuf,
    pub home: Option<PathBuf>,
}

/// Dashboard derivation settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub service_label: String,
    pub scheme: String,
    pub path_template: String,
    pub route_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            service_label: DEFAULT_SERVICE_LABEL.to_string(),
            scheme: DEFAULT_SCHEME.to_string(),
            path_template: DEFAULT_PATH_TEMPLATE.to_string(),
            route_label: URLS_LABEL.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn route_parser(&self) -> StatusRouteParser {
        StatusRouteParser::new(self.route_label.clone(), self.scheme.clone())
    }

    pub fn workflow_settings(&self) -> Result<WorkflowSettings> {
        let template = DashboardTemplate::new(self.path_template.clone())?;
        Ok(WorkflowSettings {
            service_label: self.service_label.clone(),
            template,
        })
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Configuration,
    config_file_path: Option<PathBuf>,
    selected_section: Option<String>,
}

impl ConfigManager {
    /// Create a new ConfigManager from a Configuration (primarily for testing)
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config,
            config_file_path: None,
            selected_section: None,
        }
    }

    /// Load configuration using discovery hierarchy
    pub fn load() -> Result<Self> {
        debug!("Starting configuration discovery");

        for path in discover_config_files() {
            debug!("Attempting to load config from: {}", path.display());
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        debug!("No configuration file found, using empty configuration");
        Ok(Self::from_config(Configuration::new()))
    }

    /// Load configuration from explicit file path
    pub fn load_from_file(path: PathBuf) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = parse_toml_config(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from: {}", path.display());
        Ok(Self {
            config,
            config_file_path: Some(path),
            selected_section: None,
        })
    }

    pub fn config_file_path(&self) -> Option<&PathBuf> {
        self.config_file_path.as_ref()
    }

    /// Get value from configuration with section fallback
    pub fn get_value(&self, section: &str, key: &str) -> Option<&String> {
        // Priority: selected_section -> specified section -> base
        if let Some(selected) = &self.selected_section {
            if let Some(value) = self.config.get(selected).and_then(|s| s.get(key)) {
                return Some(value);
            }
        }

        if let Some(value) = self.config.get(section).and_then(|s| s.get(key)) {
            return Some(value);
        }

        self.config.get("base").and_then(|s| s.get(key))
    }

    /// Select configuration section for --config-name
    pub fn select_section(&mut self, section: String) {
        debug!("Selecting configuration section: {}", section);
        self.selected_section = Some(section);
    }

    /// Get log level value with type conversion
    pub fn get_log_level(&self, section: &str, key: &str) -> Result<Option<log::LevelFilter>> {
        match self.get_value(section, key) {
            Some(value) => Ok(Some(crate::logging::parse_log_level(value)?)),
            None => Ok(None),
        }
    }

    /// Get path value with type conversion
    pub fn get_path(&self, section: &str, key: &str) -> Option<PathBuf> {
        self.get_value(section, key).map(PathBuf::from)
    }

    /// Host CLI settings from the `[cf]` section
    pub fn get_cf_config(&self) -> CfConfig {
        CfConfig {
            binary: self
                .get_path("cf", "binary")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CF_BINARY)),
            home: self.get_path("cf", "home"),
        }
    }

    /// Dashboard settings from the `[dashboard]` section
    pub fn get_dashboard_config(&self) -> Result<DashboardConfig> {
        let mut config = DashboardConfig::default();

        if let Some(label) = self.get_value("dashboard", "service-label") {
            if label.trim().is_empty() {
                anyhow::bail!("Invalid service-label in config: value is empty");
            }
            config.service_label = label.clone();
        }

        if let Some(scheme) = self.get_value("dashboard", "scheme") {
            if scheme.trim().is_empty() {
                anyhow::bail!("Invalid scheme in config: value is empty");
            }
            config.scheme = scheme.clone();
        }

        if let Some(template) = self.get_value("dashboard", "path-template") {
            DashboardTemplate::new(template.clone())
                .with_context(|| format!("Invalid path-template in config: {}", template))?;
            config.path_template = template.clone();
        }

        if let Some(label) = self.get_value("dashboard", "route-label") {
            // matched against a single whitespace-delimited token
            if label.is_empty() || label.chars().any(char::is_whitespace) {
                anyhow::bail!("Invalid route-label in config: '{}' must be a single non-empty token", label);
            }
            config.route_label = label.clone();
        }

        Ok(config)
    }
}

/// Discover configuration files in order of precedence
fn discover_config_files() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Environment variable $KIBANA_ME_LOGS_CONFIG
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        paths.push(PathBuf::from(env_path));
    }

    // 2. XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("kibana-me-logs").join("config.toml"));
    }

    // 3. Home directory
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(".kibana-me-logs.toml"));
    }

    // 4. Project local
    paths.push(PathBuf::from("./.kibana-me-logs.toml"));

    debug!("Config discovery paths: {:?}", paths);
    paths
}

/// Parse TOML content to string-based configuration
fn parse_toml_config(content: &str) -> Result<Configuration> {
    let toml_value: Value = content.parse().context("Failed to parse TOML content")?;

    let mut config = Configuration::new();
    if let Value::Table(table) = toml_value {
        flatten_toml_table(&table, String::new(), &mut config);
    }

    debug!("Parsed configuration: {:?}", config);
    Ok(config)
}

/// Recursively flatten TOML tables into section.subsection format
fn flatten_toml_table(table: &toml::Table, prefix: String, config: &mut Configuration) {
    for (key, value) in table {
        let section_name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(subtable) if subtable.values().any(|v| matches!(v, Value::Table(_))) => {
                flatten_toml_table(subtable, section_name, config);
            }
            Value::Table(subtable) => {
                let section = config.entry(section_name).or_default();
                for (subkey, subvalue) in subtable {
                    section.insert(subkey.clone(), toml_value_to_string(subvalue));
                }
            }
            // Top-level keys belong to [base]
            _ if prefix.is_empty() => {
                config
                    .entry("base".to_string())
                    .or_default()
                    .insert(key.clone(), toml_value_to_string(value));
            }
            _ => {
                config
                    .entry(prefix.clone())
                    .or_default()
                    .insert(key.clone(), toml_value_to_string(value));
            }
        }
    }
}

/// Convert TOML Value to string representation
fn toml_value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
