//! Shared fakes for library-level integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;
use kibana_me_logs::launcher::Launcher;
use kibana_me_logs::{CommandRunner, KibanaError, KibanaResult};

pub const SPACE_GUID: &str = "space-guid";

/// Canned host CLI responses keyed by the joined argument list
#[derive(Default)]
pub struct FakeCf {
    responses: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeCf {
    pub fn respond(mut self, command: &str, output: &str) -> Self {
        self.responses.insert(command.to_string(), output.to_string());
        self
    }

    pub fn with_app(self, name: &str, guid: &str, status: &str, service: Option<&str>) -> Self {
        let search = format!("curl /v2/spaces/{}/apps?q=name:{}&inline-relations-depth=1", SPACE_GUID, name);
        let env = format!("curl /v2/apps/{}/env", guid);
        self.respond(&format!("app {}", name), status)
            .respond(&search, &search_response(&[guid]))
            .respond(&env, &env_response(service))
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeCf {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());
        match self.responses.get(&command) {
            Some(output) => Ok(output.lines().map(str::to_string).collect()),
            None => Err(KibanaError::CommandFailed {
                command,
                message: "FAILED".to_string(),
            }),
        }
    }
}

/// Launcher that remembers every URL it was given
#[derive(Default)]
pub struct RecordingLauncher {
    pub urls: RefCell<Vec<String>>,
}

impl Launcher for RecordingLauncher {
    fn launch(&self, url: &str) -> Result<()> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(())
    }
}

pub fn search_response(guids: &[&str]) -> String {
    let resources: Vec<String> = guids
        .iter()
        .map(|guid| format!(r#"{{"metadata": {{"guid": "{}", "url": "/v2/apps/{}"}}, "entity": {{}}}}"#, guid, guid))
        .collect();
    format!(
        r#"{{"total_results": {}, "total_pages": 1, "resources": [{}]}}"#,
        guids.len(),
        resources.join(", ")
    )
}

pub fn env_response(service: Option<&str>) -> String {
    let services = match service {
        Some(name) => format!(
            r#"{{"logstash14": [{{"name": "{}", "label": "logstash14", "tags": ["logging"], "plan": "free", "credentials": {{"hostname": "10.0.0.9", "port": 5514}}}}]}}"#,
            name
        ),
        None => "{}".to_string(),
    };
    format!(
        r#"{{"staging_env_json": {{}}, "running_env_json": {{}}, "environment_json": {{}}, "system_env_json": {{"VCAP_SERVICES": {}}}}}"#,
        services
    )
}

pub fn status(route_line: &str) -> String {
    format!(
        "Showing health and status for app in org acme / space dev as admin...\nOK\n\nrequested state: started\ninstances: 1/1\nusage: 256M x 1 instances\n{}\nlast uploaded: Tue Mar 3 09:00:00 UTC 2015\n",
        route_line
    )
}
