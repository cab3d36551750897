//! Fixed host CLI invocations used by the pipeline

use log::debug;
use serde_json::Value;

use super::CommandRunner;
use crate::error::{KibanaError, KibanaResult};

/// v2 API path searching the space for applications with an exact name
///
/// The name is percent-encoded so characters such as `&` or spaces stay
/// inside the `q` filter value.
pub fn app_search_path(space_guid: &str, app_name: &str) -> String {
    format!(
        "/v2/spaces/{}/apps?q=name:{}&inline-relations-depth=1",
        space_guid,
        urlencoding::encode(app_name)
    )
}

/// v2 API path of an application's environment description
pub fn app_env_path(app_guid: &str) -> String {
    format!("/v2/apps/{}/env", app_guid)
}

/// Fetch the textual `cf app` status block, which doubles as the existence check
pub fn fetch_status<R: CommandRunner + ?Sized>(runner: &R, app_name: &str) -> KibanaResult<Vec<String>> {
    debug!("Fetching status for app '{}'", app_name);
    runner.run(&["app", app_name]).map_err(|e| {
        if matches!(e, KibanaError::CommandFailed { .. }) {
            debug!("Status check for '{}' failed: {}", app_name, e);
            KibanaError::NotFound { app: app_name.to_string() }
        } else {
            e
        }
    })
}

/// Issue `cf curl <path>` and return the response body
///
/// The body is checked for a v2 API error document so callers never decode an
/// error response as if it were data.
pub fn curl_json<R: CommandRunner + ?Sized>(runner: &R, path: &str) -> KibanaResult<String> {
    let output = runner.run(&["curl", path])?;
    let body = output.join("\n");

    if let Ok(Value::Object(document)) = serde_json::from_str::<Value>(&body) {
        if let Some(error_code) = document.get("error_code").and_then(Value::as_str) {
            let description = document
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or("no description");
            return Err(KibanaError::command_failed(
                format!("cf curl {}", path),
                format!("{} ({})", description, error_code),
            ));
        }
    }

    Ok(body)
}
