//! Service instance correlation between two applications

use log::debug;

use crate::binding::ServiceBinding;
use crate::error::{KibanaError, KibanaResult};

/// True when both bindings name the same, non-empty service instance
pub fn correlate(a: &ServiceBinding, b: &ServiceBinding) -> bool {
    !a.name.is_empty() && a.name == b.name
}

/// Fail with `CorrelationMismatch` unless the bindings share an instance
pub fn ensure_shared(kibana: &ServiceBinding, app: &ServiceBinding, label: &str) -> KibanaResult<()> {
    if correlate(kibana, app) {
        debug!("Both apps share {} service '{}'", label, kibana.name);
        return Ok(());
    }

    Err(KibanaError::CorrelationMismatch {
        label: label.to_string(),
        kibana_service: kibana.name.clone(),
        app_service: app.name.clone(),
    })
}
