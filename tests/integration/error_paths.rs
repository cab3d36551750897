//! Failure handling across the lookup pipeline

mod support;

use kibana_me_logs::{DashboardWorkflow, KibanaError, StatusRouteParser, WorkflowSettings};
use support::{env_response, search_response, status, FakeCf, SPACE_GUID};

fn derive(cf: &FakeCf) -> Result<kibana_me_logs::DashboardReport, KibanaError> {
    DashboardWorkflow::new(cf, SPACE_GUID, StatusRouteParser::default(), WorkflowSettings::default())
        .derive("dash", "web1")
}

fn healthy_kibana() -> FakeCf {
    FakeCf::default().with_app("dash", "guid-A", &status("urls: dash.example.com"), Some("shared-log"))
}

#[test]
fn test_unknown_target_app_is_not_found() {
    let err = derive(&healthy_kibana()).unwrap_err();
    assert_eq!(err, KibanaError::NotFound { app: "web1".to_string() });
    assert_eq!(err.to_string(), "app 'web1' does not exist in this org/space");
}

#[test]
fn test_empty_search_result_is_not_found() {
    let cf = healthy_kibana()
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"))
        .respond(
            &format!("curl /v2/spaces/{}/apps?q=name:web1&inline-relations-depth=1", SPACE_GUID),
            &search_response(&[]),
        );
    assert_eq!(derive(&cf).unwrap_err(), KibanaError::NotFound { app: "web1".to_string() });
}

#[test]
fn test_target_without_logging_service_is_not_bound() {
    let cf = healthy_kibana().with_app("web1", "guid-B", &status("urls: web1.example.com"), None);
    let err = derive(&cf).unwrap_err();
    assert_eq!(
        err,
        KibanaError::NotBound { app: "web1".to_string(), label: "logstash14".to_string() }
    );
}

#[test]
fn test_kibana_without_logging_service_is_not_bound() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("urls: dash.example.com"), None)
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));
    assert!(matches!(
        derive(&cf).unwrap_err(),
        KibanaError::NotBound { app, .. } if app == "dash"
    ));
}

#[test]
fn test_truncated_environment_is_malformed() {
    let cf = healthy_kibana()
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"))
        .respond("curl /v2/apps/guid-B/env", r#"{"system_env_json": {"VCAP_SERV"#);
    assert!(matches!(derive(&cf).unwrap_err(), KibanaError::MalformedResponse { .. }));
}

#[test]
fn test_api_error_on_env_is_reported() {
    let cf = healthy_kibana()
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"))
        .respond(
            "curl /v2/apps/guid-B/env",
            r#"{"code": 10003, "description": "You are not authorized to perform the requested action", "error_code": "CF-NotAuthorized"}"#,
        );
    let err = derive(&cf).unwrap_err();
    assert!(err.to_string().contains("CF-NotAuthorized"));
}

#[test]
fn test_kibana_without_route_line_is_no_route() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("stack: cflinuxfs2"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));
    assert_eq!(derive(&cf).unwrap_err(), KibanaError::NoRoute { app: "dash".to_string() });
}

#[test]
fn test_kibana_with_bare_route_label_is_no_route() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("urls:"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));
    assert_eq!(derive(&cf).unwrap_err(), KibanaError::NoRoute { app: "dash".to_string() });
}

#[test]
fn test_env_response_helper_shape() {
    let body = env_response(Some("shared-log"));
    let groups = kibana_me_logs::binding::decode_service_groups(&body, "test").unwrap();
    assert_eq!(groups["logstash14"][0].credentials["port"], 5514);
}
