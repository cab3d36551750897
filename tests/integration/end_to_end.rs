//! End-to-end dashboard lookup through the library pipeline

mod support;

use kibana_me_logs::{DashboardWorkflow, KibanaError, StatusRouteParser, WorkflowSettings};
use support::{status, FakeCf, RecordingLauncher, SPACE_GUID};

fn workflow(cf: &FakeCf) -> DashboardWorkflow<'_, FakeCf, StatusRouteParser> {
    DashboardWorkflow::new(cf, SPACE_GUID, StatusRouteParser::default(), WorkflowSettings::default())
}

#[test]
fn test_shared_logging_service_opens_app_dashboard() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("urls: dash.example.com"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));
    let launcher = RecordingLauncher::default();

    let report = workflow(&cf).run("dash", "web1", &launcher).unwrap();

    assert_eq!(report.url, "http://dash.example.com/#/dashboard/file/app-logs-guid-B.json");
    assert_eq!(
        *launcher.urls.borrow(),
        vec!["http://dash.example.com/#/dashboard/file/app-logs-guid-B.json".to_string()]
    );
}

#[test]
fn test_different_logging_services_abort_without_launch() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("urls: dash.example.com"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("other-log"));
    let launcher = RecordingLauncher::default();

    let err = workflow(&cf).run("dash", "web1", &launcher).unwrap_err();

    match err.downcast_ref::<KibanaError>() {
        Some(KibanaError::CorrelationMismatch { kibana_service, app_service, .. }) => {
            assert_eq!(kibana_service, "shared-log");
            assert_eq!(app_service, "other-log");
        }
        other => panic!("expected correlation mismatch, got {:?}", other),
    }
    assert!(launcher.urls.borrow().is_empty());
}

#[test]
fn test_first_route_of_many_is_used() {
    let cf = FakeCf::default()
        .with_app(
            "dash",
            "guid-A",
            &status("urls: kibana.example.com, dash.example.com"),
            Some("shared-log"),
        )
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));

    let report = workflow(&cf).derive("dash", "web1").unwrap();
    assert_eq!(report.url, "http://kibana.example.com/#/dashboard/file/app-logs-guid-B.json");
    assert_eq!(report.kibana_guid, "guid-A");
    assert_eq!(report.service_name, "shared-log");
}

#[test]
fn test_each_platform_query_issued_once() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("urls: dash.example.com"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("urls: web1.example.com"), Some("shared-log"));

    workflow(&cf).derive("dash", "web1").unwrap();

    let commands = cf.commands();
    assert_eq!(commands.len(), 6);
    assert_eq!(commands[0], "app dash");
    assert_eq!(commands[5], "curl /v2/apps/guid-B/env");
}

#[test]
fn test_routes_label_and_custom_template() {
    let cf = FakeCf::default()
        .with_app("dash", "guid-A", &status("routes:   dash.apps.example.com"), Some("shared-log"))
        .with_app("web1", "guid-B", &status("routes:   web1.apps.example.com"), Some("shared-log"));
    let settings = WorkflowSettings {
        template: kibana_me_logs::DashboardTemplate::new("/app/kibana#/dashboard/{app_guid}").unwrap(),
        ..WorkflowSettings::default()
    };
    let parser = StatusRouteParser::new("routes:", "https://");

    let report = DashboardWorkflow::new(&cf, SPACE_GUID, parser, settings)
        .derive("dash", "web1")
        .unwrap();
    assert_eq!(report.url, "https://dash.apps.example.com/app/kibana#/dashboard/guid-B");
}
