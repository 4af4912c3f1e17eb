//! Integration tests for run_checks against mock lookup and discovery services
//!
//! These tests verify the end-to-end orchestration:
//! - Token fetch followed by record lookups with the token header
//! - Selector discovery and its three outcomes
//! - Argument validation before any network traffic

use std::time::Duration;

use email_check::error_handling::{DiscoveryError, QueryError, ValidationError};
use email_check::{run_checks, CheckError, Config, LogFormat, LogLevel, Verdict};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

/// Helper function to create a Config pointing both services at `server`
fn create_test_config(server: &MockServer, domain: &str, selectors: Option<Vec<&str>>) -> Config {
    Config {
        domain: domain.to_string(),
        selectors: selectors.map(|names| names.into_iter().map(String::from).collect()),
        log_level: LogLevel::Error, // Reduce noise in tests
        log_format: LogFormat::Plain,
        timeout_seconds: 5,
        user_agent: "email_check_test/1.0".to_string(),
        lookup_url: server.uri(),
        discovery_url: server.uri(),
        retry_attempts: 2,
        retry_delay: Duration::from_millis(5),
    }
}

async fn mount_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "TempAuthKey": TOKEN })))
        .mount(server)
        .await;
}

async fn mount_lookup(server: &MockServer, command: &str, argument: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/api/v1/lookup"))
        .and(query_param("command", command))
        .and(query_param("argument", argument))
        .and(header("tempauthorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_discovery(server: &MockServer, domain: &str, html: &str) {
    Mock::given(method("GET"))
        .and(path("/tools/dkim-lookup/status"))
        .and(query_param("domain", domain))
        .and(query_param("selector", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

async fn mount_spf_and_dmarc(server: &MockServer, domain: &str) {
    mount_lookup(
        server,
        "spf",
        domain,
        json!({
            "Failed": [],
            "Warnings": [],
            "Passed": [{"Name": "SPF Record Published", "Info": "SPF Record found"}],
            "Information": [{"Tag": "v", "Name": "Version", "Description": "v=spf1 -all"}]
        }),
    )
    .await;
    mount_lookup(
        server,
        "dmarc",
        domain,
        json!({
            "Failed": [{"Name": "DMARC Policy Not Enabled", "Info": "p=none"}],
            "Warnings": null,
            "Passed": []
        }),
    )
    .await;
}

fn passing_dkim() -> serde_json::Value {
    json!({
        "Failed": [],
        "Warnings": [],
        "Passed": [{"Name": "DKIM Record Published", "Info": "DKIM Record found"}],
        "Information": [{"Tag": "v", "Name": "Version", "Description": "v=DKIM1; k=rsa; p=MIGf"}]
    })
}

async fn lookup_commands(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == "/api/v1/lookup")
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == "command")
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}

#[tokio::test]
async fn test_explicit_selector_full_run() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_lookup(&server, "dkim", "sel1._domainkey.example.com", passing_dkim()).await;
    mount_spf_and_dmarc(&server, "example.com").await;

    let config = create_test_config(&server, "example.com", Some(vec!["sel1"]));
    let report = run_checks(&config).await.expect("run should complete");

    assert_eq!(report.domain.as_str(), "example.com");
    assert_eq!(report.dkim.verdict, Verdict::Pass);
    assert!(!report.dkim.discovered);
    assert_eq!(report.dkim.selectors.len(), 1);
    assert_eq!(report.dkim.selectors[0].dns_name, "sel1._domainkey.example.com");
    assert_eq!(
        report.dkim.selectors[0].record_content.as_deref(),
        Some("v=DKIM1; k=rsa; p=MIGf")
    );
    assert!(report.dkim.failures.is_empty());
    assert!(report.dkim.warnings.is_empty());

    assert_eq!(report.spf.verdict, Verdict::Pass);
    assert_eq!(report.spf.record_content.as_deref(), Some("v=spf1 -all"));
    assert_eq!(report.dmarc.verdict, Verdict::Fail);
    assert_eq!(report.dmarc.failures[0].name, "DMARC Policy Not Enabled");

    // DKIM, then SPF, then DMARC; no discovery request
    assert_eq!(lookup_commands(&server).await, vec!["dkim", "spf", "dmarc"]);
    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests
        .iter()
        .all(|request| request.url.path() != "/tools/dkim-lookup/status"));
    // One token per lookup
    let tokens = requests
        .iter()
        .filter(|request| request.url.path() == "/api/v1/user")
        .count();
    assert_eq!(tokens, 3);
}

#[tokio::test]
async fn test_discovered_selectors_are_checked_in_page_order() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_discovery(
        &server,
        "example.com",
        r#"<html><body>
            <div class="selector"><div class="title">google</div></div>
            <div class="selector"><div class="title">testsel</div></div>
        </body></html>"#,
    )
    .await;
    mount_lookup(&server, "dkim", "google._domainkey.example.com", passing_dkim()).await;
    mount_lookup(
        &server,
        "dkim",
        "testsel._domainkey.example.com",
        json!({
            "Failed": [{"Name": "DKIM Syntax Check", "Info": "invalid"}],
            "Warnings": [{"Name": "DKIM Key Length", "Info": "1024 bit key"}],
            "Passed": [],
            "Information": [
                {"Tag": "v", "Name": "Version", "Description": "v=DKIM1; t=y"},
                {"Tag": "t", "Name": "Flags", "Description": "y"}
            ]
        }),
    )
    .await;
    mount_spf_and_dmarc(&server, "example.com").await;

    let config = create_test_config(&server, "example.com", None);
    let report = run_checks(&config).await.expect("run should complete");

    let names: Vec<&str> = report.dkim.selectors.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["google", "testsel"]);
    assert!(report.dkim.discovered);
    assert!(report.dkim.selectors[1].is_test);

    // Failing test selector only warns
    assert_eq!(report.dkim.verdict, Verdict::Pass);
    assert!(report.dkim.failures.is_empty());
    assert_eq!(
        report.dkim.warnings,
        vec![
            "Test selector testsel failed lookup checks.".to_string(),
            "Selector testsel has warnings: DKIM Key Length".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_no_selectors_discovered_fails_dkim() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_discovery(
        &server,
        "example.com",
        r#"<html><body><div class="no-data-title">No selectors detected</div></body></html>"#,
    )
    .await;
    mount_spf_and_dmarc(&server, "example.com").await;

    let config = create_test_config(&server, "example.com", None);
    let report = run_checks(&config).await.expect("run should complete");

    assert_eq!(report.dkim.verdict, Verdict::Fail);
    assert!(report.dkim.selectors.is_empty());
    assert_eq!(
        report.dkim.failures,
        vec!["No DKIM selectors found for example.com.".to_string()]
    );
    assert!(report.dkim.warnings.is_empty());

    // SPF and DMARC still run; DKIM makes no lookups
    assert_eq!(lookup_commands(&server).await, vec!["spf", "dmarc"]);
}

#[tokio::test]
async fn test_unrecognized_discovery_page_aborts() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    mount_discovery(&server, "example.com", "<html><body>maintenance</body></html>").await;

    let config = create_test_config(&server, "example.com", None);
    let err = run_checks(&config).await.unwrap_err();

    match &err {
        CheckError::Discovery(DiscoveryError::UnrecognizedResponse { domain }) => {
            assert_eq!(domain, "example.com");
        }
        other => panic!("expected UnrecognizedResponse, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Failed to find selectors in the discovery response for example.com."
    );
    assert!(lookup_commands(&server).await.is_empty());
}

#[tokio::test]
async fn test_empty_selector_list_rejected_before_network() {
    let server = MockServer::start().await;

    let config = create_test_config(&server, "example.com", Some(Vec::new()));
    let err = run_checks(&config).await.unwrap_err();

    assert!(matches!(
        err,
        CheckError::Validation(ValidationError::EmptySelectorList)
    ));
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_invalid_domain_rejected_before_network() {
    let server = MockServer::start().await;

    for domain in ["", "   ", "not a domain", "nodot"] {
        let config = create_test_config(&server, domain, None);
        let err = run_checks(&config).await.unwrap_err();
        assert!(
            matches!(err, CheckError::Validation(_)),
            "{:?} should fail validation, got {:?}",
            domain,
            err
        );
    }
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_missing_token_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "TempAuthKey": null })))
        .mount(&server)
        .await;

    let config = create_test_config(&server, "example.com", Some(vec!["sel1"]));
    let err = run_checks(&config).await.unwrap_err();

    assert!(
        matches!(err, CheckError::Query(QueryError::Decode { .. })),
        "expected Decode, got {:?}",
        err
    );
    assert!(lookup_commands(&server).await.is_empty());
}

#[tokio::test]
async fn test_unauthorized_lookup_aborts_run() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/lookup"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&server)
        .await;

    let config = create_test_config(&server, "example.com", Some(vec!["sel1"]));
    let err = run_checks(&config).await.unwrap_err();

    match err {
        CheckError::Query(QueryError::Unauthorized { status, body, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad token");
        }
        other => panic!("expected Unauthorized, got {:?}", other),
    }
    // Not retried, and SPF/DMARC never ran
    assert_eq!(lookup_commands(&server).await, vec!["dkim"]);
}

#[tokio::test]
async fn test_failing_service_exhausts_configured_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/user"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let config = create_test_config(&server, "example.com", Some(vec!["sel1"]));
    let err = run_checks(&config).await.unwrap_err();

    match err {
        CheckError::Query(QueryError::RetriesExhausted {
            attempts, status, ..
        }) => {
            assert_eq!(attempts, 2);
            assert_eq!(status, 502);
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 2);
}
