use httpmock::prelude::*;
use postmark_client::models::{
    CreateDomainRequest, FilteringParameters, ServerFilteringParameters,
};
use postmark_client::{AccountClient, ClientOptionsOverrides, ErrorKind};
use serde_json::json;

const TOKEN: &str = "account-token";

fn client_for(server: &MockServer) -> AccountClient {
    AccountClient::with_options(
        TOKEN,
        ClientOptionsOverrides::new()
            .use_https(false)
            .request_host(server.address().to_string())
            .timeout(5),
    )
    .unwrap()
}

fn domain_json(id: i64) -> serde_json::Value {
    json!({
        "ID": id,
        "Name": "example.com",
        "SPFVerified": true,
        "DKIMVerified": false,
        "WeakDKIM": false,
        "ReturnPathDomainVerified": false,
        "DKIMPendingHost": "20261018pm._domainkey.example.com",
        "ReturnPathDomain": "pm-bounces.example.com",
        "ReturnPathDomainCNAMEValue": "pm.mtasv.net"
    })
}

#[tokio::test]
async fn get_servers_uses_account_token_and_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/servers")
                .header("x-postmark-account-token", TOKEN)
                .query_param("count", "100")
                .query_param("offset", "0")
                .query_param("name", "Production");
            then.status(200).json_body(json!({
                "TotalCount": 1,
                "Servers": [{"ID": 7, "Name": "Production", "DeliveryType": "Sandbox"}]
            }));
        })
        .await;

    let filter = ServerFilteringParameters {
        name: Some("Production".to_string()),
        count: Some(0),
        ..Default::default()
    };
    let servers = client_for(&server).get_servers(filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(servers.total_count, 1);
    assert_eq!(servers.servers[0].name, "Production");
}

#[tokio::test]
async fn get_domains_pages_with_explicit_offset() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/domains")
                .query_param("count", "100")
                .query_param("offset", "200");
            then.status(200)
                .json_body(json!({"TotalCount": 201, "Domains": [domain_json(3)]}));
        })
        .await;

    let filter = FilteringParameters {
        count: None,
        offset: Some(200),
    };
    let domains = client_for(&server).get_domains(filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(domains.total_count, 201);
    assert_eq!(domains.domains[0].id, 3);
    assert!(domains.domains[0].spf_verified);
}

#[tokio::test]
async fn create_domain_posts_request_and_decodes_details() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/domains").json_body(json!({
                "Name": "example.com",
                "ReturnPathDomain": "pm-bounces.example.com"
            }));
            then.status(200).json_body(domain_json(9));
        })
        .await;

    let request = CreateDomainRequest {
        name: "example.com".to_string(),
        return_path_domain: Some("pm-bounces.example.com".to_string()),
    };
    let details = client_for(&server).create_domain(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(details.domain.id, 9);
    assert_eq!(
        details.return_path_domain_cname_value.as_deref(),
        Some("pm.mtasv.net")
    );
}

#[tokio::test]
async fn verify_dkim_puts_empty_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/domains/9/verifyDkim")
                .json_body(json!({}));
            then.status(200).json_body(domain_json(9));
        })
        .await;

    let details = client_for(&server).verify_domain_dkim(9).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        details.dkim_pending_host.as_deref(),
        Some("20261018pm._domainkey.example.com")
    );
}

#[tokio::test]
async fn delete_server_returns_acknowledgement() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/servers/7");
            then.status(200)
                .json_body(json!({"ErrorCode": 0, "Message": "Server Production removed."}));
        })
        .await;

    let response = client_for(&server).delete_server(7).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.error_code, 0);
    assert_eq!(response.message, "Server Production removed.");
}

#[tokio::test]
async fn missing_domain_is_a_request_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/domains/404");
            then.status(404);
        })
        .await;

    let err = client_for(&server).get_domain(404).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.error_code(), Some(0));
    assert_eq!(err.message(), "Request failed with status code 404");
}

#[test]
fn empty_token_is_rejected() {
    let err = AccountClient::new("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
