//! Request envelope and error classification tests.
//!
//! Uses wiremock to stand in for the Omie API.

use omie::{Company, Find, OmieClient, OmieError};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_request_posts_envelope_to_resource_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/geral/clientes/"))
        .and(body_json(json!({
            "app_key": "key",
            "app_secret": "secret",
            "call": "ConsultarCliente",
            "param": [{"codigo_cliente_omie": 8898}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OmieClient::new("key", "secret", &mock_server.uri()).unwrap();
    let value = assert_ok!(
        client
            .request(
                "v1/geral/clientes/",
                "ConsultarCliente",
                &json!({"codigo_cliente_omie": 8898}),
            )
            .await
    );

    assert_eq!(value, json!({"ok": true}));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/geral/produtos/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base = format!("{}/api", mock_server.uri());
    let client = OmieClient::new("key", "secret", &base).unwrap();
    client
        .request("v1/geral/produtos/", "ListarProdutos", &json!({}))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_blank_credentials_fail_before_sending() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    for (key, secret) in [("", "secret"), ("key", ""), ("  ", "secret")] {
        let client = OmieClient::new(key, secret, &mock_server.uri()).unwrap();
        let err = client
            .request("v1/geral/clientes/", "ListarClientes", &json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, OmieError::MissingCredentials(_)));
    }
}

#[tokio::test]
async fn test_fault_becomes_request_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "faultstring": "ERROR: Cliente não cadastrado para o Código [0] !",
            "faultcode": "SOAP-ENV:Client-103"
        })))
        .mount(&mock_server)
        .await;

    let client = OmieClient::new("key", "secret", &mock_server.uri()).unwrap();
    let result = client
        .request("v1/geral/clientes/", "ConsultarCliente", &json!({}))
        .await;
    let err = assert_err!(result);

    assert!(err.is_request_error());
    assert_eq!(err.fault_code(), Some("SOAP-ENV:Client-103"));
    assert_eq!(
        err.to_string(),
        "Omie returned the error SOAP-ENV:Client-103: 'ERROR: Cliente não cadastrado para o Código [0] !'"
    );
}

#[tokio::test]
async fn test_other_status_becomes_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = OmieClient::new("key", "secret", &mock_server.uri()).unwrap();
    let err = client
        .request("v1/geral/clientes/", "ConsultarCliente", &json!({}))
        .await
        .unwrap_err();

    match err {
        OmieError::InvalidResponse { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("Expected InvalidResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_500_without_fault_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = OmieClient::new("key", "secret", &mock_server.uri()).unwrap();
    let err = client
        .request("v1/geral/clientes/", "ConsultarCliente", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, OmieError::InvalidResponse { status: 500, .. }));
}

#[tokio::test]
async fn test_find_propagates_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"call": "ConsultarCliente"})))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = OmieClient::new("key", "secret", &mock_server.uri()).unwrap();
    let result = Company::find(&client, &json!({"codigo_cliente_omie": 1})).await;

    assert!(matches!(result, Err(OmieError::InvalidResponse { status: 502, .. })));
}

#[tokio::test]
async fn test_find_propagates_missing_credentials() {
    let client = OmieClient::new("", "", "http://127.0.0.1:9").unwrap();
    let result = Company::find(&client, &json!({"codigo_cliente_omie": 1})).await;

    assert!(matches!(result, Err(OmieError::MissingCredentials(_))));
}
