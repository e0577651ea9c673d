//! Sales order operation tests against a mocked Omie API.

use omie::{Attributes, Find, OmieClient, OmieError, Resource, SalesOrder, Save};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PATH: &str = "/v1/produtos/pedido/";

fn client(server: &MockServer) -> OmieClient {
    OmieClient::new("key", "secret", &server.uri()).unwrap()
}

fn attributes(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

#[tokio::test]
async fn test_find_unwraps_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PATH))
        .and(body_partial_json(json!({
            "call": "ConsultarPedido",
            "param": [{"codigo_pedido": 259535530}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pedido_venda_produto": {
                "cabecalho": {
                    "codigo_pedido": 259535530,
                    "codigo_pedido_integracao": "PED-001",
                    "etapa": "10"
                },
                "det": [{"produto": {"codigo_produto": 1}}]
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let order = SalesOrder::find(&client(&mock_server), &json!({"codigo_pedido": 259535530}))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(order.remote_id(), Some(259535530));
    assert_eq!(order.integration_code(), Some("PED-001"));
    assert_eq!(order.det.len(), 1);
}

#[tokio::test]
async fn test_find_without_order_key_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&mock_server)
        .await;

    let order = SalesOrder::find(&client(&mock_server), &json!({"codigo_pedido": 1}))
        .await
        .unwrap();
    assert!(order.is_none());
}

#[tokio::test]
async fn test_save_sends_sections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "call": "IncluirPedido",
            "param": [{
                "cabecalho": {"codigo_pedido_integracao": "PED-002", "codigo_cliente": 8898},
                "det": [{"produto": {"codigo_produto": 10, "quantidade": 2}}],
                "informacoes_adicionais": {"codigo_categoria": "1.01.01"}
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "codigo_pedido": 777,
            "codigo_pedido_integracao": "PED-002",
            "codigo_status": "0",
            "descricao_status": "Pedido cadastrado com sucesso!"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut order = SalesOrder::default();
    order
        .add_headers(attributes(json!({
            "codigo_pedido_integracao": "PED-002",
            "codigo_cliente": 8898
        })))
        .add_sales_items(attributes(json!({
            "produto": {"codigo_produto": 10, "quantidade": 2}
        })))
        .add_additional_information(attributes(json!({"codigo_categoria": "1.01.01"})));

    let saved = order.save(&client(&mock_server)).await.unwrap();

    assert_eq!(saved.codigo_pedido, Some(777));
    assert!(order.is_saved());
    assert_eq!(
        order.cabecalho.as_ref().and_then(|h| h.get("codigo_pedido")),
        Some(&json!(777))
    );
}

#[tokio::test]
async fn test_change_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PATH))
        .and(body_partial_json(json!({
            "call": "TrocarEtapaPedido",
            "param": [{"codigo_pedido_integracao": "PED-001", "etapa": "50"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "codigo_pedido": 259535530,
            "codigo_pedido_integracao": "PED-001",
            "codigo_status": "0",
            "descricao_status": "Etapa alterada com sucesso!"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let order = SalesOrder::change_status(&client(&mock_server), "PED-001", "50")
        .await
        .unwrap();
    assert_eq!(order.codigo_status.as_deref(), Some("0"));
}

#[tokio::test]
async fn test_status_uses_status_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "call": "StatusPedido",
            "param": [{"codigo_pedido_integracao": "PED-001"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "codigo_pedido": 259535530,
            "codigo_pedido_integracao": "PED-001",
            "numero_pedido": "000123",
            "codigo_status": "0"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let order = SalesOrder::status(&client(&mock_server), "PED-001").await.unwrap();
    assert_eq!(order.numero_pedido.as_deref(), Some("000123"));
}

#[tokio::test]
async fn test_status_propagates_fault() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "faultstring": "ERROR: Pedido não cadastrado!",
            "faultcode": "SOAP-ENV:Client-103"
        })))
        .mount(&mock_server)
        .await;

    let err = SalesOrder::status(&client(&mock_server), "PED-404").await.unwrap_err();
    assert!(matches!(err, OmieError::Request { .. }));
}
