//! Resource endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{dispatch, CallEnvelope, CallResult, Fault};
use crate::mock_server::state::{MockState, Store};
use crate::{Attributes, Company, Operation, Product, Resource, SalesOrder};

type SharedState = Arc<RwLock<MockState>>;

/// Record the call, check credentials and resolve the operation.
fn admit<R: Resource>(state: &mut MockState, envelope: &CallEnvelope) -> Result<Operation, Fault> {
    state.calls.push(envelope.call.clone());

    if !state.accepts(&envelope.app_key, &envelope.app_secret) {
        return Err(Fault::new(
            "SOAP-ENV:Client-5",
            "ERROR: A chave de acesso não é válida ou o aplicativo está suspenso!",
        ));
    }

    R::CALLS
        .iter()
        .find(|(_, call)| *call == envelope.call)
        .map(|(operation, _)| operation)
        .ok_or_else(|| {
            Fault::new(
                "SOAP-ENV:Server",
                format!("Method '{}' not implemented", envelope.call),
            )
        })
}

fn respond(result: CallResult) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(fault) => fault.into_response(),
    }
}

/// POST /v1/geral/clientes/
pub async fn companies(
    State(state): State<SharedState>,
    Json(envelope): Json<CallEnvelope>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    respond(
        admit::<Company>(&mut state, &envelope)
            .and_then(|op| dispatch(&mut state.companies, op, envelope.param())),
    )
}

/// POST /v1/geral/produtos/
pub async fn products(
    State(state): State<SharedState>,
    Json(envelope): Json<CallEnvelope>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    respond(
        admit::<Product>(&mut state, &envelope)
            .and_then(|op| dispatch(&mut state.products, op, envelope.param())),
    )
}

/// POST /v1/produtos/pedido/
pub async fn orders(
    State(state): State<SharedState>,
    Json(envelope): Json<CallEnvelope>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    respond(
        admit::<SalesOrder>(&mut state, &envelope).and_then(|op| match op {
            Operation::ChangeStatus => change_stage(&mut state.orders, envelope.param()),
            op => dispatch(&mut state.orders, op, envelope.param()),
        }),
    )
}

/// TrocarEtapaPedido: move the order to `etapa`.
fn change_stage(store: &mut Store<SalesOrder>, param: Attributes) -> CallResult {
    let stage = param
        .get("etapa")
        .cloned()
        .ok_or_else(|| Fault::new("SOAP-ENV:Client-8", "ERROR: Tag [etapa] não informada!"))?;

    let probe: SalesOrder = crate::Attributed::from_attributes(param)
        .map_err(|err| Fault::new("SOAP-ENV:Client-8", err.to_string()))?;
    let not_found = || Fault::new("SOAP-ENV:Client-103", "ERROR: Pedido não cadastrado!");
    let id = store.locate(&probe).ok_or_else(not_found)?;
    let order = store.get_mut(id).ok_or_else(not_found)?;

    let mut header = Attributes::new();
    header.insert("etapa".to_string(), stage);
    order.add_headers(header);

    Ok(serde_json::json!({
        "codigo_pedido": id,
        "codigo_pedido_integracao": order.integration_code(),
        "codigo_status": "0",
        "descricao_status": "Etapa alterada com sucesso!",
    }))
}
