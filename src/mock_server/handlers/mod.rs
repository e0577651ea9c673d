//! HTTP request handlers for the mock server.
//!
//! Omie routes by the `call` field of the body, so each resource path has a
//! single POST handler that dispatches on the call identifier.

pub mod resources;

pub use resources::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::mock_server::state::Store;
use crate::{Attributed, Attributes, Operation, Resource};

/// Request body of every Omie call.
#[derive(Debug, Deserialize)]
pub struct CallEnvelope {
    #[serde(default)]
    pub app_key: String,
    #[serde(default)]
    pub app_secret: String,
    pub call: String,
    #[serde(default)]
    pub param: Vec<Value>,
}

impl CallEnvelope {
    /// The single parameter object, or an empty one.
    fn param(&self) -> Attributes {
        match self.param.first() {
            Some(Value::Object(map)) => map.clone(),
            _ => Attributes::new(),
        }
    }
}

/// An Omie fault, answered with HTTP 500.
#[derive(Debug)]
pub struct Fault {
    pub code: String,
    pub message: String,
}

impl Fault {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    fn not_found<R: Resource>() -> Self {
        Self::new(
            "SOAP-ENV:Client-103",
            format!("ERROR: {} não cadastrado!", R::ENTITY),
        )
    }

    fn bad_param(err: impl std::fmt::Display) -> Self {
        Self::new("SOAP-ENV:Client-8", format!("ERROR: parâmetro inválido: {err}"))
    }
}

impl IntoResponse for Fault {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "faultstring": self.message,
                "faultcode": self.code,
            })),
        )
            .into_response()
    }
}

pub type CallResult = Result<Value, Fault>;

/// Status body Omie answers to write calls.
fn status_body<R: Resource>(record: &R, message: &str) -> Value {
    json!({
        (R::REMOTE_ID_FIELD): record.remote_id(),
        (R::INTEGRATION_CODE_FIELD): record.integration_code(),
        "codigo_status": "0",
        "descricao_status": message,
    })
}

fn to_value<R: Resource>(record: &R) -> CallResult {
    serde_json::to_value(record).map_err(Fault::bad_param)
}

/// Run a generic operation against a store.
pub fn dispatch<R: Resource + Clone>(
    store: &mut Store<R>,
    operation: Operation,
    param: Attributes,
) -> CallResult {
    match operation {
        Operation::List => {
            let page = param.get("pagina").and_then(Value::as_u64).unwrap_or(1) as usize;
            let per_page = param
                .get("registros_por_pagina")
                .and_then(Value::as_u64)
                .unwrap_or(50) as usize;
            let items = store.page(page, per_page);

            if items.is_empty() {
                return Err(Fault::new(
                    "SOAP-ENV:Client-5113",
                    format!("ERROR: Não existem registros para a página [{page}]!"),
                ));
            }

            let total = store.len();
            Ok(json!({
                "pagina": page,
                "total_de_paginas": total.div_ceil(per_page.max(1)),
                "registros": items.len(),
                "total_de_registros": total,
                (R::LIST_KEY): items,
            }))
        }
        Operation::Create => {
            let record = R::from_attributes(param).map_err(Fault::bad_param)?;
            if store.locate(&record).is_some() {
                return Err(Fault::new(
                    "SOAP-ENV:Client-102",
                    format!("ERROR: {} já cadastrado!", R::ENTITY),
                ));
            }
            let id = store.insert(record);
            let stored = store.get(id).ok_or_else(Fault::not_found::<R>)?;
            Ok(status_body(stored, "Cadastrado com sucesso!"))
        }
        Operation::Update | Operation::Associate => {
            let probe = R::from_attributes(param.clone()).map_err(Fault::bad_param)?;
            let id = match operation {
                Operation::Associate => probe.remote_id().filter(|id| store.get(*id).is_some()),
                _ => store.locate(&probe),
            }
            .ok_or_else(Fault::not_found::<R>)?;

            let record = store.get_mut(id).ok_or_else(Fault::not_found::<R>)?;
            record.update_attributes(param).map_err(Fault::bad_param)?;
            record.set_remote_id(id);
            Ok(status_body(&*record, "Alterado com sucesso!"))
        }
        Operation::Upsert => {
            let probe = R::from_attributes(param.clone()).map_err(Fault::bad_param)?;
            match store.locate(&probe) {
                Some(id) => {
                    let record = store.get_mut(id).ok_or_else(Fault::not_found::<R>)?;
                    record.update_attributes(param).map_err(Fault::bad_param)?;
                    record.set_remote_id(id);
                    Ok(status_body(&*record, "Alterado com sucesso!"))
                }
                None => dispatch(store, Operation::Create, param),
            }
        }
        Operation::Find | Operation::Status => {
            let probe = R::from_attributes(param).map_err(Fault::bad_param)?;
            let id = store.locate(&probe).ok_or_else(Fault::not_found::<R>)?;
            let record = store.get(id).ok_or_else(Fault::not_found::<R>)?;
            match (operation, R::FIND_KEY) {
                (Operation::Find, Some(key)) => Ok(json!({ (key): to_value(record)? })),
                _ => to_value(record),
            }
        }
        Operation::Delete => {
            let probe = R::from_attributes(param).map_err(Fault::bad_param)?;
            let id = store.locate(&probe).ok_or_else(Fault::not_found::<R>)?;
            let record = store.remove(id).ok_or_else(Fault::not_found::<R>)?;
            Ok(status_body(&record, "Excluído com sucesso!"))
        }
        Operation::ChangeStatus => Err(Fault::new(
            "SOAP-ENV:Client-6",
            format!("ERROR: {} não suporta troca de etapa", R::ENTITY),
        )),
    }
}
