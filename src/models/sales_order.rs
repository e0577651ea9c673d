//! Sales order model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use serde_with::{serde_as, DefaultOnNull};

use crate::client::OmieClient;
use crate::error::Result;
use crate::models::lenient::{self, Id, Text};
use crate::resource::{Attributed, Attributes, CallTable, Operation, Resource};
use crate::traits::{Create, Find, List, Save, Update};

/// An Omie sales order (Omie: *Pedido de venda*).
///
/// The order sections are kept as raw JSON objects and sent back to Omie
/// untouched. The top-level status fields are what Omie answers to write
/// calls.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    /// Omie-assigned id, as returned by write calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Id")]
    pub codigo_pedido: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_pedido_integracao: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub numero_pedido: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub descricao_status: Option<String>,

    /// Header: customer, integration code, stage, forecast date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cabecalho: Option<Attributes>,

    /// Line items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub det: Vec<Attributes>,

    /// Shipping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frete: Option<Attributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informacoes_adicionais: Option<Attributes>,

    /// Installments, usually `{"parcela": [...]}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lista_parcelas: Option<Attributes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pedido: Option<Attributes>,
}

fn merge_section(section: &mut Option<Attributes>, attributes: Attributes) {
    section.get_or_insert_with(Attributes::new).extend(attributes);
}

impl SalesOrder {
    /// Merge attributes into the header.
    pub fn add_headers(&mut self, attributes: Attributes) -> &mut Self {
        merge_section(&mut self.cabecalho, attributes);
        self
    }

    /// Append a line item.
    pub fn add_sales_items(&mut self, item: Attributes) -> &mut Self {
        self.det.push(item);
        self
    }

    /// Merge attributes into the shipping section.
    pub fn add_shipping(&mut self, attributes: Attributes) -> &mut Self {
        merge_section(&mut self.frete, attributes);
        self
    }

    /// Merge attributes into the additional information section.
    pub fn add_additional_information(&mut self, attributes: Attributes) -> &mut Self {
        merge_section(&mut self.informacoes_adicionais, attributes);
        self
    }

    /// Merge attributes into the installment list.
    pub fn add_installment(&mut self, attributes: Attributes) -> &mut Self {
        merge_section(&mut self.lista_parcelas, attributes);
        self
    }

    /// Merge attributes into the order totals.
    pub fn add_total_order(&mut self, attributes: Attributes) -> &mut Self {
        merge_section(&mut self.total_pedido, attributes);
        self
    }

    fn header_field(&self, key: &str) -> Option<&Value> {
        self.cabecalho.as_ref().and_then(|header| header.get(key))
    }

    /// Move an order to another stage (`etapa`, e.g. "20" or "50").
    #[tracing::instrument(skip(client))]
    pub async fn change_status(
        client: &OmieClient,
        integration_code: &str,
        stage: &str,
    ) -> Result<Self> {
        let params = json!({
            "codigo_pedido_integracao": integration_code,
            "etapa": stage,
        });
        client
            .request_as(Self::PATH, Self::call(Operation::ChangeStatus)?, &params)
            .await
    }

    /// Fetch the processing status of an order.
    #[tracing::instrument(skip(client))]
    pub async fn status(client: &OmieClient, integration_code: &str) -> Result<Self> {
        let params = json!({ "codigo_pedido_integracao": integration_code });
        client
            .request_as(Self::PATH, Self::call(Operation::Status)?, &params)
            .await
    }
}

impl Attributed for SalesOrder {}

impl Resource for SalesOrder {
    const ENTITY: &'static str = "SalesOrder";
    const PATH: &'static str = "v1/produtos/pedido/";
    const CALLS: CallTable = CallTable::new(&[
        (Operation::List, "ListarPedidos"),
        (Operation::Create, "IncluirPedido"),
        (Operation::Update, "AlterarPedidoVenda"),
        (Operation::Find, "ConsultarPedido"),
        (Operation::ChangeStatus, "TrocarEtapaPedido"),
        (Operation::Status, "StatusPedido"),
    ]);
    const LIST_KEY: &'static str = "pedido_venda_produto";
    const FIND_KEY: Option<&'static str> = Some("pedido_venda_produto");
    const REMOTE_ID_FIELD: &'static str = "codigo_pedido";
    const INTEGRATION_CODE_FIELD: &'static str = "codigo_pedido_integracao";

    /// Top-level id from write calls, else the header's id from reads.
    fn remote_id(&self) -> Option<i64> {
        self.codigo_pedido.or_else(|| {
            self.header_field("codigo_pedido")
                .and_then(|id| lenient::parse_id(id).ok().flatten())
        })
    }

    /// Omie expects the id inside the header on updates.
    fn set_remote_id(&mut self, id: i64) {
        if self.codigo_pedido.is_some() {
            self.codigo_pedido = Some(id);
        }
        self.cabecalho
            .get_or_insert_with(Attributes::new)
            .insert("codigo_pedido".to_string(), id.into());
    }

    fn integration_code(&self) -> Option<&str> {
        self.codigo_pedido_integracao.as_deref().or_else(|| {
            self.header_field("codigo_pedido_integracao")
                .and_then(Value::as_str)
        })
    }

    fn default_list_filter() -> Attributes {
        let mut filter = Attributes::new();
        filter.insert("apenas_importado_api".to_string(), json!("N"));
        filter
    }
}

impl Create for SalesOrder {}
impl Update for SalesOrder {}
impl Find for SalesOrder {}
impl List for SalesOrder {}
impl Save for SalesOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(value: Value) -> Attributes {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_add_headers() {
        let mut sales = SalesOrder::default();
        sales.add_headers(attributes(json!({"codigo_pedido_integracao": "123abc"})));
        assert_eq!(
            serde_json::to_value(&sales).unwrap(),
            json!({"cabecalho": {"codigo_pedido_integracao": "123abc"}})
        );
    }

    #[test]
    fn test_add_sales_items() {
        let mut sales = SalesOrder::default();
        sales
            .add_sales_items(attributes(json!({"ide": "123abc"})))
            .add_sales_items(attributes(json!({"ide": "456def"})));
        assert_eq!(
            serde_json::to_value(&sales).unwrap(),
            json!({"det": [{"ide": "123abc"}, {"ide": "456def"}]})
        );
    }

    #[test]
    fn test_sections() {
        let mut sales = SalesOrder::default();
        sales.add_shipping(attributes(json!({"codigo_transportadora": "123abc"})));
        sales.add_additional_information(attributes(json!({"codigo_categoria": "1.01.01"})));
        sales.add_installment(attributes(json!({
            "parcela": [{"data_vencimento": "04/03/2020", "numero_parcela": 1, "percentual": 50}]
        })));
        sales.add_total_order(attributes(json!({"valor_total_pedido": 200})));

        assert_eq!(
            serde_json::to_value(&sales).unwrap(),
            json!({
                "frete": {"codigo_transportadora": "123abc"},
                "informacoes_adicionais": {"codigo_categoria": "1.01.01"},
                "lista_parcelas": {
                    "parcela": [{"data_vencimento": "04/03/2020", "numero_parcela": 1, "percentual": 50}]
                },
                "total_pedido": {"valor_total_pedido": 200}
            })
        );
    }

    #[test]
    fn test_saved_iff_remote_id_present() {
        let mut sales = SalesOrder::default();
        assert!(!sales.is_saved());

        sales.set_remote_id(123);
        assert!(sales.is_saved());
        assert_eq!(sales.remote_id(), Some(123));

        let written: SalesOrder = serde_json::from_value(json!({
            "codigo_pedido": 259535530,
            "codigo_pedido_integracao": "PED-1",
            "codigo_status": "0"
        }))
        .unwrap();
        assert!(written.is_saved());
        assert_eq!(written.integration_code(), Some("PED-1"));
    }

    #[test]
    fn test_operations_outside_call_table() {
        assert_eq!(SalesOrder::call(Operation::Status).unwrap(), "StatusPedido");
        assert!(matches!(
            SalesOrder::call(Operation::Delete),
            Err(crate::OmieError::UnsupportedOperation {
                entity_type: "SalesOrder",
                operation: "delete"
            })
        ));
    }

    #[test]
    fn test_null_items_and_string_header_id() {
        let read: SalesOrder = serde_json::from_value(json!({
            "cabecalho": {"codigo_pedido": "259535530"},
            "det": null,
            "numero_pedido": 123
        }))
        .unwrap();

        assert!(read.det.is_empty());
        assert_eq!(read.remote_id(), Some(259535530));
        assert_eq!(read.numero_pedido.as_deref(), Some("123"));
    }

    #[test]
    fn test_ids_from_header() {
        let read: SalesOrder = serde_json::from_value(json!({
            "cabecalho": {"codigo_pedido": 259535530, "codigo_pedido_integracao": "PED-1"},
            "det": [{"produto": {"codigo_produto": 1}}]
        }))
        .unwrap();
        assert_eq!(read.remote_id(), Some(259535530));
        assert_eq!(read.integration_code(), Some("PED-1"));
        assert_eq!(read.det.len(), 1);
    }
}
