//! Product model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_with::serde_as;

use crate::models::lenient::{Amount, Id, Text};
use crate::models::tax_recommendation::TaxRecommendation;
use crate::resource::{Attributed, Attributes, CallTable, Operation, Resource};
use crate::traits::{Associate, Create, Delete, Find, List, Save, Update, Upsert};

/// An Omie product (Omie: *Produto*).
///
/// Field names follow the Portuguese names of the `geral/produtos` API.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Omie-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Id")]
    pub codigo_produto: Option<i64>,

    /// Caller-assigned integration code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_produto_integracao: Option<String>,

    /// Product code shown in Omie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub descricao: Option<String>,

    /// Unit of measure (e.g. "UN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub unidade: Option<String>,

    /// NCM classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub ncm: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub ean: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub marca: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Amount")]
    pub valor_unitario: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recomendacoes_fiscais: Option<TaxRecommendation>,

    /// Status code returned by write calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_status: Option<String>,

    /// Status message returned by write calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub descricao_status: Option<String>,
}

impl Attributed for Product {}

impl Resource for Product {
    const ENTITY: &'static str = "Product";
    const PATH: &'static str = "v1/geral/produtos/";
    const CALLS: CallTable = CallTable::new(&[
        (Operation::List, "ListarProdutos"),
        (Operation::Create, "IncluirProduto"),
        (Operation::Update, "AlterarProduto"),
        (Operation::Find, "ConsultarProduto"),
        (Operation::Delete, "ExcluirProduto"),
        (Operation::Upsert, "UpsertProduto"),
        (Operation::Associate, "AssociarCodIntProduto"),
    ]);
    const LIST_KEY: &'static str = "produto_servico_cadastro";
    const REMOTE_ID_FIELD: &'static str = "codigo_produto";
    const INTEGRATION_CODE_FIELD: &'static str = "codigo_produto_integracao";

    fn remote_id(&self) -> Option<i64> {
        self.codigo_produto
    }

    fn set_remote_id(&mut self, id: i64) {
        self.codigo_produto = Some(id);
    }

    fn integration_code(&self) -> Option<&str> {
        self.codigo_produto_integracao.as_deref()
    }

    fn default_list_filter() -> Attributes {
        let mut filter = Attributes::new();
        filter.insert("apenas_importado_api".to_string(), json!("N"));
        filter.insert("filtrar_apenas_omiepdv".to_string(), json!("N"));
        filter
    }
}

impl Create for Product {}
impl Update for Product {}
impl Upsert for Product {}
impl Delete for Product {}
impl Find for Product {}
impl List for Product {}
impl Associate for Product {}
impl Save for Product {}
