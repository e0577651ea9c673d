//! Company model and trait implementations.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::models::lenient::{Id, Text};
use crate::resource::{Attributed, CallTable, Operation, Resource};
use crate::traits::{Associate, Create, Delete, Find, List, Save, Update, Upsert};

/// An Omie company (Omie: *Cliente*).
///
/// Used for every kind of business partner in Omie, mainly clients and
/// suppliers. Field names follow the Portuguese names of the
/// `geral/clientes` API.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Omie-assigned id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Id")]
    pub codigo_cliente_omie: Option<i64>,

    /// Caller-assigned integration code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_cliente_integracao: Option<String>,

    /// CNPJ or CPF.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub cnpj_cpf: Option<String>,

    /// Legal name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub razao_social: Option<String>,

    /// Trade name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub nome_fantasia: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub email: Option<String>,

    /// Contact person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub contato: Option<String>,

    /// State registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub inscricao_estadual: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub endereco: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub endereco_numero: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub complemento: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub bairro: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub cidade: Option<String>,

    /// State abbreviation (UF).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub estado: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub cep: Option<String>,

    /// Country code (e.g. "1058" for Brazil).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_pais: Option<String>,

    /// Tags in Omie's `{"tag": value}` shape.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(as = "DefaultOnNull")]
    pub(crate) tags: Vec<Tag>,

    /// Status code returned by write calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub codigo_status: Option<String>,

    /// Status message returned by write calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub descricao_status: Option<String>,
}

/// A single company tag.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde_as(as = "Text")]
    pub tag: String,
}

impl Tag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Company {
    /// The tag entries.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Replace all tags.
    pub fn set_tags(&mut self, tags: Vec<Tag>) {
        self.tags = tags;
    }

    /// The bare tag values, in order.
    pub fn tag_values(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.tag.as_str()).collect()
    }

    /// Add a tag unless it is empty or already present.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> &mut Self {
        let tag = tag.into();
        if !tag.is_empty() && !self.tags.iter().any(|t| t.tag == tag) {
            self.tags.push(Tag { tag });
        }
        self
    }
}

impl Attributed for Company {}

impl Resource for Company {
    const ENTITY: &'static str = "Company";
    const PATH: &'static str = "v1/geral/clientes/";
    const CALLS: CallTable = CallTable::new(&[
        (Operation::List, "ListarClientes"),
        (Operation::Create, "IncluirCliente"),
        (Operation::Update, "AlterarCliente"),
        (Operation::Find, "ConsultarCliente"),
        (Operation::Delete, "ExcluirCliente"),
        (Operation::Upsert, "UpsertCliente"),
        (Operation::Associate, "AssociarCodIntCliente"),
    ]);
    const LIST_KEY: &'static str = "clientes_cadastro";
    const REMOTE_ID_FIELD: &'static str = "codigo_cliente_omie";
    const INTEGRATION_CODE_FIELD: &'static str = "codigo_cliente_integracao";

    fn remote_id(&self) -> Option<i64> {
        self.codigo_cliente_omie
    }

    fn set_remote_id(&mut self, id: i64) {
        self.codigo_cliente_omie = Some(id);
    }

    fn integration_code(&self) -> Option<&str> {
        self.codigo_cliente_integracao.as_deref()
    }
}

impl Create for Company {}
impl Update for Company {}
impl Upsert for Company {}
impl Delete for Company {}
impl Find for Company {}
impl List for Company {}
impl Associate for Company {}
impl Save for Company {}
