//! Tax recommendation embedded in products.

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::models::lenient::Text;
use crate::resource::Attributed;

/// Tax recommendations of a product (Omie: *recomendacoes_fiscais*).
///
/// Only ever travels inside a [`Product`](crate::Product) payload; it has
/// no endpoint of its own.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRecommendation {
    /// Goods origin code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub origem_mercadoria: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub id_preco_tabelado: Option<String>,

    /// CEST code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub id_cest: Option<String>,

    /// "S" or "N".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub cupom_fiscal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub market_place: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub indicador_escala: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Text")]
    pub cnpj_fabricante: Option<String>,
}

impl Attributed for TaxRecommendation {}
