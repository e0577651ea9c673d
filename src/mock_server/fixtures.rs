//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic Omie records.

use serde_json::{json, Value};

use crate::{Attributes, Company, Product, SalesOrder, TaxRecommendation};

fn object(value: Value) -> Attributes {
    match value {
        Value::Object(map) => map,
        _ => Attributes::new(),
    }
}

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Company Fixtures
    // =========================================================================

    /// Create a company with an integration code and a legal name.
    pub fn company(code: &str, name: &str) -> Company {
        Company {
            codigo_cliente_integracao: Some(code.to_string()),
            razao_social: Some(name.to_string()),
            nome_fantasia: Some(name.to_string()),
            ..Default::default()
        }
    }

    /// Create a tagged client company with a document number and address.
    pub fn client_company(code: &str, name: &str, cnpj_cpf: &str) -> Company {
        let mut company = Self::company(code, name);
        company.cnpj_cpf = Some(cnpj_cpf.to_string());
        company.email = Some("financeiro@example.com".to_string());
        company.cidade = Some("SAO PAULO (SP)".to_string());
        company.estado = Some("SP".to_string());
        company.add_tag("Cliente");
        company
    }

    // =========================================================================
    // Product Fixtures
    // =========================================================================

    /// Create a product with a description and a unit price.
    pub fn product(code: &str, description: &str, price: f64) -> Product {
        Product {
            codigo_produto_integracao: Some(code.to_string()),
            codigo: Some(code.to_string()),
            descricao: Some(description.to_string()),
            unidade: Some("UN".to_string()),
            valor_unitario: Some(price),
            ..Default::default()
        }
    }

    /// Create a product carrying tax recommendations.
    pub fn taxed_product(code: &str, description: &str, price: f64) -> Product {
        let mut product = Self::product(code, description, price);
        product.ncm = Some("8471.30.12".to_string());
        product.recomendacoes_fiscais = Some(TaxRecommendation {
            origem_mercadoria: Some("0".to_string()),
            cupom_fiscal: Some("S".to_string()),
            market_place: Some("N".to_string()),
            ..Default::default()
        });
        product
    }

    // =========================================================================
    // Sales Order Fixtures
    // =========================================================================

    /// Create an order with a header and one line item.
    pub fn order(code: &str, client_id: i64, product_id: i64) -> SalesOrder {
        let mut order = SalesOrder::default();
        order
            .add_headers(object(json!({
                "codigo_pedido_integracao": code,
                "codigo_cliente": client_id,
                "data_previsao": "15/12/2026",
                "etapa": "10",
                "quantidade_itens": 1,
            })))
            .add_sales_items(object(json!({
                "ide": {"codigo_item_integracao": "1"},
                "produto": {"codigo_produto": product_id, "quantidade": 1, "valor_unitario": 100.0},
            })))
            .add_additional_information(object(json!({
                "codigo_categoria": "1.01.01",
                "codigo_conta_corrente": 11_000_001,
            })));
        order
    }

    // =========================================================================
    // Scenario Builders
    // =========================================================================

    /// Create a default set of test data for common scenarios.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario::new()
    }
}

/// A complete test scenario with related records.
///
/// Ids are assigned on insert, starting at 1000 per resource, so the
/// order below refers to the first company and the first product.
pub struct DefaultScenario {
    pub companies: Vec<Company>,
    pub products: Vec<Product>,
    pub orders: Vec<SalesOrder>,
}

impl DefaultScenario {
    fn new() -> Self {
        let companies = vec![
            Fixtures::client_company("CLI-001", "Random Company", "12.345.678/0001-90"),
            Fixtures::company("CLI-002", "Another Company"),
        ];

        let products = vec![
            Fixtures::taxed_product("PRD-001", "Notebook", 3500.0),
            Fixtures::product("PRD-002", "Mouse", 49.9),
        ];

        let orders = vec![Fixtures::order("PED-001", 1000, 1000)];

        Self {
            companies,
            products,
            orders,
        }
    }
}
