//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde_json::Value;

use crate::{Company, Product, Resource, SalesOrder};

/// Trait for human-readable key-value output.
///
/// Implemented by resource types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn id_or_dash(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

fn push_field(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        lines.push(format!("{:<16}{}", format!("{label}:"), value));
    }
}

impl PrettyPrint for Company {
    fn pretty_print(&self) -> String {
        let header = format!("Company: {}", id_or_dash(self.remote_id()));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];
        push_field(&mut lines, "Integration", self.integration_code());
        push_field(&mut lines, "Name", self.razao_social.as_deref());
        push_field(&mut lines, "Trade Name", self.nome_fantasia.as_deref());
        push_field(&mut lines, "CNPJ/CPF", self.cnpj_cpf.as_deref());
        push_field(&mut lines, "Email", self.email.as_deref());
        push_field(&mut lines, "City", self.cidade.as_deref());
        push_field(&mut lines, "State", self.estado.as_deref());

        let tags = self.tag_values().join(", ");
        push_field(&mut lines, "Tags", Some(&tags));

        lines.join("\n")
    }
}

impl PrettyPrint for Product {
    fn pretty_print(&self) -> String {
        let header = format!("Product: {}", id_or_dash(self.remote_id()));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];
        push_field(&mut lines, "Integration", self.integration_code());
        push_field(&mut lines, "Code", self.codigo.as_deref());
        push_field(&mut lines, "Description", self.descricao.as_deref());
        push_field(&mut lines, "Unit", self.unidade.as_deref());
        push_field(&mut lines, "NCM", self.ncm.as_deref());

        if let Some(price) = self.valor_unitario {
            lines.push(format!("{:<16}{:.2}", "Unit Price:", price));
        }

        if let Some(ref tax) = self.recomendacoes_fiscais {
            push_field(&mut lines, "Origin", tax.origem_mercadoria.as_deref());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for SalesOrder {
    fn pretty_print(&self) -> String {
        let header = format!("Sales Order: {}", id_or_dash(self.remote_id()));
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![header, divider];
        push_field(&mut lines, "Integration", self.integration_code());

        let header_str = |key: &str| {
            self.cabecalho
                .as_ref()
                .and_then(|h| h.get(key))
                .map(|v| match v {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
        };

        push_field(
            &mut lines,
            "Number",
            self.numero_pedido
                .clone()
                .or_else(|| header_str("numero_pedido"))
                .as_deref(),
        );
        push_field(&mut lines, "Stage", header_str("etapa").as_deref());
        push_field(&mut lines, "Status", self.descricao_status.as_deref());

        if !self.det.is_empty() {
            lines.push(format!("{:<16}{}", "Items:", self.det.len()));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_pretty_print_format() {
        let mut company: Company = serde_json::from_value(serde_json::json!({
            "codigo_cliente_omie": 8898,
            "razao_social": "Random Company",
            "email": ""
        }))
        .unwrap();
        company.add_tag("Cliente");

        let output = company.pretty_print();
        assert!(output.starts_with("Company: 8898"));
        assert!(output.contains("Name:"));
        assert!(output.contains("Tags:           Cliente"));
        // Empty values are not printed
        assert!(!output.contains("Email:"));
    }

    #[test]
    fn test_sales_order_pretty_print_reads_header() {
        let order: SalesOrder = serde_json::from_value(serde_json::json!({
            "cabecalho": {"codigo_pedido": 42, "etapa": "20", "numero_pedido": "000123"},
            "det": [{}]
        }))
        .unwrap();

        let output = order.pretty_print();
        assert!(output.starts_with("Sales Order: 42"));
        assert!(output.contains("Stage:          20"));
        assert!(output.contains("Number:         000123"));
        assert!(output.contains("Items:          1"));
    }
}
