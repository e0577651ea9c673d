//! Basic example demonstrating the Omie API client.
//!
//! Run with:
//! ```
//! OMIE_APP_KEY=your-key OMIE_APP_SECRET=your-secret cargo run --example basic
//! ```

use omie::{Company, Find, List, ListOptions, OmieClient, Product, Resource, SalesOrder};

#[tokio::main]
async fn main() -> omie::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Omie client...");
    let client = OmieClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // First page of companies
    println!("\n--- Listing Companies (first page) ---");
    let page = Company::list_page(&client, &ListOptions::for_page(1, 10)).await?;
    println!(
        "Found {} companies (total: {:?}, pages: {:?})",
        page.len(),
        page.total,
        page.total_pages
    );

    for company in &page {
        println!(
            "  - {} ({})",
            company.razao_social.as_deref().unwrap_or("-"),
            company.remote_id().unwrap_or_default()
        );
    }

    // Look one up again by id
    if let Some(id) = page.items.first().and_then(|c| c.remote_id()) {
        println!("\n--- Company Details ---");
        let params = serde_json::json!({ "codigo_cliente_omie": id });
        match Company::find(&client, &params).await? {
            Some(company) => {
                println!("Company: {}", company.razao_social.as_deref().unwrap_or("-"));
                println!("  Integration code: {:?}", company.integration_code());
                println!("  Tags: {}", company.tag_values().join(", "));
            }
            None => println!("Company {id} not found"),
        }
    }

    // Products with their tax recommendations
    println!("\n--- Listing Products ---");
    let products = Product::list(&client, &ListOptions::for_page(1, 5)).await?;
    for product in &products {
        let origin = product
            .recomendacoes_fiscais
            .as_ref()
            .and_then(|tax| tax.origem_mercadoria.as_deref())
            .unwrap_or("-");
        println!(
            "  - {} {:?} (origin {origin})",
            product.descricao.as_deref().unwrap_or("-"),
            product.valor_unitario
        );
    }

    // Sales orders
    println!("\n--- Listing Sales Orders ---");
    let orders = SalesOrder::list(&client, &ListOptions::for_page(1, 5)).await?;
    for order in &orders {
        println!(
            "  - {:?} ({} items)",
            order.integration_code(),
            order.det.len()
        );
    }

    println!("\nDone!");
    Ok(())
}
