//! Omie API CLI binary.
//!
//! A command-line interface for interacting with the Omie API.

use clap::Parser;
use omie::cli::{Cli, Command, Entity};
use omie::output::PrettyPrint;
use omie::{
    Associate, Attributes, Company, Find, List, ListOptions, OmieClient, Page, Product, Resource,
    SalesOrder,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match OmieClient::new(
        cli.app_key.as_deref().unwrap_or_default(),
        cli.app_secret.as_deref().unwrap_or_default(),
        &cli.api_url,
    ) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if matches!(e, omie::OmieError::MissingCredentials(_)) {
                eprintln!("Hint: Set OMIE_APP_KEY and OMIE_APP_SECRET environment variables");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &OmieClient, cli: Cli) -> omie::Result<()> {
    match cli.command {
        Command::Find { entity, id, code } => {
            handle_find(client, entity, id, code.as_deref(), cli.json).await
        }
        Command::List {
            entity,
            page,
            per_page,
            all,
        } => handle_list(client, entity, page, per_page, all, cli.json).await,
        Command::Associate { entity, id, code } => {
            handle_associate(client, entity, id, &code).await
        }
        Command::Status { code } => {
            let order = SalesOrder::status(client, &code).await?;
            output_single(&order, cli.json)
        }
    }
}

/// Build find params from whichever id was given.
fn lookup_params<R: Resource>(id: Option<i64>, code: Option<&str>) -> Attributes {
    let mut params = Attributes::new();
    match (id, code) {
        (Some(id), _) => {
            params.insert(R::REMOTE_ID_FIELD.to_string(), id.into());
        }
        (None, Some(code)) => {
            params.insert(R::INTEGRATION_CODE_FIELD.to_string(), code.into());
        }
        (None, None) => {}
    }
    params
}

async fn handle_find(
    client: &OmieClient,
    entity: Entity,
    id: Option<i64>,
    code: Option<&str>,
    json: bool,
) -> omie::Result<()> {
    match entity {
        Entity::Company => {
            let params = lookup_params::<Company>(id, code);
            print_found(Company::find(client, &params).await?, json)
        }
        Entity::Product => {
            let params = lookup_params::<Product>(id, code);
            print_found(Product::find(client, &params).await?, json)
        }
        Entity::SalesOrder => {
            let params = lookup_params::<SalesOrder>(id, code);
            print_found(SalesOrder::find(client, &params).await?, json)
        }
    }
}

async fn handle_list(
    client: &OmieClient,
    entity: Entity,
    page: Option<u32>,
    per_page: Option<u32>,
    all: bool,
    json: bool,
) -> omie::Result<()> {
    let options = ListOptions {
        pagina: page,
        registros_por_pagina: per_page,
        ..Default::default()
    };

    match entity {
        Entity::Company => {
            if all {
                let companies = Company::list_all(client, &options).await?;
                output_items(&companies, json, |item| CompanyRow::from(item))
            } else {
                let page = Company::list_page(client, &options).await?;
                output_page(&page, json, |item| CompanyRow::from(item))
            }
        }
        Entity::Product => {
            if all {
                let products = Product::list_all(client, &options).await?;
                output_items(&products, json, |item| ProductRow::from(item))
            } else {
                let page = Product::list_page(client, &options).await?;
                output_page(&page, json, |item| ProductRow::from(item))
            }
        }
        Entity::SalesOrder => {
            if all {
                let orders = SalesOrder::list_all(client, &options).await?;
                output_items(&orders, json, |item| SalesOrderRow::from(item))
            } else {
                let page = SalesOrder::list_page(client, &options).await?;
                output_page(&page, json, |item| SalesOrderRow::from(item))
            }
        }
    }
}

async fn handle_associate(
    client: &OmieClient,
    entity: Entity,
    id: i64,
    code: &str,
) -> omie::Result<()> {
    let associated = match entity {
        Entity::Company => Company::associate(client, id, code).await?,
        Entity::Product => Product::associate(client, id, code).await?,
        Entity::SalesOrder => {
            return Err(omie::OmieError::UnsupportedOperation {
                entity_type: SalesOrder::ENTITY,
                operation: "associate",
            });
        }
    };

    if associated {
        println!("Associated {id} with '{code}'");
    } else {
        println!("Omie rejected the association of {id} with '{code}'");
    }
    Ok(())
}

fn print_found<T: Serialize + PrettyPrint>(item: Option<T>, json: bool) -> omie::Result<()> {
    match item {
        Some(item) => output_single(&item, json),
        None => {
            eprintln!("Not found");
            Ok(())
        }
    }
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> omie::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_items<T, R, F>(items: &[T], json: bool, to_row: F) -> omie::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> omie::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    output_items(&page.items, json, to_row)?;
    if !json {
        match (page.total_pages, page.total) {
            (Some(pages), Some(total)) => {
                println!("\nPage {}/{} ({} total items)", page.page, pages, total)
            }
            _ if page.has_more => println!("\nPage {} (more available)", page.page),
            _ => println!("\nPage {} (end)", page.page),
        }
    }
    Ok(())
}

// Table row types for non-JSON output

fn id_cell(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

#[derive(Tabled)]
struct CompanyRow {
    id: String,
    integration: String,
    name: String,
    cnpj_cpf: String,
}

impl From<&Company> for CompanyRow {
    fn from(c: &Company) -> Self {
        Self {
            id: id_cell(c.remote_id()),
            integration: c.integration_code().unwrap_or_default().to_string(),
            name: c.razao_social.clone().unwrap_or_default(),
            cnpj_cpf: c.cnpj_cpf.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ProductRow {
    id: String,
    integration: String,
    description: String,
    price: String,
}

impl From<&Product> for ProductRow {
    fn from(p: &Product) -> Self {
        Self {
            id: id_cell(p.remote_id()),
            integration: p.integration_code().unwrap_or_default().to_string(),
            description: p.descricao.clone().unwrap_or_default(),
            price: p
                .valor_unitario
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct SalesOrderRow {
    id: String,
    integration: String,
    items: usize,
}

impl From<&SalesOrder> for SalesOrderRow {
    fn from(o: &SalesOrder) -> Self {
        Self {
            id: id_cell(o.remote_id()),
            integration: o.integration_code().unwrap_or_default().to_string(),
            items: o.det.len(),
        }
    }
}
