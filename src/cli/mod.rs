//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the omie binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Omie API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "omie", about = "Omie ERP API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Omie application key.
    #[arg(long, global = true, env = "OMIE_APP_KEY", hide_env_values = true)]
    pub app_key: Option<String>,

    /// Omie application secret.
    #[arg(long, global = true, env = "OMIE_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Base URL of the Omie API.
    #[arg(
        long,
        global = true,
        env = "OMIE_API_URL",
        default_value = "https://app.omie.com.br/api"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a single entity by Omie id or integration code.
    Find {
        /// The type of entity to find.
        entity: Entity,

        /// Omie-assigned id.
        #[arg(long, conflicts_with = "code", required_unless_present = "code")]
        id: Option<i64>,

        /// Caller-assigned integration code.
        #[arg(long)]
        code: Option<String>,
    },

    /// List entities with pagination.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Number of items per page (max 50).
        #[arg(long)]
        per_page: Option<u32>,

        /// Fetch every page.
        #[arg(long, conflicts_with = "page")]
        all: bool,
    },

    /// Link an Omie id to an integration code.
    Associate {
        /// The type of entity to associate.
        entity: Entity,

        /// Omie-assigned id.
        id: i64,

        /// Caller-assigned integration code.
        code: String,
    },

    /// Show the processing status of a sales order.
    Status {
        /// Integration code of the order.
        code: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A client or supplier.
    #[value(alias = "companies")]
    Company,
    /// A product.
    #[value(alias = "products")]
    Product,
    /// A sales order.
    #[value(name = "order", alias = "orders")]
    SalesOrder,
}
