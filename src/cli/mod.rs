pub mod api_client;
mod commands;
pub mod error;


use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::catalog::models::{Product, ProductCategory};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Food catalog CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: PANTRY_API_URL env or http://localhost:8080)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products by filter text
    Products {
        /// Filter text matched against the catalog
        filter: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Product lookup and creation
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
    /// Show a dish with its ingredients and nutrition
    Dish {
        /// Dish ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    /// Show a single product
    Show {
        /// Product ID
        id: i64,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a product to the catalog
    Add {
        #[arg(long)]
        name: String,
        /// Category tag (fruit, vegetable, meat, ...)
        #[arg(long)]
        category: ProductCategory,
        #[arg(long, default_value = "")]
        description: String,
        /// Calories per 100 g
        #[arg(long)]
        calories: f64,
        /// Fats per 100 g
        #[arg(long)]
        fats: f64,
        /// Protein per 100 g
        #[arg(long)]
        protein: f64,
        /// Carbs per 100 g
        #[arg(long)]
        carbs: f64,
    },
}

pub async fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    match cli.command {
        Some(Commands::Products { filter, format }) => {
            let output = commands::product::search_products(&api_client, &filter, &format).await?;
            println!("{output}");
        }
        Some(Commands::Product { command }) => match command {
            ProductCommands::Show { id, format } => {
                let output = commands::product::show_product(&api_client, id, &format).await?;
                println!("{output}");
            }
            ProductCommands::Add {
                name,
                category,
                description,
                calories,
                fats,
                protein,
                carbs,
            } => {
                // The service assigns the id; the payload carries a placeholder.
                let product = Product {
                    id: 0,
                    category,
                    name,
                    description,
                    calories,
                    fats,
                    protein,
                    carbs,
                };
                let output = commands::product::create_product(&api_client, &product).await?;
                println!("{output}");
            }
        },
        Some(Commands::Dish { id, format }) => {
            let output = commands::dish::show_dish(&api_client, id, &format).await?;
            println!("{output}");
        }
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["pantry", "--help"]);
        }
    }

    Ok(())
}
