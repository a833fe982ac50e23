use serde::Deserialize;
use tabled::{Table, Tabled, settings::Style};

use crate::catalog::models::Product;
use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;

/// The deployed catalog service accepts product creation on its /dishes
/// route. Kept as a single constant so a corrected deployment only needs
/// one change here.
const PRODUCT_CREATE_PATH: &str = "/dishes";

#[derive(Debug, Deserialize)]
struct CreatedProduct {
    id: i64,
}

#[derive(Tabled)]
struct ProductDisplay {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "kcal/100g")]
    calories: String,
}

impl From<&Product> for ProductDisplay {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.to_string(),
            description: truncate(&product.description, 40),
            calories: format!("{:.0}", product.calories),
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let shortened: String = s.chars().take(max - 3).collect();
        format!("{}...", shortened)
    }
}

/// Query products matching the filter text. `None` means the service
/// reported not-found, distinct from a successful query with no matches.
pub async fn lookup_products_by_filter(
    api_client: &ApiClient,
    filter: &str,
) -> CliResult<Option<Vec<Product>>> {
    let response = api_client
        .get("/products")
        .query(&[("filter", filter)])
        .send()
        .await?;
    ApiClient::handle_optional(response).await
}

/// Fetch a single product by id; `None` when the service reports absence.
pub async fn lookup_product_by_id(
    api_client: &ApiClient,
    id: i64,
) -> CliResult<Option<Product>> {
    let response = api_client.get(&format!("/product/{id}")).send().await?;
    ApiClient::handle_optional(response).await
}

/// Submit a new product; returns the assigned id, or `None` when the
/// service rejected the payload.
pub async fn add_product(api_client: &ApiClient, product: &Product) -> CliResult<Option<i64>> {
    let response = api_client
        .post(PRODUCT_CREATE_PATH)
        .json(product)
        .send()
        .await?;
    let created: Option<CreatedProduct> = ApiClient::handle_optional(response).await?;
    Ok(created.map(|c| c.id))
}

/// Search products and render the result set
pub async fn search_products(
    api_client: &ApiClient,
    filter: &str,
    format: &str,
) -> CliResult<String> {
    match lookup_products_by_filter(api_client, filter).await? {
        None => Ok("Not found.".to_string()),
        Some(products) => match format {
            "json" => Ok(serde_json::to_string_pretty(&products)?),
            _ => Ok(format_table(&products)),
        },
    }
}

fn format_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products matched.".to_string();
    }

    let rows: Vec<ProductDisplay> = products.iter().map(|p| p.into()).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Show a single product in detail
pub async fn show_product(api_client: &ApiClient, id: i64, format: &str) -> CliResult<String> {
    match lookup_product_by_id(api_client, id).await? {
        None => Ok("Not found.".to_string()),
        Some(product) => match format {
            "json" => Ok(serde_json::to_string_pretty(&product)?),
            _ => Ok(format_product_detail(&product)),
        },
    }
}

fn format_product_detail(product: &Product) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Product ID", &product.id.to_string()]);
    builder.push_record(["Name", &product.name]);
    builder.push_record(["Category", product.category.as_str()]);

    if !product.description.is_empty() {
        builder.push_record(["Description", &product.description]);
    }

    builder.push_record(["Calories", &format!("{:.1} kcal/100g", product.calories)]);
    builder.push_record(["Fats", &format!("{:.1} g/100g", product.fats)]);
    builder.push_record(["Protein", &format!("{:.1} g/100g", product.protein)]);
    builder.push_record(["Carbs", &format!("{:.1} g/100g", product.carbs)]);

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Create a product and report the assigned id
pub async fn create_product(api_client: &ApiClient, product: &Product) -> CliResult<String> {
    match add_product(api_client, product).await? {
        Some(id) => Ok(format!("Created product ({id})")),
        None => Ok("Not created: the service rejected the product.".to_string()),
    }
}
