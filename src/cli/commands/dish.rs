use tabled::{Table, Tabled, settings::Style};

use crate::catalog::models::Dish;
use crate::catalog::nutrition::{dish_nutrition, ingredient_nutrition};
use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;

#[derive(Tabled)]
struct IngredientDisplay {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Weight")]
    weight: String,
    #[tabled(rename = "kcal")]
    calories: String,
}

/// Fetch a dish with its embedded ingredients; `None` when the service
/// reports absence.
pub async fn lookup_dish_by_id(api_client: &ApiClient, id: i64) -> CliResult<Option<Dish>> {
    let response = api_client.get(&format!("/dish/{id}")).send().await?;
    ApiClient::handle_optional(response).await
}

/// Show a dish, its ingredients, and aggregate nutrition
pub async fn show_dish(api_client: &ApiClient, id: i64, format: &str) -> CliResult<String> {
    match lookup_dish_by_id(api_client, id).await? {
        None => Ok("Not found.".to_string()),
        Some(dish) => match format {
            "json" => Ok(serde_json::to_string_pretty(&dish)?),
            _ => Ok(format_dish_detail(&dish)),
        },
    }
}

fn format_dish_detail(dish: &Dish) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Dish ID", &dish.id.to_string()]);
    builder.push_record(["Name", &dish.name]);
    builder.push_record(["Category", dish.category.as_str()]);

    if !dish.description.is_empty() {
        builder.push_record(["Description", &dish.description]);
    }

    let mut header = builder.build();
    header.with(Style::rounded());

    if dish.ingredients.is_empty() {
        return format!("{header}\nNo ingredients listed.");
    }

    let rows: Vec<IngredientDisplay> = dish
        .ingredients
        .iter()
        .map(|ingredient| {
            let info = ingredient_nutrition(ingredient);
            IngredientDisplay {
                product: ingredient.product.name.clone(),
                weight: format!("{:.0} g", ingredient.weight),
                calories: format!("{:.0}", info.calories),
            }
        })
        .collect();
    let mut ingredients = Table::new(rows);
    ingredients.with(Style::rounded());

    let total = dish_nutrition(dish);
    let summary = format!(
        "Total: {:.0} kcal / {:.0} g (protein {:.1} g, fats {:.1} g, carbs {:.1} g)",
        total.calories, total.weight, total.protein, total.fats, total.carbs
    );

    format!("{header}\n{ingredients}\n{summary}")
}
