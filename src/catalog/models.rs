use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product category as the service tags it on the wire. String-valued so
/// reordering members never changes the serialized form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fruit,
    Vegetable,
    Meat,
    Fish,
    Dairy,
    Sauce,
    Grain,
    Oil,
    Beverage,
    Snack,
    Spice,
}

impl ProductCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Fruit => "fruit",
            ProductCategory::Vegetable => "vegetable",
            ProductCategory::Meat => "meat",
            ProductCategory::Fish => "fish",
            ProductCategory::Dairy => "dairy",
            ProductCategory::Sauce => "sauce",
            ProductCategory::Grain => "grain",
            ProductCategory::Oil => "oil",
            ProductCategory::Beverage => "beverage",
            ProductCategory::Snack => "snack",
            ProductCategory::Spice => "spice",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruit" => Ok(ProductCategory::Fruit),
            "vegetable" => Ok(ProductCategory::Vegetable),
            "meat" => Ok(ProductCategory::Meat),
            "fish" => Ok(ProductCategory::Fish),
            "dairy" => Ok(ProductCategory::Dairy),
            "sauce" => Ok(ProductCategory::Sauce),
            "grain" => Ok(ProductCategory::Grain),
            "oil" => Ok(ProductCategory::Oil),
            "beverage" => Ok(ProductCategory::Beverage),
            "snack" => Ok(ProductCategory::Snack),
            "spice" => Ok(ProductCategory::Spice),
            other => Err(format!("unknown product category: {other}")),
        }
    }
}

/// Dish category, string-valued like [`ProductCategory`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Salad,
    Soup,
    Main,
    Dessert,
    Sandwich,
    Wrap,
    Pizza,
    Pasta,
    Burger,
    Breakfast,
}

impl DishCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            DishCategory::Salad => "salad",
            DishCategory::Soup => "soup",
            DishCategory::Main => "main",
            DishCategory::Dessert => "dessert",
            DishCategory::Sandwich => "sandwich",
            DishCategory::Wrap => "wrap",
            DishCategory::Pizza => "pizza",
            DishCategory::Pasta => "pasta",
            DishCategory::Burger => "burger",
            DishCategory::Breakfast => "breakfast",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product response from the catalog service. Macro fields are per 100 g.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub category: ProductCategory,
    pub name: String,
    pub description: String,
    pub calories: f64,
    pub fats: f64,
    pub protein: f64,
    pub carbs: f64,
}

/// One dish component: the product embedded by value plus its weight in grams.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub product: Product,
    pub weight: f64,
}

/// Dish response from the catalog service, ingredients in serving order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dish {
    pub id: i64,
    pub category: DishCategory,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
}
