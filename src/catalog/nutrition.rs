use super::models::{Dish, Ingredient};

/// Aggregate nutrition for a dish or ingredient. Macro totals are absolute
/// (not per 100 g); `weight` is the summed ingredient weight in grams.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NutritionInfo {
    pub calories: f64,
    pub fats: f64,
    pub protein: f64,
    pub carbs: f64,
    pub weight: f64,
}

/// Scales an ingredient's per-100 g product macros by its weight.
pub fn ingredient_nutrition(ingredient: &Ingredient) -> NutritionInfo {
    let factor = ingredient.weight / 100.0;
    NutritionInfo {
        calories: ingredient.product.calories * factor,
        fats: ingredient.product.fats * factor,
        protein: ingredient.product.protein * factor,
        carbs: ingredient.product.carbs * factor,
        weight: ingredient.weight,
    }
}

/// Sums nutrition over all ingredients of a dish.
pub fn dish_nutrition(dish: &Dish) -> NutritionInfo {
    dish.ingredients
        .iter()
        .map(ingredient_nutrition)
        .fold(NutritionInfo::default(), |acc, part| NutritionInfo {
            calories: acc.calories + part.calories,
            fats: acc.fats + part.fats,
            protein: acc.protein + part.protein,
            carbs: acc.carbs + part.carbs,
            weight: acc.weight + part.weight,
        })
}
