use crate::catalog::models::*;
use crate::catalog::nutrition::*;

fn product(calories: f64, fats: f64, protein: f64, carbs: f64) -> Product {
    Product {
        id: 1,
        category: ProductCategory::Fruit,
        name: "test".to_string(),
        description: String::new(),
        calories,
        fats,
        protein,
        carbs,
    }
}

fn dish(ingredients: Vec<Ingredient>) -> Dish {
    Dish {
        id: 1,
        category: DishCategory::Salad,
        name: "test".to_string(),
        description: String::new(),
        ingredients,
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_ingredient_scales_per_100g_macros() {
    // 150 g of a 52 kcal / 100 g product
    let ingredient = Ingredient {
        product: product(52.0, 0.2, 0.3, 14.0),
        weight: 150.0,
    };

    let info = ingredient_nutrition(&ingredient);
    assert_close(info.calories, 78.0);
    assert_close(info.fats, 0.3);
    assert_close(info.protein, 0.45);
    assert_close(info.carbs, 21.0);
    assert_close(info.weight, 150.0);
}

#[test]
fn test_dish_sums_ingredients() {
    let d = dish(vec![
        Ingredient {
            product: product(100.0, 10.0, 5.0, 2.0),
            weight: 200.0,
        },
        Ingredient {
            product: product(50.0, 1.0, 2.0, 8.0),
            weight: 100.0,
        },
    ]);

    let info = dish_nutrition(&d);
    assert_close(info.calories, 250.0);
    assert_close(info.fats, 21.0);
    assert_close(info.protein, 12.0);
    assert_close(info.carbs, 12.0);
    assert_close(info.weight, 300.0);
}

#[test]
fn test_empty_dish_is_zero() {
    let info = dish_nutrition(&dish(Vec::new()));
    assert_eq!(info, NutritionInfo::default());
}
