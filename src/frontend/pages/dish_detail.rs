use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::Spinner;

use pantry::catalog::models::Dish;
use pantry::catalog::nutrition::{dish_nutrition, ingredient_nutrition};

use crate::api::{self, CatalogError};

#[component]
pub fn DishDetail() -> impl IntoView {
    let params = use_params_map();
    let dish_id = move || {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    let (dish_data, set_dish_data) = signal(None::<Result<Option<Dish>, CatalogError>>);

    Effect::new(move || match dish_id() {
        Some(id) => {
            spawn_local(async move {
                let result = api::dish_by_id(id).await;
                if let Err(err) = &result {
                    web_sys::console::error_1(&format!("dish {id} fetch failed: {err}").into());
                }
                let _ = set_dish_data.try_set(Some(result));
            });
        }
        None => set_dish_data.set(Some(Ok(None))),
    });

    view! {
        <div class="container mx-auto p-6">
            {move || match dish_data.get() {
                None => {
                    view! {
                        <div class="flex items-center gap-3 text-ctp-subtext0">
                            <Spinner/>
                            <span>"Loading dish..."</span>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(Some(dish))) => {
                    let total = dish_nutrition(&dish);
                    view! {
                        <div>
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-3xl font-bold text-ctp-text">{dish.name.clone()}</h2>
                                <a
                                    href="/"
                                    class="text-ctp-blue hover:text-ctp-lavender text-sm whitespace-nowrap"
                                >
                                    "← Back to search"
                                </a>
                            </div>

                            <span class="text-xs bg-ctp-surface1 text-ctp-subtext1 px-3 py-1 rounded">
                                {dish.category.as_str()}
                            </span>

                            {(!dish.description.is_empty())
                                .then(|| {
                                    view! {
                                        <p class="text-ctp-subtext0 mt-4">
                                            {dish.description.clone()}
                                        </p>
                                    }
                                })}

                            <h3 class="text-lg font-semibold text-ctp-text mt-6 mb-3">
                                "Ingredients"
                            </h3>
                            {if dish.ingredients.is_empty() {
                                view! { <p class="text-ctp-subtext0">"No ingredients listed."</p> }
                                    .into_any()
                            } else {
                                view! {
                                    <ul class="max-w-xl divide-y divide-ctp-surface1 bg-ctp-surface0 border border-ctp-surface1 rounded-lg">
                                        {dish
                                            .ingredients
                                            .iter()
                                            .map(|ingredient| {
                                                let info = ingredient_nutrition(ingredient);
                                                view! {
                                                    <li class="flex justify-between items-center px-4 py-2 text-sm">
                                                        <a
                                                            href=format!(
                                                                "/product/{}",
                                                                ingredient.product.id,
                                                            )
                                                            class="text-ctp-blue hover:text-ctp-lavender"
                                                        >
                                                            {ingredient.product.name.clone()}
                                                        </a>
                                                        <span class="text-ctp-subtext0">
                                                            {format!(
                                                                "{:.0} g · {:.0} kcal",
                                                                ingredient.weight,
                                                                info.calories,
                                                            )}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }}

                            <div class="mt-6 max-w-xl bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-4 text-sm text-ctp-subtext0">
                                {format!(
                                    "Total: {:.0} kcal / {:.0} g (protein {:.1} g, fats {:.1} g, carbs {:.1} g)",
                                    total.calories,
                                    total.weight,
                                    total.protein,
                                    total.fats,
                                    total.carbs,
                                )}
                            </div>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(None)) | Some(Err(_)) => {
                    view! {
                        <div class="text-center py-12">
                            <p class="text-ctp-subtext0 text-xl">"Not found"</p>
                            <a href="/" class="text-ctp-blue hover:text-ctp-lavender text-sm">
                                "← Back to search"
                            </a>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
