use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::Spinner;

use pantry::catalog::models::Product;

use crate::api::{self, CatalogError};

#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || {
        params
            .read()
            .get("id")
            .and_then(|id| id.parse::<i64>().ok())
    };

    let (product_data, set_product_data) =
        signal(None::<Result<Option<Product>, CatalogError>>);

    // One-shot fetch per mount (and per id change on navigation)
    Effect::new(move || match product_id() {
        Some(id) => {
            spawn_local(async move {
                let result = api::product_by_id(id).await;
                if let Err(err) = &result {
                    web_sys::console::error_1(&format!("product {id} fetch failed: {err}").into());
                }
                let _ = set_product_data.try_set(Some(result));
            });
        }
        // Non-numeric id in the URL: nothing to fetch
        None => set_product_data.set(Some(Ok(None))),
    });

    view! {
        <div class="container mx-auto p-6">
            {move || match product_data.get() {
                None => {
                    view! {
                        <div class="flex items-center gap-3 text-ctp-subtext0">
                            <Spinner/>
                            <span>"Loading product..."</span>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(Some(product))) => {
                    view! {
                        <div>
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-3xl font-bold text-ctp-text">
                                    {product.name.clone()}
                                </h2>
                                <a
                                    href="/"
                                    class="text-ctp-blue hover:text-ctp-lavender text-sm whitespace-nowrap"
                                >
                                    "← Back to search"
                                </a>
                            </div>

                            <span class="text-xs bg-ctp-surface1 text-ctp-subtext1 px-3 py-1 rounded">
                                {product.category.as_str()}
                            </span>

                            {(!product.description.is_empty())
                                .then(|| {
                                    view! {
                                        <p class="text-ctp-subtext0 mt-4">
                                            {product.description.clone()}
                                        </p>
                                    }
                                })}

                            <div class="mt-6 max-w-md bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-4">
                                <h3 class="text-lg font-semibold text-ctp-text mb-3">
                                    "Nutrition per 100 g"
                                </h3>
                                <dl class="grid grid-cols-2 gap-2 text-sm">
                                    <dt class="text-ctp-subtext0">"Calories"</dt>
                                    <dd class="text-ctp-text text-right">
                                        {format!("{:.1} kcal", product.calories)}
                                    </dd>
                                    <dt class="text-ctp-subtext0">"Fats"</dt>
                                    <dd class="text-ctp-text text-right">
                                        {format!("{:.1} g", product.fats)}
                                    </dd>
                                    <dt class="text-ctp-subtext0">"Protein"</dt>
                                    <dd class="text-ctp-text text-right">
                                        {format!("{:.1} g", product.protein)}
                                    </dd>
                                    <dt class="text-ctp-subtext0">"Carbs"</dt>
                                    <dd class="text-ctp-text text-right">
                                        {format!("{:.1} g", product.carbs)}
                                    </dd>
                                </dl>
                            </div>
                        </div>
                    }
                        .into_any()
                }
                // Absent and transport failure conflate to the same view;
                // the distinction was kept until this boundary.
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
