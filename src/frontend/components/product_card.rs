use leptos::prelude::*;

use pantry::catalog::models::Product;

/// Search hit linking to the product detail page.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
        <a
            href=format!("/product/{}", product.id)
            class="block bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-4 hover:border-ctp-blue transition-colors text-left"
        >
            <div class="flex justify-between items-start mb-2 gap-2">
                <h3 class="text-xl font-semibold text-ctp-text">{product.name.clone()}</h3>
                <span class="text-xs bg-ctp-surface1 text-ctp-subtext1 px-2 py-1 rounded whitespace-nowrap">
                    {product.category.as_str()}
                </span>
            </div>
            <p class="text-ctp-subtext0 text-sm mb-2">{product.description.clone()}</p>
            <p class="text-xs text-ctp-overlay0">{format!("{:.0} kcal / 100 g", product.calories)}</p>
        </a>
    }
}
