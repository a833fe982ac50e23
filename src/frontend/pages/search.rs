use leptos::prelude::*;
use thaw::Spinner;

use pantry::catalog::search::{QueryResult, SearchPhase};

use crate::components::{ProductCard, SearchInput};
use crate::hooks::use_search;

/// Input quiescence before a lookup is issued.
const SEARCH_DEBOUNCE_MS: u32 = 1000;

#[component]
pub fn Search() -> impl IntoView {
    let search = use_search(SEARCH_DEBOUNCE_MS);

    view! {
        <div class="container mx-auto p-6">
            <h2 class="text-3xl font-bold text-ctp-text mb-6">"Search the catalog"</h2>

            <div class="mb-6 max-w-xl">
                <SearchInput
                    value=search.filter_input
                    on_input=search.on_input
                    placeholder="Search products..."
                />
            </div>

            {move || match search.phase.get() {
                SearchPhase::Idle => {
                    view! { <p class="text-ctp-subtext0">"Type to search the catalog."</p> }
                        .into_any()
                }
                SearchPhase::Pending => {
                    view! {
                        <div class="flex items-center gap-3 text-ctp-subtext0">
                            <Spinner/>
                            <span>"Searching..."</span>
                        </div>
                    }
                        .into_any()
                }
                SearchPhase::Settled(QueryResult::Absent) => {
                    view! { <p class="text-ctp-subtext0">"Not found."</p> }.into_any()
                }
                SearchPhase::Settled(QueryResult::Matches(products)) => {
                    if products.is_empty() {
                        view! {
                            <p class="text-ctp-subtext0">"No products matched your search."</p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                                {products
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
