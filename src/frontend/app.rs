use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use thaw::*;

use crate::pages::{DishDetail, ProductDetail, Search};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme>
            <Title text="pantry"/>
            <AppContent/>
        </ConfigProvider>
    }
}

#[component]
fn AppContent() -> impl IntoView {
    view! {
        <Router>
            <NavAndContent/>
        </Router>
    }
}

#[component]
fn NavAndContent() -> impl IntoView {
    let location = use_location();

    let is_active = move |path: &str| {
        let current = location.pathname.get();
        if path == "/" {
            current == "/"
        } else {
            current.starts_with(path)
        }
    };

    view! {
        <main class="min-h-screen bg-ctp-base flex flex-col">
            <nav class="bg-ctp-surface0 border-b border-ctp-surface1">
                <div class="container mx-auto flex justify-between items-center px-6 py-4">
                    <div class="flex items-center gap-2">
                        <h1 class="text-3xl font-bold bg-gradient-to-r from-ctp-green to-ctp-teal bg-clip-text text-transparent">
                            "pantry"
                        </h1>
                        <span class="text-xs text-ctp-subtext0 font-mono">
                            {env!("CARGO_PKG_VERSION")}
                        </span>
                    </div>
                    <div class="flex gap-2 items-center">
                        <a href="/"
                            class="px-4 py-2 rounded-lg font-medium transition-colors"
                            class:bg-ctp-surface2=move || is_active("/")
                            class:text-ctp-text=move || is_active("/")
                            class:text-ctp-subtext1=move || !is_active("/")
                            class:hover:bg-ctp-surface1=move || !is_active("/")
                            class:hover:text-ctp-text=move || !is_active("/")>
                            "Search"
                        </a>
                    </div>
                </div>
            </nav>

            <div class="flex-1">
                <Routes fallback=|| view! { <p class="p-6 text-ctp-subtext0">"Page not found"</p> }>
                    <Route path=path!("/") view=Search/>
                    <Route path=path!("/product/:id") view=ProductDetail/>
                    <Route path=path!("/dish/:id") view=DishDetail/>
                </Routes>
            </div>

            <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                <div class="container mx-auto text-center text-xs text-ctp-overlay0">
                    <p>"pantry v" {env!("CARGO_PKG_VERSION")}</p>
                </div>
            </footer>
        </main>
    }
}
