use leptos::prelude::*;

/// Search input that echoes every keystroke through `on_input`.
///
/// Deliberately dumb: debouncing and query scheduling happen downstream in
/// the search hook, so the input stays a faithful mirror of what was typed.
#[component]
pub fn SearchInput(
    /// The current value of the search input
    value: ReadSignal<String>,
    /// Callback for every input change
    on_input: Callback<String>,
    /// Placeholder text for the input
    #[prop(optional, default = "Search...")]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            class="w-full rounded-lg border-ctp-surface1 bg-ctp-surface0 px-4 py-2 text-ctp-text placeholder-ctp-subtext0 focus:border-ctp-blue focus:ring-2 focus:ring-ctp-blue focus:outline-none"
        />
    }
}
