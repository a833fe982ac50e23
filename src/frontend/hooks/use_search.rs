use leptos::prelude::*;
use leptos::task::spawn_local;

use pantry::catalog::search::{QueryResult, SearchLifecycle, SearchPhase};

use super::use_debounced;
use crate::api;

/// Signals exposed by the search pipeline.
pub struct UseSearchReturn {
    /// Raw filter text, echoing every keystroke
    pub filter_input: ReadSignal<String>,
    /// Where the search currently stands
    pub phase: ReadSignal<SearchPhase>,
    /// Feed an input change into the pipeline
    pub on_input: Callback<String>,
}

/// Hook wiring a raw text input through the debouncer into the catalog
/// client.
///
/// Keystrokes update `filter_input` synchronously; once the input has been
/// quiet for `delay_ms`, exactly one lookup is issued for the settled
/// filter. Each lookup carries a generation token, and a completion is
/// applied only while its token is still current — a slow early response
/// can never overwrite the result of a newer query.
pub fn use_search(delay_ms: u32) -> UseSearchReturn {
    let (filter_input, set_filter_input) = signal(String::new());
    let (phase, set_phase) = signal(SearchPhase::Idle);

    // Single owner of the query lifecycle; snapshots flow out via `phase`.
    let lifecycle = StoredValue::new(SearchLifecycle::new());

    let debounced_filter = use_debounced(filter_input, delay_ms);

    let on_input = Callback::new(move |value: String| {
        set_filter_input.set(value.clone());
        lifecycle.update_value(|l| l.input_changed(&value));
        set_phase.set(lifecycle.with_value(|l| l.phase().clone()));
    });

    // One lookup per settled filter. The empty filter never queries.
    Effect::new(move || {
        let filter = debounced_filter.get();
        let trimmed = filter.trim().to_string();

        let token = lifecycle
            .try_update_value(|l| l.query_started(&trimmed))
            .flatten();
        let Some(token) = token else {
            return;
        };

        spawn_local(async move {
            let outcome = match api::products_by_filter(&trimmed).await {
                Ok(Some(products)) => QueryResult::Matches(products),
                Ok(None) => QueryResult::Absent,
                Err(err) => {
                    // Degrade to the not-found view; the failure itself
                    // stays visible on the console.
                    web_sys::console::error_1(&format!("product search failed: {err}").into());
                    QueryResult::Absent
                }
            };

            // The page may have unmounted while the lookup was in flight;
            // a stale token is discarded either way.
            let applied = lifecycle
                .try_update_value(|l| l.query_resolved(token, outcome))
                .unwrap_or(false);
            if applied {
                if let Some(snapshot) = lifecycle.try_with_value(|l| l.phase().clone()) {
                    let _ = set_phase.try_set(snapshot);
                }
            }
        });
    });

    UseSearchReturn {
        filter_input,
        phase,
        on_input,
    }
}
