use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Trailing-edge debouncer over one reactive value source.
///
/// Returns a signal that follows `source`, updating only once the source has
/// stopped changing for `delay_ms`. Every change cancels the previous
/// pending timeout before scheduling a new one, so at most one timer is
/// pending per instance at any moment. A `delay_ms` of 0 still takes one
/// `set_timeout` hop — the debounced value is never updated synchronously
/// with the change that caused it.
pub fn use_debounced<T>(source: ReadSignal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(source.get_untracked());

    // Pending timer handle; cleared on every new input, when the timer
    // fires, and on scope disposal.
    let pending_timeout = StoredValue::new_local(None::<i32>);
    // Keeps the scheduled closure alive until it is superseded.
    let pending_callback = StoredValue::new_local(None::<Closure<dyn FnMut()>>);

    let cancel_pending = move || {
        if let Some(Some(handle)) = pending_timeout.try_update_value(|pending| pending.take()) {
            web_sys::window().unwrap().clear_timeout_with_handle(handle);
        }
    };

    Effect::new(move || {
        let value = source.get();

        cancel_pending();

        let callback = Closure::once(move || {
            pending_timeout.update_value(|pending| *pending = None);
            set_debounced.set(value);
        });

        let handle = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .unwrap();

        pending_timeout.update_value(|pending| *pending = Some(handle));
        // Replacing the slot drops the superseded closure, which either
        // already fired or was cancelled above.
        pending_callback.update_value(|slot| *slot = Some(callback));
    });

    // A timer pending at unmount must never fire.
    on_cleanup(cancel_pending);

    debounced
}
