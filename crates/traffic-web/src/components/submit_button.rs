use leptos::prelude::*;

use traffic_types::FormState;

/// Submit control. Disabled with a busy indicator while a request is in flight.
#[component]
pub fn SubmitButton<F>(state: RwSignal<FormState>, on_submit: F) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    let is_loading = move || state.with(|s| s.is_loading());

    view! {
        <button
            class="btn btn-submit"
            disabled=move || state.with(|s| !s.can_submit())
            on:click=move |_| on_submit()
        >
            {move || {
                let label = state.with(|s| s.submit_label());
                if is_loading() {
                    view! {
                        <span class="spinner-sm"></span>
                        <span>{label}</span>
                    }.into_any()
                } else {
                    view! { <span>{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
