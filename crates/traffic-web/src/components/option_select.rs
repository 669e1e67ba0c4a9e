use leptos::prelude::*;

use traffic_types::{FormField, FormState};

/// Dropdown over one field's closed option list.
///
/// Option values are list indices, so only listed values can reach the form.
#[component]
pub fn OptionSelect(field: FormField, state: RwSignal<FormState>) -> impl IntoView {
    view! {
        <select
            class="form-select"
            name=field.key()
            on:change=move |ev| {
                let Ok(index) = event_target_value(&ev).parse::<usize>() else {
                    return;
                };
                state.update(|s| {
                    if let Err(e) = s.select_option(field, index) {
                        tracing::warn!("Ignoring selection: {}", e);
                    }
                });
            }
        >
            <option value="" disabled=true selected=true>{field.placeholder()}</option>
            {field
                .options()
                .iter()
                .enumerate()
                .map(|(i, label)| view! { <option value=i.to_string()>{*label}</option> })
                .collect_view()}
        </select>
    }
}
