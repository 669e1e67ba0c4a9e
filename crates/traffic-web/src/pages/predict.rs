use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::post_prediction;
use crate::components::option_select::OptionSelect;
use crate::components::result_panel::ResultPanel;
use crate::components::submit_button::SubmitButton;
use traffic_types::{FormField, FormState, ResultReport};

/// The traffic prediction form and, once available, its result.
#[component]
pub fn PredictionPage() -> impl IntoView {
    let state = RwSignal::new(FormState::new());

    let on_submit = move || {
        // `None` while a request is in flight.
        let Some(ticket) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = post_prediction(ticket.input()).await;
            state.update(|s| {
                s.settle(ticket, outcome);
            });
        });
    };

    let report = move || state.with(|s| s.result().map(ResultReport::new));

    view! {
        <div class="page">
            <div class="card form-card">
                <header class="card-header">
                    <h1 class="card-title">"Bangalore Traffic Prediction"</h1>
                    <p class="card-description">
                        "Fill the form to get the prediction of traffic in selected areas of Bangalore"
                    </p>
                </header>

                <div class="card-content">
                    <div class="form-row">
                        <OptionSelect field=FormField::WeatherConditions state=state/>
                    </div>
                    <div class="form-row">
                        <OptionSelect field=FormField::AreaName state=state/>
                        <OptionSelect field=FormField::RoadName state=state/>
                    </div>
                    <OptionSelect field=FormField::DayOfWeek state=state/>
                </div>

                <SubmitButton state=state on_submit=on_submit/>

                {move || report().map(|report| view! { <ResultPanel report=report/> })}
            </div>
        </div>
    }
}
