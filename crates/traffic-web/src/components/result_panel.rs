use leptos::prelude::*;

use traffic_types::ResultReport;

#[component]
pub fn ResultPanel(report: ResultReport) -> impl IntoView {
    let ResultReport {
        ensemble,
        individual,
        metrics,
    } = report;

    view! {
        <div class="card result-card">
            <h2 class="card-title">"Prediction Result"</h2>
            <p class="ensemble">
                "Ensemble Prediction: "
                <span class="ensemble-label">{ensemble}</span>
            </p>
            <h3 class="section-title">"Individual Model Predictions:"</h3>
            <ul class="result-list">
                {individual
                    .into_iter()
                    .map(|(model, label)| view! {
                        <li>{model}": "<span class="value">{label}</span></li>
                    })
                    .collect_view()}
            </ul>
            <h3 class="section-title">"Additional Predictions:"</h3>
            <ul class="result-list">
                {metrics
                    .into_iter()
                    .map(|row| view! {
                        <li>{row.label}": "<span class="value">{row.value}</span></li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
