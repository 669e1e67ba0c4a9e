use std::fmt;

use crate::prediction::{Metric, PredictionResult};

/// Text shown for a field the backend left out.
const MISSING: &str = "undefined";

/// One line of the "Additional Predictions" list.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the results panel shows, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub ensemble: String,
    pub individual: Vec<(String, String)>,
    pub metrics: Vec<MetricRow>,
}

impl ResultReport {
    pub fn new(prediction: &PredictionResult) -> Self {
        let metrics = Metric::ALL
            .into_iter()
            .map(|metric| MetricRow {
                label: metric.label(),
                value: format_metric(prediction, metric),
            })
            .collect();

        Self {
            ensemble: prediction
                .ensemble_prediction
                .clone()
                .unwrap_or_else(|| MISSING.to_string()),
            individual: prediction.individual_predictions.clone(),
            metrics,
        }
    }
}

impl From<&PredictionResult> for ResultReport {
    fn from(prediction: &PredictionResult) -> Self {
        Self::new(prediction)
    }
}

fn format_metric(prediction: &PredictionResult, metric: Metric) -> String {
    if metric == Metric::Roadwork {
        return if prediction.has_roadwork() { "Yes" } else { "No" }.to_string();
    }
    match prediction.metric(metric) {
        Some(value) => value.to_string(),
        None => MISSING.to_string(),
    }
}

impl fmt::Display for ResultReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prediction Result")?;
        writeln!(f, "Ensemble Prediction: {}", self.ensemble)?;
        writeln!(f)?;
        writeln!(f, "Individual Model Predictions:")?;
        for (model, label) in &self.individual {
            writeln!(f, "  - {}: {}", model, label)?;
        }
        writeln!(f)?;
        writeln!(f, "Additional Predictions:")?;
        for row in &self.metrics {
            writeln!(f, "  - {}: {}", row.label, row.value)?;
        }
        Ok(())
    }
}
