use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::options::{DayOfWeek, FormField};
use crate::{Result, TrafficError};

// ---------------------------------------------------------------------------
// FormInput — request body of POST /api/predict-traffic
// ---------------------------------------------------------------------------

/// The four selections sent to the backend.
///
/// All fields start empty (day 0 = Sunday). Nothing requires a field to be
/// set before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub area_name: String,
    pub road_name: String,
    pub weather_conditions: String,
    pub day_of_week: u8,
}

impl FormInput {
    /// Set one field from its string value.
    ///
    /// String fields take the value as-is. `day_of_week` is parsed to its
    /// integer index; an unparseable value leaves the input untouched.
    pub fn select(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::AreaName => self.area_name = value.to_string(),
            FormField::RoadName => self.road_name = value.to_string(),
            FormField::WeatherConditions => self.weather_conditions = value.to_string(),
            FormField::DayOfWeek => self.day_of_week = value.parse::<DayOfWeek>()?.index(),
        }
        Ok(())
    }

    /// Set one field to the `index`-th entry of its closed option list.
    pub fn select_option(&mut self, field: FormField, index: usize) -> Result<()> {
        let value = field
            .options()
            .get(index)
            .ok_or(TrafficError::OptionOutOfRange { field, index })?;
        match field {
            // Day options are names; the wire value is the index itself.
            FormField::DayOfWeek => {
                self.day_of_week = index as u8;
                Ok(())
            }
            _ => self.select(field, value),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric — the fixed set of traffic metrics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TrafficVolume,
    AverageSpeed,
    TravelTimeIndex,
    RoadCapacityUtilization,
    IncidentReports,
    EnvironmentalImpact,
    PublicTransportUsage,
    TrafficSignalCompliance,
    ParkingUsage,
    PedestrianCyclistCount,
    Roadwork,
}

impl Metric {
    /// Display order of the results panel.
    pub const ALL: [Metric; 11] = [
        Metric::TrafficVolume,
        Metric::AverageSpeed,
        Metric::TravelTimeIndex,
        Metric::RoadCapacityUtilization,
        Metric::IncidentReports,
        Metric::EnvironmentalImpact,
        Metric::PublicTransportUsage,
        Metric::TrafficSignalCompliance,
        Metric::ParkingUsage,
        Metric::PedestrianCyclistCount,
        Metric::Roadwork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TrafficVolume => "Traffic Volume",
            Metric::AverageSpeed => "Average Speed",
            Metric::TravelTimeIndex => "Travel Time Index",
            Metric::RoadCapacityUtilization => "Road Capacity Utilization",
            Metric::IncidentReports => "Incident Reports",
            Metric::EnvironmentalImpact => "Environmental Impact",
            Metric::PublicTransportUsage => "Public Transport Usage",
            Metric::TrafficSignalCompliance => "Traffic Signal Compliance",
            Metric::ParkingUsage => "Parking Usage",
            Metric::PedestrianCyclistCount => "Pedestrian and Cyclist Count",
            Metric::Roadwork => "Roadwork",
        }
    }
}

// ---------------------------------------------------------------------------
// MetricValue — a metric as it appeared on the wire
// ---------------------------------------------------------------------------

/// Metrics are numeric, except for flags such as roadwork which some
/// backends send as booleans. A literal `null` is kept apart from a missing key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(serde_json::Number),
    Flag(bool),
    Null,
}

impl MetricValue {
    /// Truthiness of the value: non-zero numbers and `true`.
    pub fn is_set(&self) -> bool {
        match self {
            MetricValue::Number(n) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            MetricValue::Flag(flag) => *flag,
            MetricValue::Null => false,
        }
    }
}

/// Numbers print as received (`1200`, `18.5`); flags and `null` print nothing.
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write!(f, "{}", n),
            MetricValue::Flag(_) | MetricValue::Null => Ok(()),
        }
    }
}

impl<'de> Deserialize<'de> for MetricValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(n) => Ok(MetricValue::Number(n)),
            serde_json::Value::Bool(flag) => Ok(MetricValue::Flag(flag)),
            serde_json::Value::Null => Ok(MetricValue::Null),
            other => Err(de::Error::custom(format!(
                "invalid metric {}, expected a number or boolean",
                other
            ))),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(MetricValue::Number)
            .unwrap_or(MetricValue::Null)
    }
}

impl From<bool> for MetricValue {
    fn from(flag: bool) -> Self {
        MetricValue::Flag(flag)
    }
}

// `Option`'s own impl would swallow `null`; only a missing key stays `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<MetricValue>, D::Error>
where
    D: Deserializer<'de>,
{
    MetricValue::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// PredictionResult — response body of POST /api/predict-traffic
// ---------------------------------------------------------------------------

/// Prediction as returned by the backend.
///
/// Decoding is lenient: any field may be missing and is then rendered as
/// `undefined`. Strings or objects in place of a metric still fail to decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, with = "crate::ordered_pairs")]
    pub individual_predictions: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ensemble_prediction: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub traffic_volume: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub average_speed: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub travel_time_index: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub road_capacity_utilization: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub incident_reports: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub environmental_impact: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub public_transport_usage: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub traffic_signal_compliance: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub parking_usage: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub pedestrian_cyclist_count: Option<MetricValue>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub roadwork: Option<MetricValue>,
}

impl PredictionResult {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| TrafficError::Decode(e.to_string()))
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricValue> {
        match metric {
            Metric::TrafficVolume => self.traffic_volume.as_ref(),
            Metric::AverageSpeed => self.average_speed.as_ref(),
            Metric::TravelTimeIndex => self.travel_time_index.as_ref(),
            Metric::RoadCapacityUtilization => self.road_capacity_utilization.as_ref(),
            Metric::IncidentReports => self.incident_reports.as_ref(),
            Metric::EnvironmentalImpact => self.environmental_impact.as_ref(),
            Metric::PublicTransportUsage => self.public_transport_usage.as_ref(),
            Metric::TrafficSignalCompliance => self.traffic_signal_compliance.as_ref(),
            Metric::ParkingUsage => self.parking_usage.as_ref(),
            Metric::PedestrianCyclistCount => self.pedestrian_cyclist_count.as_ref(),
            Metric::Roadwork => self.roadwork.as_ref(),
        }
    }

    /// Roadwork is 0/1 or a boolean; anything truthy counts as ongoing.
    pub fn has_roadwork(&self) -> bool {
        self.roadwork.as_ref().is_some_and(MetricValue::is_set)
    }
}
