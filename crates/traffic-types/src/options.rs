//! Closed option sets presented by the form.
//!
//! Values are sent to the backend as free-form strings; the lists only
//! constrain what a user can pick.

use std::fmt;
use std::str::FromStr;

use crate::TrafficError;

pub const AREA_NAMES: [&str; 8] = [
    "Indiranagar",
    "Whitefield",
    "Koramangala",
    "M.G. Road",
    "Jayanagar",
    "Hebbal",
    "Yeshwanthpur",
    "Electronic City",
];

pub const ROAD_NAMES: [&str; 16] = [
    "100 Feet Road",
    "CMH Road",
    "Marathahalli Bridge",
    "Sony World Junction",
    "Sarjapur Road",
    "Trinity Circle",
    "Anil Kumble Circle",
    "Jayanagar 4th Block",
    "South End Circle",
    "Hebbal Flyover",
    "Ballari Road",
    "Yeshwanthpur Circle",
    "Tumkur Road",
    "ITPL Main Road",
    "Silk Board Junction",
    "Hosur Road",
];

pub const WEATHER_CONDITIONS: [&str; 5] = ["Clear", "Overcast", "Fog", "Rain", "Windy"];

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// ---------------------------------------------------------------------------
// FormField
// ---------------------------------------------------------------------------

/// One of the four inputs of the form. The string form matches the JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    AreaName,
    RoadName,
    WeatherConditions,
    DayOfWeek,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::WeatherConditions,
        FormField::AreaName,
        FormField::RoadName,
        FormField::DayOfWeek,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FormField::AreaName => "area_name",
            FormField::RoadName => "road_name",
            FormField::WeatherConditions => "weather_conditions",
            FormField::DayOfWeek => "day_of_week",
        }
    }

    /// Placeholder shown while nothing is selected.
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::AreaName => "Select Area Name",
            FormField::RoadName => "Select Road/Intersection Name",
            FormField::WeatherConditions => "Select Weather Conditions",
            FormField::DayOfWeek => "Day of Week",
        }
    }

    /// The closed list of selectable values for this field.
    pub fn options(self) -> &'static [&'static str] {
        match self {
            FormField::AreaName => &AREA_NAMES,
            FormField::RoadName => &ROAD_NAMES,
            FormField::WeatherConditions => &WEATHER_CONDITIONS,
            FormField::DayOfWeek => &DAY_NAMES,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

/// Day of week, numbered from Sunday = 0 as the backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Sunday,
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts either the numeric index (`"3"`) or the day name, case-insensitive.
impl FromStr for DayOfWeek {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<u8>() {
            return Self::from_index(n).ok_or_else(|| TrafficError::InvalidDayOfWeek(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TrafficError::InvalidDayOfWeek(s.to_string()))
    }
}
