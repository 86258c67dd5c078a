//! Recorded crop condition types.
//!
//! A [`Dataset`] is one crop's planting cycle: an ordered list of
//! [`DailyEntry`] values, each pairing a day number with a
//! [`ConditionRecord`] of environmental readings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Condition record
// ---------------------------------------------------------------------------

/// One day's environmental measurements for a field.
///
/// Every reading is an independent scalar. No cross-field invariants are
/// enforced; the service replays what was recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConditionRecord {
    /// Air temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity (percent).
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in millimetres.
    pub rainfall: f64,
    /// Volumetric soil moisture.
    pub soil_moisture: f64,
    /// Hours of direct sunlight.
    pub sunlight_exposure: f64,
    /// Water-usage efficiency index.
    pub water_usage_efficiency: f64,
    /// Nitrogen level.
    #[serde(rename = "N")]
    pub nitrogen: f64,
    /// Phosphorus level.
    #[serde(rename = "P")]
    pub phosphorus: f64,
    /// Potassium level.
    #[serde(rename = "K")]
    pub potassium: f64,
    /// Soil type code.
    pub soil_type: f64,
    /// Wind speed.
    pub wind_speed: f64,
    /// CO2 concentration (ppm).
    pub co2_concentration: f64,
    /// Planting density.
    pub crop_density: f64,
    /// Pest pressure index.
    pub pest_pressure: f64,
    /// Proximity to urban areas.
    pub urban_area_proximity: f64,
    /// Frost risk index.
    pub frost_risk: f64,
}

// ---------------------------------------------------------------------------
// Daily entry
// ---------------------------------------------------------------------------

/// A [`ConditionRecord`] paired with the day it was recorded.
///
/// Day numbers are not validated for monotonicity; ordering comes from
/// the position in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyEntry {
    /// Day number within the planting cycle.
    pub day: i64,
    /// Readings recorded on that day.
    pub conditions: ConditionRecord,
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// A full planting cycle for one crop.
///
/// Immutable once loaded. Shared read-only between request handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Dataset {
    /// Crop name, e.g. `"Tomato"`.
    pub crop_name: String,
    /// Planting date as recorded (opaque text).
    pub planting_date: String,
    /// Entries in replay order.
    #[serde(rename = "daily_conditions")]
    pub entries: Vec<DailyEntry>,
}

impl Dataset {
    /// Number of daily entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, if in range.
    pub fn entry(&self, index: usize) -> Option<&DailyEntry> {
        self.entries.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_JSON: &str = r#"{
        "temperature": 21.5, "humidity": 60.0, "ph": 6.5, "rainfall": 3.2,
        "soil_moisture": 0.31, "sunlight_exposure": 8.0,
        "water_usage_efficiency": 1.4, "N": 40.0, "P": 22.0, "K": 35.0,
        "soil_type": 2.0, "wind_speed": 4.1, "co2_concentration": 415.0,
        "crop_density": 12.0, "pest_pressure": 0.2,
        "urban_area_proximity": 5.0, "frost_risk": 0.0
    }"#;

    #[test]
    fn nutrient_fields_use_single_letter_keys() {
        let record: ConditionRecord = serde_json::from_str(RECORD_JSON).unwrap();
        assert!((record.nitrogen - 40.0).abs() < f64::EPSILON);
        assert!((record.potassium - 35.0).abs() < f64::EPSILON);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["N"], 40.0);
        assert_eq!(json["P"], 22.0);
        assert_eq!(json["K"], 35.0);
        assert!(json.get("nitrogen").is_none());
        assert_eq!(json.as_object().unwrap().len(), 17);
    }

    #[test]
    fn missing_field_is_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(RECORD_JSON).unwrap();
        value.as_object_mut().unwrap().remove("frost_risk");
        assert!(serde_json::from_value::<ConditionRecord>(value).is_err());
    }

    #[test]
    fn dataset_reads_daily_conditions_key() {
        let json = format!(
            r#"{{"crop_name":"Tomato","planting_date":"2024-03-01",
                "daily_conditions":[{{"day":1,"conditions":{RECORD_JSON}}}]}}"#
        );
        let dataset: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(dataset.crop_name, "Tomato");
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.entry(0).map(|e| e.day), Some(1));
        assert!(dataset.entry(1).is_none());
    }
}
