//! Measurement units for vital-sign readings.
//!
//! Each metric displays its readings with a fixed unit suffix; values are
//! rendered without decimals to match the chart's label precision.

/// Display unit for a vital-sign series
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VitalUnit {
    /// Blood glucose concentration
    MilligramsPerDeciliter,
    /// Blood pressure
    MillimetersOfMercury,
    /// Body weight
    Pounds,
}

impl VitalUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            VitalUnit::MilligramsPerDeciliter => "mg/dL",
            VitalUnit::MillimetersOfMercury => "mmHg",
            VitalUnit::Pounds => "lbs",
        }
    }

    /// Format a reading with the unit suffix, e.g. `95 mg/dL`
    pub fn format(&self, value: f64) -> String {
        format!("{:.0} {}", value, self.symbol())
    }

    /// Format a paired reading with the unit suffix, e.g. `120/80 mmHg`
    pub fn format_pair(&self, upper: f64, lower: f64) -> String {
        format!("{:.0}/{:.0} {}", upper, lower, self.symbol())
    }
}
