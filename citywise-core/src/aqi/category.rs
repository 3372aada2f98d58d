//! EPA AQI categories
//!
//! Six-level US EPA scale. Labels are emitted verbatim to dashboard
//! consumers, so they must not change.

use core::fmt;

/// AQI category on the six-level US EPA scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AqiCategory {
    /// 0-50
    Good,
    /// 51-100
    Moderate,
    /// 101-150
    UnhealthySensitive,
    /// 151-200
    Unhealthy,
    /// 201-300
    VeryUnhealthy,
    /// 301-500
    Hazardous,
}

impl AqiCategory {
    /// Every category from best to worst
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthySensitive,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// Category for an AQI value
    pub const fn from_aqi(aqi: u16) -> Self {
        match aqi {
            0..=50 => AqiCategory::Good,
            51..=100 => AqiCategory::Moderate,
            101..=150 => AqiCategory::UnhealthySensitive,
            151..=200 => AqiCategory::Unhealthy,
            201..=300 => AqiCategory::VeryUnhealthy,
            _ => AqiCategory::Hazardous,
        }
    }

    /// Display label, e.g. `"Unhealthy for Sensitive Groups"`
    pub const fn label(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
        }
    }

    /// Parse a display label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }

    /// Highest AQI value in the category
    pub const fn upper_bound(self) -> u16 {
        match self {
            AqiCategory::Good => 50,
            AqiCategory::Moderate => 100,
            AqiCategory::UnhealthySensitive => 150,
            AqiCategory::Unhealthy => 200,
            AqiCategory::VeryUnhealthy => 300,
            AqiCategory::Hazardous => 500,
        }
    }

    /// EPA color name used for map markers
    pub const fn color(self) -> &'static str {
        match self {
            AqiCategory::Good => "green",
            AqiCategory::Moderate => "yellow",
            AqiCategory::UnhealthySensitive => "orange",
            AqiCategory::Unhealthy => "red",
            AqiCategory::VeryUnhealthy => "purple",
            AqiCategory::Hazardous => "maroon",
        }
    }

    /// Short health advisory for the category
    pub const fn advisory(self) -> &'static str {
        match self {
            AqiCategory::Good => "Air quality is satisfactory",
            AqiCategory::Moderate => "Unusually sensitive people should limit prolonged outdoor exertion",
            AqiCategory::UnhealthySensitive => "Sensitive groups should reduce prolonged outdoor exertion",
            AqiCategory::Unhealthy => "Everyone should reduce prolonged outdoor exertion",
            AqiCategory::VeryUnhealthy => "Everyone should avoid prolonged outdoor exertion",
            AqiCategory::Hazardous => "Everyone should avoid all outdoor activity",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AqiCategory {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AqiCategory {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelVisitor;

        impl<'de> serde::de::Visitor<'de> for LabelVisitor {
            type Value = AqiCategory;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an EPA AQI category label")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                AqiCategory::from_label(v)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(LabelVisitor)
    }
}
