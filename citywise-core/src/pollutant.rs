//! Pollutants and pollutant concentration readings
//!
//! A [`PollutantReading`] holds one optional concentration per
//! [`Pollutant`]. Pollutants that were not measured are absent, never zero.
//! Iteration always follows the canonical order of [`Pollutant::ALL`], which
//! is what makes tie-breaking and report ordering deterministic.

use core::fmt;
use core::str::FromStr;

use crate::constants::POLLUTANT_COUNT;
use crate::errors::{CoreError, CoreResult};

/// Pollutants tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pollutant {
    /// Fine particulate matter (≤ 2.5 µm)
    Pm25,
    /// Coarse particulate matter (≤ 10 µm)
    Pm10,
    /// Nitrogen dioxide
    No2,
    /// Sulphur dioxide
    So2,
    /// Carbon monoxide
    Co,
    /// Ozone
    O3,
    /// Aerosol optical depth (dimensionless, satellite only)
    Aod,
}

impl Pollutant {
    /// Every pollutant in canonical order
    pub const ALL: [Pollutant; POLLUTANT_COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No2,
        Pollutant::So2,
        Pollutant::Co,
        Pollutant::O3,
        Pollutant::Aod,
    ];

    /// Slot index in canonical order
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase code, e.g. `"pm25"`
    pub const fn code(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::No2 => "no2",
            Pollutant::So2 => "so2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
            Pollutant::Aod => "aod",
        }
    }

    /// Uppercase code, e.g. `"PM25"`
    pub const fn upper_code(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM25",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
            Pollutant::So2 => "SO2",
            Pollutant::Co => "CO",
            Pollutant::O3 => "O3",
            Pollutant::Aod => "AOD",
        }
    }

    /// Parse a pollutant code, case-insensitively
    ///
    /// Accepts `"pm2.5"` / `"pm2_5"` as aliases for PM2.5.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.code().eq_ignore_ascii_case(code))
            .or_else(|| {
                if code.eq_ignore_ascii_case("pm2.5") || code.eq_ignore_ascii_case("pm2_5") {
                    Some(Pollutant::Pm25)
                } else {
                    None
                }
            })
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Pollutant {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or(CoreError::UnknownPollutant)
    }
}

/// Concentrations keyed by pollutant
///
/// Units are µg/m³ for every pollutant (AOD is dimensionless). Serializes as
/// a map from lowercase pollutant code to concentration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PollutantReading {
    values: [Option<f64>; POLLUTANT_COUNT],
}

impl PollutantReading {
    /// Empty reading
    pub const fn new() -> Self {
        Self { values: [None; POLLUTANT_COUNT] }
    }

    /// Build a reading from `(pollutant, concentration)` pairs
    ///
    /// Later pairs overwrite earlier ones for the same pollutant.
    pub fn from_pairs(pairs: &[(Pollutant, f64)]) -> CoreResult<Self> {
        let mut reading = Self::new();
        for &(pollutant, value) in pairs {
            reading.set(pollutant, value)?;
        }
        Ok(reading)
    }

    /// Set a concentration, enforcing finite and non-negative values
    pub fn set(&mut self, pollutant: Pollutant, value: f64) -> CoreResult<()> {
        if !value.is_finite() {
            return Err(CoreError::InvalidValue { pollutant: pollutant.code() });
        }
        if value < 0.0 {
            return Err(CoreError::NegativeConcentration {
                pollutant: pollutant.code(),
                value,
            });
        }
        self.values[pollutant.index()] = Some(value);
        Ok(())
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, pollutant: Pollutant, value: f64) -> CoreResult<Self> {
        self.set(pollutant, value)?;
        Ok(self)
    }

    /// Remove a pollutant, returning its previous value
    pub fn remove(&mut self, pollutant: Pollutant) -> Option<f64> {
        self.values[pollutant.index()].take()
    }

    /// Concentration of a pollutant, if measured
    pub fn get(&self, pollutant: Pollutant) -> Option<f64> {
        self.values[pollutant.index()]
    }

    /// Concentration of a pollutant, or 0 when not measured
    pub fn get_or_zero(&self, pollutant: Pollutant) -> f64 {
        self.get(pollutant).unwrap_or(0.0)
    }

    /// Whether the pollutant was measured
    pub fn contains(&self, pollutant: Pollutant) -> bool {
        self.values[pollutant.index()].is_some()
    }

    /// Number of measured pollutants
    pub fn len(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// True when nothing was measured
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Measured pollutants in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL
            .iter()
            .filter_map(move |&p| self.get(p).map(|v| (p, v)))
    }

    /// Copy of the reading with every concentration multiplied by `factor`
    ///
    /// Negative or non-finite factors are treated as zero so the result
    /// keeps the reading invariants.
    pub fn scaled(&self, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 { factor } else { 0.0 };
        let mut values = self.values;
        for value in values.iter_mut().flatten() {
            *value *= factor;
        }
        Self { values }
    }

    /// Copy of the reading with one pollutant replaced through `f`
    pub(crate) fn map_value(&self, pollutant: Pollutant, f: impl FnOnce(f64) -> f64) -> Self {
        let mut values = self.values;
        if let Some(value) = values[pollutant.index()].as_mut() {
            *value = f(*value);
        }
        Self { values }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PollutantReading {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (pollutant, value) in self.iter() {
            map.serialize_entry(pollutant.code(), &value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PollutantReading {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReadingVisitor;

        impl<'de> serde::de::Visitor<'de> for ReadingVisitor {
            type Value = PollutantReading;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of pollutant codes to non-negative concentrations")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut reading = PollutantReading::new();
                while let Some((pollutant, value)) = map.next_entry::<Pollutant, f64>()? {
                    reading.set(pollutant, value).map_err(serde::de::Error::custom)?;
                }
                Ok(reading)
            }
        }

        deserializer.deserialize_map(ReadingVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for p in Pollutant::ALL {
            assert_eq!(Pollutant::from_code(p.code()), Some(p));
            assert_eq!(Pollutant::from_code(p.upper_code()), Some(p));
        }
        assert_eq!(Pollutant::from_code("PM2.5"), Some(Pollutant::Pm25));
        assert_eq!(Pollutant::from_code(" no2 "), Some(Pollutant::No2));
        assert_eq!("benzene".parse::<Pollutant>(), Err(CoreError::UnknownPollutant));
    }

    #[test]
    fn rejects_negative_and_nan() {
        let mut reading = PollutantReading::new();
        assert_eq!(
            reading.set(Pollutant::Pm25, -1.0),
            Err(CoreError::NegativeConcentration { pollutant: "pm25", value: -1.0 })
        );
        assert_eq!(
            reading.set(Pollutant::O3, f64::NAN),
            Err(CoreError::InvalidValue { pollutant: "o3" })
        );
        assert!(reading.is_empty());
    }

    #[test]
    fn missing_is_not_zero() {
        let reading = PollutantReading::from_pairs(&[(Pollutant::Pm25, 0.0)]).unwrap();
        assert_eq!(reading.get(Pollutant::Pm25), Some(0.0));
        assert_eq!(reading.get(Pollutant::Pm10), None);
        assert_eq!(reading.get_or_zero(Pollutant::Pm10), 0.0);
        assert_eq!(reading.len(), 1);
    }

    #[test]
    fn iterates_in_canonical_order() {
        let reading = PollutantReading::new()
            .with(Pollutant::O3, 40.0).unwrap()
            .with(Pollutant::Pm25, 12.0).unwrap()
            .with(Pollutant::No2, 18.0).unwrap();

        let order: Vec<Pollutant> = reading.iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![Pollutant::Pm25, Pollutant::No2, Pollutant::O3]);
    }

    #[test]
    fn scaling_keeps_absent_pollutants_absent() {
        let reading = PollutantReading::from_pairs(&[
            (Pollutant::Pm25, 10.0),
            (Pollutant::Co, 400.0),
        ]).unwrap();

        let scaled = reading.scaled(0.5);
        assert_eq!(scaled.get(Pollutant::Pm25), Some(5.0));
        assert_eq!(scaled.get(Pollutant::Co), Some(200.0));
        assert_eq!(scaled.get(Pollutant::No2), None);

        let zeroed = reading.scaled(-2.0);
        assert_eq!(zeroed.get(Pollutant::Pm25), Some(0.0));
    }
}
