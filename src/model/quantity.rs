use super::units::{MassUnit, MetricPrefix};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A mass measurement.
///
/// The prefix scales gram values only; ounces and pounds ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mass {
    pub value: Decimal,
    #[serde(default)]
    pub unit: MassUnit,
    #[serde(default)]
    pub prefix: MetricPrefix,
}

impl Mass {
    pub fn new(value: Decimal, unit: MassUnit, prefix: MetricPrefix) -> Self {
        Self {
            value,
            unit,
            prefix,
        }
    }

    pub fn grams(value: Decimal) -> Self {
        Self::new(value, MassUnit::Gram, MetricPrefix::None)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.unit.is_metric(), self.prefix) {
            (true, MetricPrefix::None) | (false, _) => write!(f, "{} {}", self.value, self.unit),
            (true, prefix) => write!(f, "{} {}{}", self.value, prefix, self.unit),
        }
    }
}

/// A volume measurement in (prefixed) liters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Volume {
    pub value: Decimal,
    #[serde(default)]
    pub prefix: MetricPrefix,
}

impl Volume {
    pub fn new(value: Decimal, prefix: MetricPrefix) -> Self {
        Self { value, prefix }
    }

    pub fn liters(value: Decimal) -> Self {
        Self::new(value, MetricPrefix::None)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            MetricPrefix::None => write!(f, "{} liter", self.value),
            prefix => write!(f, "{} {}liter", self.value, prefix),
        }
    }
}
