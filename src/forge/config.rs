//! Options for building mass measurements.
//!
//! [`MassOptions`] selects the unit and metric prefix a raw value is
//! expressed in. Unset fields fall back to grams without a prefix.

use crate::model::quantity::Mass;
use crate::model::units::{MassUnit, MetricPrefix};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Unit and prefix selection for a mass value.
///
/// # Examples
///
/// ```
/// use mole_forge::{MassOptions, MassUnit, MetricPrefix};
///
/// // Grams, no prefix
/// let default = MassOptions::default();
/// assert_eq!(default.unit, MassUnit::Gram);
///
/// // Kilograms
/// let kilo = MassOptions {
///     prefix: MetricPrefix::Kilo,
///     ..Default::default()
/// };
/// assert_eq!(kilo.unit, MassUnit::Gram);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MassOptions {
    /// Unit the value is expressed in.
    #[serde(default)]
    pub unit: MassUnit,

    /// Metric prefix applied to gram values.
    #[serde(default)]
    pub prefix: MetricPrefix,
}

impl MassOptions {
    pub fn new(unit: MassUnit, prefix: MetricPrefix) -> Self {
        Self { unit, prefix }
    }

    /// Parses unit and prefix tags such as `"gram"` and `"kilo"`.
    pub fn from_tags(unit: &str, prefix: &str) -> Result<Self, super::Error> {
        Ok(Self {
            unit: unit.parse()?,
            prefix: prefix.parse()?,
        })
    }

    pub fn mass(&self, value: Decimal) -> Mass {
        Mass::new(value, self.unit, self.prefix)
    }
}

impl Mass {
    pub fn with_options(value: Decimal, options: MassOptions) -> Self {
        options.mass(value)
    }
}
