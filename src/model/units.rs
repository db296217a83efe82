use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized mass unit: '{0}'")]
pub struct ParseUnitError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized metric prefix: '{0}'")]
pub struct ParsePrefixError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    #[default]
    Gram,
    Ounce,
    Pound,
}

impl MassUnit {
    /// Grams per one of this unit.
    pub fn factor(&self) -> Decimal {
        match self {
            MassUnit::Gram => Decimal::ONE,
            MassUnit::Ounce => Decimal::new(28_349, 3),
            MassUnit::Pound => Decimal::new(453_592, 3),
        }
    }

    #[inline]
    pub fn is_metric(&self) -> bool {
        matches!(self, MassUnit::Gram)
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassUnit::Gram => write!(f, "gram"),
            MassUnit::Ounce => write!(f, "ounce"),
            MassUnit::Pound => write!(f, "pound"),
        }
    }
}

impl FromStr for MassUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gram" | "grams" | "g" => Ok(MassUnit::Gram),
            "ounce" | "ounces" | "oz" => Ok(MassUnit::Ounce),
            "pound" | "pounds" | "lb" => Ok(MassUnit::Pound),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricPrefix {
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    #[default]
    None,
    Deca,
    Hecto,
    Kilo,
}

impl MetricPrefix {
    pub const ALL: [MetricPrefix; 9] = [
        MetricPrefix::Nano,
        MetricPrefix::Micro,
        MetricPrefix::Milli,
        MetricPrefix::Centi,
        MetricPrefix::Deci,
        MetricPrefix::None,
        MetricPrefix::Deca,
        MetricPrefix::Hecto,
        MetricPrefix::Kilo,
    ];

    pub fn factor(&self) -> Decimal {
        match self {
            MetricPrefix::Nano => Decimal::new(1, 9),
            MetricPrefix::Micro => Decimal::new(1, 6),
            MetricPrefix::Milli => Decimal::new(1, 3),
            MetricPrefix::Centi => Decimal::new(1, 2),
            MetricPrefix::Deci => Decimal::new(1, 1),
            MetricPrefix::None => Decimal::ONE,
            MetricPrefix::Deca => Decimal::TEN,
            MetricPrefix::Hecto => Decimal::ONE_HUNDRED,
            MetricPrefix::Kilo => Decimal::ONE_THOUSAND,
        }
    }
}

impl fmt::Display for MetricPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricPrefix::Nano => write!(f, "nano"),
            MetricPrefix::Micro => write!(f, "micro"),
            MetricPrefix::Milli => write!(f, "milli"),
            MetricPrefix::Centi => write!(f, "centi"),
            MetricPrefix::Deci => write!(f, "deci"),
            MetricPrefix::None => write!(f, "none"),
            MetricPrefix::Deca => write!(f, "deca"),
            MetricPrefix::Hecto => write!(f, "hecto"),
            MetricPrefix::Kilo => write!(f, "kilo"),
        }
    }
}

impl FromStr for MetricPrefix {
    type Err = ParsePrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nano" => Ok(MetricPrefix::Nano),
            "micro" => Ok(MetricPrefix::Micro),
            "milli" => Ok(MetricPrefix::Milli),
            "centi" => Ok(MetricPrefix::Centi),
            "deci" => Ok(MetricPrefix::Deci),
            "none" | "" => Ok(MetricPrefix::None),
            "deca" | "deka" => Ok(MetricPrefix::Deca),
            "hecto" => Ok(MetricPrefix::Hecto),
            "kilo" => Ok(MetricPrefix::Kilo),
            _ => Err(ParsePrefixError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn mass_unit_factors() {
        assert_eq!(MassUnit::Gram.factor(), dec!(1));
        assert_eq!(MassUnit::Ounce.factor(), dec!(28.349));
        assert_eq!(MassUnit::Pound.factor(), dec!(453.592));
    }

    #[test]
    fn mass_unit_from_str_accepts_aliases() {
        assert_eq!(MassUnit::from_str("gram").unwrap(), MassUnit::Gram);
        assert_eq!(MassUnit::from_str("Pounds").unwrap(), MassUnit::Pound);
        assert_eq!(MassUnit::from_str("oz").unwrap(), MassUnit::Ounce);
    }

    #[test]
    fn mass_unit_from_str_rejects_unknown() {
        let err = MassUnit::from_str("unknown").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized mass unit: 'unknown'");
    }

    #[test]
    fn prefix_factors_are_powers_of_ten() {
        assert_eq!(MetricPrefix::Kilo.factor(), dec!(1000));
        assert_eq!(MetricPrefix::Hecto.factor(), dec!(100));
        assert_eq!(MetricPrefix::Deca.factor(), dec!(10));
        assert_eq!(MetricPrefix::None.factor(), dec!(1));
        assert_eq!(MetricPrefix::Deci.factor(), dec!(0.1));
        assert_eq!(MetricPrefix::Centi.factor(), dec!(0.01));
        assert_eq!(MetricPrefix::Milli.factor(), dec!(0.001));
        assert_eq!(MetricPrefix::Micro.factor(), dec!(0.000001));
        assert_eq!(MetricPrefix::Nano.factor(), dec!(0.000000001));
    }

    #[test]
    fn prefix_display_round_trips_through_from_str() {
        for prefix in MetricPrefix::ALL {
            assert_eq!(MetricPrefix::from_str(&prefix.to_string()).unwrap(), prefix);
        }
    }

    #[test]
    fn prefix_from_str_rejects_unknown() {
        assert!(MetricPrefix::from_str("mega").is_err());
    }

    #[test]
    fn defaults_are_gram_without_prefix() {
        assert_eq!(MassUnit::default(), MassUnit::Gram);
        assert_eq!(MetricPrefix::default(), MetricPrefix::None);
    }
}
