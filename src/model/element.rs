use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chemical element as listed in the periodic table.
///
/// Elements are immutable reference data. Compounds hold copies of the
/// rows they were built from and never write back into the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u8,
    pub symbol: String,
    pub name: String,
    /// Standard atomic weight in g/mol.
    pub atomic_weight: Decimal,
    /// Pauling electronegativity, `0.0` where undefined.
    #[serde(default)]
    pub electronegativity: f64,
    /// Van der Waals radius in picometers.
    #[serde(default)]
    pub van_der_waals_radius: f64,
    pub group: u8,
    pub period: u8,
}

impl Element {
    pub fn new(
        atomic_number: u8,
        symbol: impl Into<String>,
        name: impl Into<String>,
        atomic_weight: Decimal,
        group: u8,
        period: u8,
    ) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            atomic_weight,
            electronegativity: 0.0,
            van_der_waals_radius: 0.0,
            group,
            period,
        }
    }

    pub fn with_electronegativity(mut self, electronegativity: f64) -> Self {
        self.electronegativity = electronegativity;
        self
    }

    pub fn with_van_der_waals_radius(mut self, radius: f64) -> Self {
        self.van_der_waals_radius = radius;
        self
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

/// Coarse chemical family of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Hydrogen sits outside every family.
    None,
    Carbon,
    Pnictogens,
    Chalcogens,
    Halogens,
    Metalloid,
    AlkaliMetals,
    AlkalineEarthMetals,
    NobleGases,
    Metals,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::None => write!(f, "None"),
            Classification::Carbon => write!(f, "Carbon"),
            Classification::Pnictogens => write!(f, "Pnictogens"),
            Classification::Chalcogens => write!(f, "Chalcogens"),
            Classification::Halogens => write!(f, "Halogens"),
            Classification::Metalloid => write!(f, "Metalloid"),
            Classification::AlkaliMetals => write!(f, "Alkali Metals"),
            Classification::AlkalineEarthMetals => write!(f, "Alkaline Earth Metals"),
            Classification::NobleGases => write!(f, "Noble Gases"),
            Classification::Metals => write!(f, "Metals"),
        }
    }
}
