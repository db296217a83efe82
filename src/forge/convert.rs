//! Unit normalization and the shared mole derivation for quantities.
//!
//! Masses normalize to grams and volumes to liters:
//!
//! ```text
//! standard = value × unit_factor × prefix_factor
//! ```
//!
//! A value of exactly zero is treated as "no value supplied" and rejected.
//! Every product and quotient is checked; a result outside the range of
//! [`Decimal`] fails with [`Error::Overflow`].

use super::error::Error;
use crate::model::quantity::{Mass, Volume};
use crate::model::units::MetricPrefix;
use rust_decimal::Decimal;
use tracing::trace;

/// A physical quantity that can be normalized and turned into moles.
pub trait Quantity {
    /// Converts the quantity to its standard unit (grams or liters).
    fn to_standard(&self) -> Result<Decimal, Error>;

    /// Derives moles from the quantity.
    ///
    /// For a mass, `factor` is a molar mass in g/mol. For a volume, it is a
    /// molarity in mol/L.
    fn moles(&self, factor: Decimal) -> Result<Decimal, Error>;
}

impl Quantity for Mass {
    fn to_standard(&self) -> Result<Decimal, Error> {
        if self.value.is_zero() {
            return Err(Error::UnknownUnit("no mass value supplied".to_string()));
        }
        let prefix = if self.unit.is_metric() {
            self.prefix
        } else {
            MetricPrefix::None
        };
        let grams = self
            .value
            .checked_mul(self.unit.factor())
            .and_then(|v| v.checked_mul(prefix.factor()))
            .ok_or(Error::Overflow("converting mass to grams"))?;
        trace!(mass = %self, %grams, "normalized mass");
        Ok(grams)
    }

    fn moles(&self, molar_mass: Decimal) -> Result<Decimal, Error> {
        let grams = self.to_standard()?;
        if molar_mass.is_zero() {
            return Err(Error::ZeroMolarMass);
        }
        grams
            .checked_div(molar_mass)
            .ok_or(Error::Overflow("dividing mass by molar mass"))
    }
}

impl Quantity for Volume {
    fn to_standard(&self) -> Result<Decimal, Error> {
        if self.value.is_zero() {
            return Err(Error::UnknownUnit("no volume value supplied".to_string()));
        }
        let liters = self
            .value
            .checked_mul(self.prefix.factor())
            .ok_or(Error::Overflow("converting volume to liters"))?;
        trace!(volume = %self, %liters, "normalized volume");
        Ok(liters)
    }

    fn moles(&self, molarity: Decimal) -> Result<Decimal, Error> {
        if molarity <= Decimal::ZERO {
            return Err(Error::InvalidMolarity(molarity));
        }
        self.to_standard()?
            .checked_mul(molarity)
            .ok_or(Error::Overflow("multiplying volume by molarity"))
    }
}

/// Converts a mass to grams.
pub fn convert_mass_to_standard(mass: &Mass) -> Result<Decimal, Error> {
    mass.to_standard()
}

/// Converts a volume to liters.
pub fn convert_volume_to_standard(volume: &Volume) -> Result<Decimal, Error> {
    volume.to_standard()
}
