//! Molar mass and mole derivation.
//!
//! - Molar mass: `Σ atomic_weight × count` over a compound's elements.
//! - Moles from mass: `grams / molar_mass`.
//! - Moles from volume: `liters × molarity`.
//!
//! A failed calculation never overwrites a compound's cached molar mass or
//! its previous mole count.

use super::convert::Quantity;
use super::error::Error;
use crate::model::compound::{Compound, ElementMoles};
use crate::model::quantity::{Mass, Volume};
use rust_decimal::Decimal;
use tracing::debug;

impl Compound {
    /// Computes the molar mass from scratch and caches it.
    pub fn compute_molar_mass(&mut self) -> Result<Decimal, Error> {
        if self.elements.is_empty() {
            return Err(Error::NoElements);
        }
        let molar_mass = self
            .elements
            .iter()
            .try_fold(Decimal::ZERO, |total, em| {
                em.element
                    .atomic_weight
                    .checked_mul(em.moles)
                    .and_then(|weight| total.checked_add(weight))
            })
            .ok_or(Error::Overflow("summing atomic weights"))?;
        self.molar_mass = molar_mass;
        debug!(compound = %self.symbol, %molar_mass, "computed molar mass");
        Ok(molar_mass)
    }

    fn ensure_molar_mass(&mut self) -> Result<Decimal, Error> {
        if self.molar_mass.is_zero() {
            self.compute_molar_mass()
        } else {
            Ok(self.molar_mass)
        }
    }

    /// Sets and returns the moles contained in `mass` of this compound.
    ///
    /// The molar mass is computed on demand if it has not been yet.
    pub fn moles_from_mass(&mut self, mass: &Mass) -> Result<Decimal, Error> {
        let molar_mass = self.ensure_molar_mass()?;
        let moles = mass.moles(molar_mass)?;
        self.moles = moles;
        debug!(compound = %self.symbol, %mass, %moles, "derived moles from mass");
        Ok(moles)
    }

    /// Sets and returns the moles contained in an already-normalized gram value.
    pub fn moles_from_grams(&mut self, grams: Decimal) -> Result<Decimal, Error> {
        if grams.is_zero() {
            return Err(Error::UnknownUnit("no mass value supplied".to_string()));
        }
        let molar_mass = self.ensure_molar_mass()?;
        if molar_mass.is_zero() {
            return Err(Error::ZeroMolarMass);
        }
        let moles = grams
            .checked_div(molar_mass)
            .ok_or(Error::Overflow("dividing mass by molar mass"))?;
        self.moles = moles;
        debug!(compound = %self.symbol, %grams, %moles, "derived moles from grams");
        Ok(moles)
    }

    /// Derives moles from the compound's own reference mass.
    pub fn moles_from_reference_mass(&mut self) -> Result<Decimal, Error> {
        let mass = self.mass.ok_or(Error::MissingReference("mass"))?;
        self.moles_from_mass(&mass)
    }

    /// Sets and returns the moles dissolved in the compound's reference volume.
    pub fn moles_in_solution(&mut self, molarity: Decimal) -> Result<Decimal, Error> {
        let volume = self.volume.ok_or(Error::MissingReference("volume"))?;
        let moles = volume.moles(molarity)?;
        self.moles = moles;
        debug!(
            compound = %self.symbol,
            %volume,
            %molarity,
            %moles,
            "derived moles in solution"
        );
        Ok(moles)
    }
}

impl ElementMoles {
    /// Replaces the count with the moles of this element in `mass`.
    pub fn compute_moles(&mut self, mass: &Mass) -> Result<Decimal, Error> {
        let moles = mass.moles(self.element.atomic_weight)?;
        self.moles = moles;
        Ok(moles)
    }
}

/// Moles of solute in `volume` of a solution with the given molarity.
pub fn moles_from_volume(volume: &Volume, molarity: Decimal) -> Result<Decimal, Error> {
    let moles = volume.moles(molarity)?;
    debug!(%volume, %molarity, %moles, "derived moles from volume");
    Ok(moles)
}
