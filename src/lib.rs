//! A pure Rust library for everyday stoichiometry: molar masses, mole counts,
//! unit normalization, and significant figures, computed with exact decimal
//! arithmetic.
//!
//! # Features
//!
//! - **Periodic table** — All 118 elements with atomic weights, electronegativity,
//!   Van der Waals radii, group and period, plus a chemical family classification
//! - **Formula parsing** — Condensed formulas such as `H2O` or `C6H12O6` into
//!   element counts
//! - **Mole engine** — Molar mass, moles from mass, moles from volume and molarity
//! - **Units** — Grams, ounces, and pounds with metric prefixes; liters with
//!   metric prefixes
//! - **Significant figures** — Round-half-to-even rounding and counting from
//!   written numbers
//!
//! # Quick Start
//!
//! ```
//! use mole_forge::{Compound, Mass, MassUnit, MetricPrefix, default_table};
//! use mole_forge::ForgeError;
//! use rust_decimal::Decimal;
//!
//! // Parse glucose against the built-in periodic table
//! let mut glucose = Compound::parse("C6H12O6", default_table())?;
//! assert_eq!(glucose.elements.len(), 3);
//!
//! // C: 6 × 12.011, H: 12 × 1.008, O: 6 × 15.999
//! let molar_mass = glucose.compute_molar_mass()?;
//! assert_eq!(molar_mass, Decimal::new(180_156, 3));
//!
//! // 18.0156 decagrams is one mole
//! let mass = Mass::new(Decimal::new(180_156, 4), MassUnit::Gram, MetricPrefix::Deca);
//! assert_eq!(glucose.moles_from_mass(&mass)?, Decimal::ONE);
//! # Ok::<(), ForgeError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`parse_formula`] — Formula parsing
//! - [`round_to_significant_figures`], [`count_significant_figures`],
//!   [`lowest_significant_figures`] — Significant figures
//! - [`moles_from_volume`] — Moles in solution
//! - [`default_table`], [`load_table`] — Reference data
//!
//! # Data Types
//!
//! - [`Element`] — A periodic table row
//! - [`Classification`] — Chemical family of an element
//! - [`PeriodicTable`] — Elements indexed by symbol
//! - [`Compound`] — Formula, composition, cached molar mass, and mole count
//! - [`ElementMoles`] — An element with a mole count
//! - [`Mass`], [`Volume`] — Measurements, normalized through [`Quantity`]
//! - [`MassUnit`], [`MetricPrefix`] — Unit and scale selections
//! - [`MassOptions`] — Unit and prefix options for building masses

mod forge;
mod model;

pub use model::compound::{Compound, ElementMoles, sort_by_symbol};
pub use model::element::{Classification, Element};
pub use model::quantity::{Mass, Volume};
pub use model::table::{InvalidTableError, PeriodicTable};
pub use model::units::{MassUnit, MetricPrefix, ParsePrefixError, ParseUnitError};

pub use forge::{
    MassOptions, Quantity, convert_mass_to_standard, convert_volume_to_standard,
    count_significant_figures, default_table, load_table, lowest_significant_figures, molar_mass,
    moles_from_volume, parse_formula, round_to_significant_figures,
};

pub use forge::Error as ForgeError;
