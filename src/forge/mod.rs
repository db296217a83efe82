mod classify;
mod config;
mod convert;
mod error;
mod formula;
mod moles;
mod sigfig;
mod table;

pub use config::MassOptions;
pub use convert::{Quantity, convert_mass_to_standard, convert_volume_to_standard};
pub use error::Error;
pub use formula::parse_formula;
pub use moles::moles_from_volume;
pub use sigfig::{
    count_significant_figures, lowest_significant_figures, round_to_significant_figures,
};
pub use table::{default_table, load_table};

use crate::model::compound::Compound;
use rust_decimal::Decimal;

/// Parses `formula` against the built-in periodic table and computes its
/// molar mass.
pub fn molar_mass(formula: &str) -> Result<Decimal, Error> {
    let mut compound = Compound::parse(formula, default_table())?;
    compound.compute_molar_mass()
}
