//! Error types for chemistry calculations.
//!
//! This module defines the error type used throughout the forge module.
//! Errors are grouped by the calculation that raises them: formula parsing,
//! molar mass and mole derivation, unit conversion, element classification,
//! significant-figure handling, and reference-data loading. Arithmetic that
//! would exceed the range of [`Decimal`] is reported as
//! [`Error::Overflow`] rather than panicking.

use crate::model::table::InvalidTableError;
use crate::model::units::{ParsePrefixError, ParseUnitError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during a calculation.
///
/// Every variant is a deterministic input-validation failure. A failing call
/// leaves any state it would have written (for example a cached molar mass)
/// untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// An empty compound symbol was passed to the formula parser.
    #[error("no compound symbol was provided")]
    EmptyFormula,

    /// A formula token names a symbol that is not in the periodic table.
    #[error("element '{0}' not found in the periodic table")]
    UnknownElement(String),

    /// A formula subscript is too large to be represented.
    #[error("subscript '{count}' for element '{symbol}' is out of range")]
    InvalidCount {
        /// Element symbol the subscript belongs to.
        symbol: String,
        /// The subscript text as written.
        count: String,
    },

    /// Molar mass was requested for a compound without elements.
    #[error("compound has no elements to compute a molar mass from")]
    NoElements,

    /// Moles were requested from a mass while the molar mass is zero.
    #[error("molar mass is zero, moles cannot be derived from mass")]
    ZeroMolarMass,

    /// Moles were requested from a volume with a non-positive molarity.
    #[error("molarity must be a nonzero, positive value, got {0}")]
    InvalidMolarity(Decimal),

    /// A unit or prefix tag was not recognized, or no value was supplied.
    ///
    /// A quantity whose value is exactly zero is treated as "no value
    /// supplied" and reported through this variant.
    #[error("unrecognized or missing unit quantity: {0}")]
    UnknownUnit(String),

    /// An element did not match any classification.
    #[error("element '{symbol}' (group {group}) has no known classification")]
    UnknownClassification {
        /// Symbol of the element.
        symbol: String,
        /// Group number of the element.
        group: u8,
    },

    /// Significant-figure rounding was requested with fewer than one figure.
    #[error("significant figures must be greater than 0, got {0}")]
    InvalidSigFigs(i32),

    /// No numeric substring was found in the input.
    #[error("'{0}' is not in a recognized numeric format")]
    MalformedNumber(String),

    /// An empty list was passed where at least one number is required.
    #[error("no numbers were provided")]
    EmptyInput,

    /// A calculation produced a value too large to represent.
    #[error("result out of range while {0}")]
    Overflow(&'static str),

    /// A compound reference quantity needed by the calculation is absent.
    #[error("compound has no reference {0}")]
    MissingReference(&'static str),

    /// Failed to parse periodic table TOML.
    #[error("failed to parse periodic table data: {0}")]
    TableParse(#[from] toml::de::Error),

    /// Periodic table data is internally inconsistent.
    #[error("invalid periodic table data: {0}")]
    InvalidTable(#[from] InvalidTableError),
}

impl From<ParseUnitError> for Error {
    fn from(e: ParseUnitError) -> Self {
        Error::UnknownUnit(e.to_string())
    }
}

impl From<ParsePrefixError> for Error {
    fn from(e: ParsePrefixError) -> Self {
        Error::UnknownUnit(e.to_string())
    }
}

impl Error {
    /// Creates an [`InvalidCount`](Error::InvalidCount) error.
    pub fn invalid_count(symbol: &str, count: impl Into<String>) -> Self {
        Self::InvalidCount {
            symbol: symbol.to_string(),
            count: count.into(),
        }
    }

    /// Creates an [`UnknownClassification`](Error::UnknownClassification) error.
    pub fn unknown_classification(symbol: &str, group: u8) -> Self {
        Self::UnknownClassification {
            symbol: symbol.to_string(),
            group,
        }
    }
}
