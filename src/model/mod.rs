//! Core data structures for chemistry calculations.
//!
//! This module provides the foundational types that flow through `mole-forge`:
//!
//! - [`element`] – Elements and their chemical classification labels.
//! - [`table`] – The periodic table, indexed by symbol.
//! - [`units`] – Mass units and metric prefixes with their scale factors.
//! - [`quantity`] – Mass and volume measurements.
//! - [`compound`] – Compounds, their element composition, and cached results.
//!
//! The data model carries no calculation logic that can fail; conversions,
//! parsing, and mole derivation live in [`crate::forge`].

pub mod compound;
pub mod element;
pub mod quantity;
pub mod table;
pub mod units;
