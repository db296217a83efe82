use super::error::Error;
use crate::model::table::{PeriodicTable, TableData};
use std::sync::OnceLock;
use tracing::debug;

const DEFAULT_TABLE_TOML: &str = include_str!("../../resources/periodic_table.toml");

static DEFAULT_TABLE: OnceLock<PeriodicTable> = OnceLock::new();

pub fn load_table(custom_toml: Option<&str>) -> Result<PeriodicTable, Error> {
    match custom_toml {
        Some(toml) => parse_table(toml),
        None => Ok(default_table().clone()),
    }
}

/// The built-in 118-element periodic table, parsed on first use.
pub fn default_table() -> &'static PeriodicTable {
    DEFAULT_TABLE.get_or_init(|| {
        parse_table(DEFAULT_TABLE_TOML)
            .expect("Failed to parse embedded periodic table. This is a library bug.")
    })
}

fn parse_table(toml: &str) -> Result<PeriodicTable, Error> {
    let data: TableData = toml::from_str(toml)?;
    let table = PeriodicTable::from_elements(data.elements)?;
    debug!(elements = table.len(), "loaded periodic table");
    Ok(table)
}

impl PeriodicTable {
    /// Builds a table from TOML with an `[[elements]]` array.
    pub fn from_toml(toml: &str) -> Result<Self, Error> {
        parse_table(toml)
    }
}
