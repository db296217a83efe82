use super::element::Element;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate {field} '{value}' in periodic table data")]
pub struct InvalidTableError {
    field: &'static str,
    value: String,
}

impl InvalidTableError {
    /// The column holding the duplicate, `"symbol"` or `"atomic number"`.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The duplicated value as written in the data.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Read-only collection of elements, indexed by symbol.
///
/// Rows keep the order they were supplied in. Symbol lookup is
/// case-sensitive: `"Na"` is sodium, `"NA"` is not found.
#[derive(Debug, Clone, Default)]
pub struct PeriodicTable {
    elements: Vec<Element>,
    by_symbol: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TableData {
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl PeriodicTable {
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, InvalidTableError> {
        let mut by_symbol = HashMap::with_capacity(elements.len());
        let mut numbers = HashMap::with_capacity(elements.len());

        for (idx, element) in elements.iter().enumerate() {
            if by_symbol.insert(element.symbol.clone(), idx).is_some() {
                return Err(InvalidTableError {
                    field: "symbol",
                    value: element.symbol.clone(),
                });
            }
            if numbers.insert(element.atomic_number, idx).is_some() {
                return Err(InvalidTableError {
                    field: "atomic number",
                    value: element.atomic_number.to_string(),
                });
            }
        }

        Ok(Self {
            elements,
            by_symbol,
        })
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).map(|&idx| &self.elements[idx])
    }

    pub fn find_by_atomic_number(&self, atomic_number: u8) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.atomic_number == atomic_number)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a PeriodicTable {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
