//! Condensed chemical formula parsing.
//!
//! A formula is read as a run of tokens, each an element symbol (one
//! uppercase letter, optionally one lowercase letter) followed by an optional
//! subscript. A missing subscript counts as one. Repeated symbols are summed,
//! so `"HOH"` and `"H2O"` parse to the same composition.
//!
//! Parenthesized groups, hydrate dots, and charges are not understood.
//! Characters that do not start a token are skipped.

use super::error::Error;
use crate::model::compound::{Compound, ElementMoles};
use crate::model::element::Element;
use crate::model::table::PeriodicTable;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::LazyLock;
use tracing::debug;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Z][a-z]?)(\d*)").expect("formula token pattern must compile")
});

/// Parses a formula into one [`ElementMoles`] entry per distinct symbol.
///
/// Entries appear in the order their symbol first occurs in the formula.
///
/// # Errors
///
/// - [`Error::EmptyFormula`] if `formula` is empty.
/// - [`Error::UnknownElement`] if a token names a symbol missing from `table`.
/// - [`Error::InvalidCount`] if a subscript does not fit in a `u64`.
pub fn parse_formula(formula: &str, table: &PeriodicTable) -> Result<Vec<ElementMoles>, Error> {
    if formula.is_empty() {
        return Err(Error::EmptyFormula);
    }

    let mut counts: Vec<(&Element, u64)> = Vec::new();

    for caps in TOKEN.captures_iter(formula) {
        let symbol = caps.get(1).map_or("", |m| m.as_str());
        let digits = caps.get(2).map_or("", |m| m.as_str());

        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u64>()
                .map_err(|_| Error::invalid_count(symbol, digits))?
        };

        let element = table
            .find_by_symbol(symbol)
            .ok_or_else(|| Error::UnknownElement(symbol.to_string()))?;

        match counts.iter_mut().find(|entry| entry.0.symbol == symbol) {
            Some(entry) => {
                entry.1 = entry
                    .1
                    .checked_add(count)
                    .ok_or_else(|| Error::invalid_count(symbol, digits))?;
            }
            None => counts.push((element, count)),
        }
    }

    let elements = counts
        .into_iter()
        .map(|(element, count)| ElementMoles::new(element.clone(), Decimal::from(count)))
        .collect::<Vec<_>>();

    debug!(formula, distinct = elements.len(), "parsed formula");
    Ok(elements)
}

impl Compound {
    /// Builds a compound from a condensed formula such as `"C6H12O6"`.
    pub fn parse(formula: &str, table: &PeriodicTable) -> Result<Self, Error> {
        let elements = parse_formula(formula, table)?;
        Ok(Compound::new(formula, elements))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::compound::sort_by_symbol;
    use rust_decimal_macros::dec;

    fn test_table() -> PeriodicTable {
        PeriodicTable::from_elements(vec![
            Element::new(1, "H", "Hydrogen", dec!(1.008), 1, 1),
            Element::new(6, "C", "Carbon", dec!(12.011), 14, 2),
            Element::new(8, "O", "Oxygen", dec!(15.999), 16, 2),
            Element::new(11, "Na", "Sodium", dec!(22.990), 1, 3),
            Element::new(17, "Cl", "Chlorine", dec!(35.45), 17, 3),
        ])
        .unwrap()
    }

    fn counts(formula: &str) -> Vec<(String, Decimal)> {
        let mut parsed = parse_formula(formula, &test_table()).unwrap();
        sort_by_symbol(&mut parsed);
        parsed
            .into_iter()
            .map(|em| (em.element.symbol, em.moles))
            .collect()
    }

    fn pairs(expected: &[(&str, Decimal)]) -> Vec<(String, Decimal)> {
        expected.iter().map(|(s, n)| (s.to_string(), *n)).collect()
    }

    #[test]
    fn parses_water() {
        assert_eq!(counts("H2O"), pairs(&[("H", dec!(2)), ("O", dec!(1))]));
    }

    #[test]
    fn parses_two_letter_symbols() {
        assert_eq!(counts("NaCl"), pairs(&[("Cl", dec!(1)), ("Na", dec!(1))]));
    }

    #[test]
    fn parses_glucose() {
        assert_eq!(
            counts("C6H12O6"),
            pairs(&[("C", dec!(6)), ("H", dec!(12)), ("O", dec!(6))])
        );
    }

    #[test]
    fn sums_repeated_symbols() {
        assert_eq!(counts("HOH"), pairs(&[("H", dec!(2)), ("O", dec!(1))]));
        assert_eq!(counts("HHO"), pairs(&[("H", dec!(2)), ("O", dec!(1))]));
        assert_eq!(
            counts("CH3CH2OH"),
            pairs(&[("C", dec!(2)), ("H", dec!(6)), ("O", dec!(1))])
        );
    }

    #[test]
    fn keeps_first_appearance_order() {
        let parsed = parse_formula("OH2", &test_table()).unwrap();
        let symbols: Vec<&str> = parsed.iter().map(|em| em.symbol()).collect();
        assert_eq!(symbols, ["O", "H"]);
    }

    #[test]
    fn entries_carry_table_rows() {
        let parsed = parse_formula("NaCl", &test_table()).unwrap();
        assert_eq!(parsed[0].element.name, "Sodium");
        assert_eq!(parsed[0].element.atomic_weight, dec!(22.990));
    }

    #[test]
    fn every_token_yields_an_entry() {
        let parsed = parse_formula("ClNaHOCH", &test_table()).unwrap();
        let symbols: Vec<&str> = parsed.iter().map(|em| em.symbol()).collect();
        assert_eq!(symbols, ["Cl", "Na", "H", "O", "C"]);
        let total: Decimal = parsed.iter().map(|em| em.moles).sum();
        assert_eq!(total, dec!(6));
        assert_eq!(parsed[2].element.atomic_weight, dec!(1.008));
        assert_eq!(parsed[2].moles, dec!(2));
    }

    #[test]
    fn empty_formula_is_rejected() {
        assert!(matches!(
            parse_formula("", &test_table()),
            Err(Error::EmptyFormula)
        ));
    }

    #[test]
    fn unknown_symbols_are_named() {
        let err = parse_formula("Xx2", &test_table()).unwrap_err();
        assert!(matches!(err, Error::UnknownElement(ref s) if s == "Xx"));

        let err = parse_formula("H2O1X", &test_table()).unwrap_err();
        assert!(matches!(err, Error::UnknownElement(ref s) if s == "X"));

        assert!(matches!(
            parse_formula("XYZ", &test_table()),
            Err(Error::UnknownElement(_))
        ));
    }

    #[test]
    fn oversized_subscript_is_rejected() {
        let err = parse_formula("H99999999999999999999999", &test_table()).unwrap_err();
        assert!(matches!(err, Error::InvalidCount { ref symbol, .. } if symbol == "H"));
    }

    #[test]
    fn compound_parse_keeps_formula_as_symbol() {
        let water = Compound::parse("H2O", &test_table()).unwrap();
        assert_eq!(water.symbol, "H2O");
        assert_eq!(water.elements.len(), 2);
        assert_eq!(water.molar_mass(), Decimal::ZERO);
    }
}
