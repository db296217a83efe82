use super::element::Element;
use super::quantity::{Mass, Volume};
use rust_decimal::Decimal;
use std::fmt;

/// An element paired with a mole count.
///
/// Inside a [`Compound`] the count is the stoichiometric subscript. After
/// [`compute_moles`](ElementMoles::compute_moles) it is the mole yield of
/// the element for a given mass.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMoles {
    pub element: Element,
    pub moles: Decimal,
}

impl ElementMoles {
    pub fn new(element: Element, moles: Decimal) -> Self {
        Self { element, moles }
    }

    #[inline]
    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }
}

impl fmt::Display for ElementMoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.element.symbol, self.moles)
    }
}

/// Orders element counts by symbol so results compare deterministically.
pub fn sort_by_symbol(elements: &mut [ElementMoles]) {
    elements.sort_by(|a, b| a.element.symbol.cmp(&b.element.symbol));
}

/// A chemical compound and the results derived from it.
///
/// `molar_mass` is zero until computed and stays cached until
/// [`invalidate_molar_mass`](Compound::invalidate_molar_mass) or an explicit
/// recomputation. `moles` holds the result of the latest mole calculation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    pub symbol: String,
    pub elements: Vec<ElementMoles>,
    pub mass: Option<Mass>,
    pub volume: Option<Volume>,
    pub(crate) molar_mass: Decimal,
    pub(crate) moles: Decimal,
}

impl Compound {
    pub fn new(symbol: impl Into<String>, elements: Vec<ElementMoles>) -> Self {
        Self {
            symbol: symbol.into(),
            elements,
            ..Default::default()
        }
    }

    pub fn with_mass(mut self, mass: Mass) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn with_volume(mut self, volume: Volume) -> Self {
        self.volume = Some(volume);
        self
    }

    /// Cached molar mass in g/mol, zero if not yet computed.
    #[inline]
    pub fn molar_mass(&self) -> Decimal {
        self.molar_mass
    }

    /// Moles set by the most recent mole calculation.
    #[inline]
    pub fn moles(&self) -> Decimal {
        self.moles
    }

    pub fn invalidate_molar_mass(&mut self) {
        self.molar_mass = Decimal::ZERO;
    }

    pub fn sort_elements(&mut self) {
        sort_by_symbol(&mut self.elements);
    }

    pub fn element(&self, symbol: &str) -> Option<&ElementMoles> {
        self.elements.iter().find(|em| em.element.symbol == symbol)
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
