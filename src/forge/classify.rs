use super::error::Error;
use crate::model::element::{Classification, Element};

const CHALCOGENS: [u8; 3] = [8, 16, 34];
const HALOGENS: [u8; 4] = [9, 17, 35, 53];
const METALLOIDS: [u8; 8] = [5, 14, 32, 33, 51, 52, 84, 85];

const ALKALI_GROUP: u8 = 1;
const ALKALINE_EARTH_GROUP: u8 = 2;
const NOBLE_GAS_GROUP: u8 = 18;

impl Element {
    /// Classifies the element into a chemical family.
    ///
    /// Specific cases are checked before the group-based ones, so carbon,
    /// the pnictogens, chalcogens, halogens, and metalloids never fall into
    /// the generic metals bucket. The first match wins.
    pub fn classify(&self) -> Result<Classification, Error> {
        let class = match (self.atomic_number, self.group) {
            (1, _) => Classification::None,
            (6, _) => Classification::Carbon,
            (7 | 15, _) => Classification::Pnictogens,
            (z, _) if CHALCOGENS.contains(&z) => Classification::Chalcogens,
            (z, _) if HALOGENS.contains(&z) => Classification::Halogens,
            (z, _) if METALLOIDS.contains(&z) => Classification::Metalloid,
            (_, ALKALI_GROUP) => Classification::AlkaliMetals,
            (_, ALKALINE_EARTH_GROUP) => Classification::AlkalineEarthMetals,
            (_, NOBLE_GAS_GROUP) => Classification::NobleGases,
            (_, group) if group < NOBLE_GAS_GROUP => Classification::Metals,
            (_, group) => return Err(Error::unknown_classification(&self.symbol, group)),
        };
        Ok(class)
    }
}
