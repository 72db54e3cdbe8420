use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Luggage declared on a booking. Special items (wheelchairs, bicycles,
/// pets and the like) are counted per kind; only the totals matter here.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LuggageCount {
    #[serde(default)]
    pub regular: RegularLuggage,
    #[serde(default)]
    pub special: BTreeMap<String, u32>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct RegularLuggage {
    #[serde(default)]
    pub large: u32,
    #[serde(default)]
    pub small: u32,
    #[serde(default)]
    pub hand_luggage: u32,
}

impl LuggageCount {
    pub fn special_total(&self) -> u32 {
        self.special.values().sum()
    }
}
