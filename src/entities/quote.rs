use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pricing::PriceResult;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub regular: f64,
    pub van: f64,
    pub is_fixed_price: bool,
}

impl Quote {
    pub fn new(price: PriceResult) -> Self {
        Self {
            token: Uuid::new_v4(),
            regular: price.regular,
            van: price.van,
            is_fixed_price: price.is_fixed_price,
        }
    }
}
