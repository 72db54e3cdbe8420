use serde::{Deserialize, Serialize};

/// A pickup or drop-off point as entered by the passenger: the raw address
/// line plus whatever structured fragments upstream address parsing managed
/// to extract.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stop {
    pub address: String,
    #[serde(default)]
    pub exact: Option<AddressDetail>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AddressDetail {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Stop {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            exact: None,
        }
    }

    pub fn with_detail(address: impl Into<String>, exact: AddressDetail) -> Self {
        Self {
            address: address.into(),
            exact: Some(exact),
        }
    }
}
