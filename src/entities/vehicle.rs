use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAvailability {
    pub regular_available: bool,
    pub van_available: bool,
}
