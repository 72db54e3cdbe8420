use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::{LuggageCount, VehicleAvailability};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct AvailabilityParams {
    passengers: u32,
    #[serde(default)]
    luggage: LuggageCount,
}

pub async fn availability(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<AvailabilityParams>,
) -> Result<Json<VehicleAvailability>, Error> {
    let availability = api
        .vehicle_availability(params.passengers, params.luggage)
        .await?;

    Ok(availability.into())
}
