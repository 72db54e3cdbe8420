use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{LuggageCount, Quote, Stop, VehicleAvailability};
use crate::error::Error;

#[async_trait]
pub trait QuoteAPI {
    async fn create_quote(
        &self,
        source: Stop,
        destination: Stop,
        distance: String,
        extra_distance: String,
    ) -> Result<Quote, Error>;
}

#[async_trait]
pub trait VehicleAPI {
    async fn vehicle_availability(
        &self,
        passengers: u32,
        luggage: LuggageCount,
    ) -> Result<VehicleAvailability, Error>;
}

pub trait API: QuoteAPI + VehicleAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
