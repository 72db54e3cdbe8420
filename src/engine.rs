use async_trait::async_trait;

use crate::{
    api::{QuoteAPI, VehicleAPI, API},
    entities::{LuggageCount, Quote, Stop, VehicleAvailability},
    error::Error,
    pricing::{self, Tariff},
    vehicles,
};

#[derive(Debug)]
pub struct Engine {
    tariff: Tariff,
}

impl Engine {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }
}

#[async_trait]
impl QuoteAPI for Engine {
    #[tracing::instrument]
    async fn create_quote(
        &self,
        source: Stop,
        destination: Stop,
        distance: String,
        extra_distance: String,
    ) -> Result<Quote, Error> {
        let price = pricing::calculate_price(
            &self.tariff,
            &source,
            &destination,
            &distance,
            &extra_distance,
        );

        Ok(Quote::new(price))
    }
}

#[async_trait]
impl VehicleAPI for Engine {
    #[tracing::instrument]
    async fn vehicle_availability(
        &self,
        passengers: u32,
        luggage: LuggageCount,
    ) -> Result<VehicleAvailability, Error> {
        Ok(vehicles::determine_availability(passengers, &luggage))
    }
}

impl API for Engine {}

#[test]
fn engine_quotes_fixed_routes() {
    use tokio_test::block_on;

    let engine = Engine::new(Tariff::default());

    let quote = block_on(engine.create_quote(
        Stop::new("Schiphol"),
        Stop::new("Rotterdam"),
        "30 km".into(),
        "0 km".into(),
    ))
    .unwrap();

    assert!(quote.is_fixed_price);
    assert!((quote.regular - 77.50).abs() < 1e-9);
    assert!((quote.van - 107.50).abs() < 1e-9);
}

#[test]
fn engine_checks_vehicle_availability() {
    use tokio_test::block_on;

    let engine = Engine::new(Tariff::default());

    let availability =
        block_on(engine.vehicle_availability(5, LuggageCount::default())).unwrap();

    assert!(!availability.regular_available);
    assert!(availability.van_available);
}
