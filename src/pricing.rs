use serde::{Deserialize, Serialize};
use std::env;

use crate::entities::Stop;
use crate::error::{env_var_error, Error};
use crate::routes;

/// Process-wide pricing constants. Loaded once at startup; never adjusted
/// per call.
#[derive(Clone, Copy, Debug)]
pub struct Tariff {
    pub per_km_rate: f64,
    pub van_multiplier: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            per_km_rate: 2.5,
            van_multiplier: 1.3,
        }
    }
}

impl Tariff {
    pub fn from_env() -> Result<Self, Error> {
        let mut tariff = Self::default();

        if let Ok(value) = env::var("TARIEF_PER_KM_RATE") {
            tariff.per_km_rate = value.parse().map_err(|_| env_var_error())?;
        }

        if let Ok(value) = env::var("TARIEF_VAN_MULTIPLIER") {
            tariff.van_multiplier = value.parse().map_err(|_| env_var_error())?;
        }

        Ok(tariff)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub regular: f64,
    pub van: f64,
    pub is_fixed_price: bool,
}

/// Prices a trip. A known pair gets its flat fare plus per-km billing for
/// stopover kilometers; anything else is priced per kilometer over the
/// whole distance. Total for all inputs: a distance that does not parse
/// counts as zero kilometers rather than failing the booking flow.
pub fn calculate_price(
    tariff: &Tariff,
    source: &Stop,
    destination: &Stop,
    distance: &str,
    extra_distance: &str,
) -> PriceResult {
    let direct_km = parse_km(distance);
    let extra_km = parse_km(extra_distance);

    match routes::fixed_price(source, destination) {
        Some(fixed) => PriceResult {
            regular: fixed.regular + extra_km * tariff.per_km_rate,
            van: fixed.van + extra_km * tariff.per_km_rate,
            is_fixed_price: true,
        },
        None => {
            let regular = (direct_km + extra_km) * tariff.per_km_rate;

            PriceResult {
                regular,
                van: regular * tariff.van_multiplier,
                is_fixed_price: false,
            }
        }
    }
}

/// Parses distance strings of the form `"30 km"` (or `"30km"`, or a bare
/// number) into kilometers. Unparsable input is zero.
pub fn parse_km(distance: &str) -> f64 {
    let trimmed = distance.trim();

    let end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());

    trimmed[..end].parse().unwrap_or(0.0)
}

#[test]
fn parses_distance_strings_tolerantly() {
    assert_eq!(parse_km("30 km"), 30.0);
    assert_eq!(parse_km("30km"), 30.0);
    assert_eq!(parse_km("12.5 km"), 12.5);
    assert_eq!(parse_km(" 8 "), 8.0);
    assert_eq!(parse_km("abc"), 0.0);
    assert_eq!(parse_km(""), 0.0);
}

#[test]
fn known_pair_gets_the_flat_fare() {
    let price = calculate_price(
        &Tariff::default(),
        &Stop::new("Amsterdam Airport Schiphol (AMS)"),
        &Stop::new("Rotterdam"),
        "30 km",
        "0 km",
    );

    assert!(price.is_fixed_price);
    assert!((price.regular - 77.50).abs() < 1e-9);
    assert!((price.van - 107.50).abs() < 1e-9);
}

#[test]
fn stopover_kilometers_are_billed_on_top_of_a_flat_fare() {
    let price = calculate_price(
        &Tariff::default(),
        &Stop::new("Amsterdam Airport Schiphol (AMS)"),
        &Stop::new("Rotterdam"),
        "30 km",
        "10 km",
    );

    assert!(price.is_fixed_price);
    assert!((price.regular - 102.50).abs() < 1e-9);
    assert!((price.van - 132.50).abs() < 1e-9);
}

#[test]
fn unknown_pair_is_priced_per_kilometer() {
    let price = calculate_price(
        &Tariff::default(),
        &Stop::new("Utrecht"),
        &Stop::new("Arnhem"),
        "50 km",
        "0 km",
    );

    assert!(!price.is_fixed_price);
    assert!((price.regular - 125.0).abs() < 1e-9);
    assert!((price.van - 162.5).abs() < 1e-9);
}

#[test]
fn malformed_distances_degrade_to_zero() {
    let price = calculate_price(
        &Tariff::default(),
        &Stop::new("Utrecht"),
        &Stop::new("Arnhem"),
        "abc",
        "abc",
    );

    assert!(!price.is_fixed_price);
    assert_eq!(price.regular, 0.0);
    assert_eq!(price.van, 0.0);
}

#[test]
fn price_never_drops_as_extra_distance_grows() {
    let tariff = Tariff::default();
    let source = Stop::new("Amsterdam Airport Schiphol (AMS)");
    let destination = Stop::new("Rotterdam");

    let mut previous = f64::MIN;
    for extra in 0..20 {
        let price = calculate_price(
            &tariff,
            &source,
            &destination,
            "30 km",
            &format!("{} km", extra),
        );
        assert!(price.regular >= previous);
        previous = price.regular;
    }
}

#[test]
fn pricing_has_no_hidden_state() {
    let tariff = Tariff::default();
    let source = Stop::new("The Hague");
    let destination = Stop::new("Utrecht");

    let first = calculate_price(&tariff, &source, &destination, "65 km", "5 km");
    let second = calculate_price(&tariff, &source, &destination, "65 km", "5 km");

    assert_eq!(first, second);
}
