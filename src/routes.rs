//! The fixed route table: pre-agreed flat fares between canonical places.
//!
//! Each route is stored in one direction only; lookup is undirected. A pair
//! that is absent in both directions is not an error, it simply means the
//! trip is priced per kilometer instead.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::entities::Stop;
use crate::places::canonicalize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPrice {
    pub regular: f64,
    pub van: f64,
}

/// Origin, destination, sedan fare, van fare. Fares in EUR.
static FIXED_ROUTES: &[(&str, &str, f64, f64)] = &[
    ("Amsterdam Airport Schiphol (AMS)", "Amsterdam", 42.50, 62.50),
    ("Amsterdam Airport Schiphol (AMS)", "Rotterdam", 77.50, 107.50),
    ("Amsterdam Airport Schiphol (AMS)", "The Hague", 67.50, 97.50),
    ("Amsterdam Airport Schiphol (AMS)", "Utrecht", 65.00, 95.00),
    ("Amsterdam Airport Schiphol (AMS)", "Leiden", 52.50, 77.50),
    ("Amsterdam Airport Schiphol (AMS)", "Haarlem", 37.50, 57.50),
    ("Amsterdam Airport Schiphol (AMS)", "Delft", 72.50, 102.50),
    ("Amsterdam Airport Schiphol (AMS)", "Hoofddorp", 27.50, 42.50),
    ("Amsterdam Airport Schiphol (AMS)", "Amstelveen", 32.50, 47.50),
    ("Amsterdam Airport Schiphol (AMS)", "Almere", 60.00, 85.00),
    ("Amsterdam Airport Schiphol (AMS)", "Hilversum", 55.00, 80.00),
    ("Amsterdam Airport Schiphol (AMS)", "Zaandam", 45.00, 65.00),
    ("Amsterdam Airport Schiphol (AMS)", "Gouda", 70.00, 100.00),
    ("Amsterdam Airport Schiphol (AMS)", "Zoetermeer", 65.00, 95.00),
    ("Amsterdam Airport Schiphol (AMS)", "Schiedam", 80.00, 110.00),
    ("Amsterdam Airport Schiphol (AMS)", "Dordrecht", 95.00, 130.00),
    ("Amsterdam Airport Schiphol (AMS)", "Amersfoort", 75.00, 105.00),
    ("Amsterdam Airport Schiphol (AMS)", "Breda", 115.00, 150.00),
    ("Amsterdam Airport Schiphol (AMS)", "Tilburg", 125.00, 160.00),
    ("Amsterdam Airport Schiphol (AMS)", "Eindhoven", 135.00, 175.00),
    ("Rotterdam The Hague Airport (RTM)", "Rotterdam", 27.50, 42.50),
    ("Rotterdam The Hague Airport (RTM)", "The Hague", 37.50, 57.50),
    ("Rotterdam The Hague Airport (RTM)", "Delft", 32.50, 47.50),
    ("Rotterdam The Hague Airport (RTM)", "Schiedam", 25.00, 40.00),
    ("Rotterdam The Hague Airport (RTM)", "Zoetermeer", 40.00, 60.00),
    ("Rotterdam The Hague Airport (RTM)", "Gouda", 45.00, 65.00),
    ("Rotterdam The Hague Airport (RTM)", "Leiden", 47.50, 70.00),
    ("Rotterdam The Hague Airport (RTM)", "Dordrecht", 50.00, 72.50),
    ("Rotterdam The Hague Airport (RTM)", "Breda", 65.00, 95.00),
    ("Rotterdam The Hague Airport (RTM)", "Utrecht", 70.00, 100.00),
    ("Rotterdam The Hague Airport (RTM)", "Amsterdam", 85.00, 115.00),
    ("Eindhoven Airport (EIN)", "Eindhoven", 25.00, 40.00),
    ("Eindhoven Airport (EIN)", "Tilburg", 45.00, 65.00),
    ("Eindhoven Airport (EIN)", "Breda", 60.00, 85.00),
    ("Eindhoven Airport (EIN)", "Utrecht", 90.00, 120.00),
    ("Eindhoven Airport (EIN)", "Rotterdam", 110.00, 145.00),
    ("Eindhoven Airport (EIN)", "Amsterdam", 135.00, 175.00),
    ("Amsterdam", "Utrecht", 60.00, 85.00),
    ("Amsterdam", "The Hague", 85.00, 115.00),
    ("Amsterdam", "Rotterdam", 95.00, 125.00),
    ("Rotterdam", "The Hague", 45.00, 65.00),
    ("Rotterdam", "Utrecht", 75.00, 105.00),
    ("The Hague", "Utrecht", 85.00, 115.00),
];

static ROUTE_TABLE: LazyLock<BTreeMap<&'static str, BTreeMap<&'static str, FixedPrice>>> =
    LazyLock::new(|| {
        let mut table: BTreeMap<&str, BTreeMap<&str, FixedPrice>> = BTreeMap::new();

        for &(origin, destination, regular, van) in FIXED_ROUTES {
            table
                .entry(origin)
                .or_default()
                .insert(destination, FixedPrice { regular, van });
        }

        table
    });

/// Looks up the flat fare for a pair of stops, in either direction.
pub fn fixed_price(source: &Stop, destination: &Stop) -> Option<FixedPrice> {
    let origin = resolve(source);
    let destination = resolve(destination);

    lookup(origin, destination).or_else(|| lookup(destination, origin))
}

fn lookup(origin: &str, destination: &str) -> Option<FixedPrice> {
    ROUTE_TABLE
        .get(origin)
        .and_then(|destinations| destinations.get(destination))
        .copied()
}

/// Picks the canonical name for a stop. A business name hint wins when it
/// resolves to a place the route table knows; a city hint comes next; the
/// first comma-delimited segment of the raw address is the fallback.
fn resolve(stop: &Stop) -> &str {
    if let Some(exact) = &stop.exact {
        if let Some(business_name) = &exact.business_name {
            let name = canonicalize(business_name);
            if is_route_key(name) {
                return name;
            }
        }

        if let Some(city) = &exact.city {
            return canonicalize(city);
        }
    }

    canonicalize(stop.address.split(',').next().unwrap_or("").trim())
}

fn is_route_key(name: &str) -> bool {
    ROUTE_TABLE.contains_key(name)
        || ROUTE_TABLE
            .values()
            .any(|destinations| destinations.contains_key(name))
}

#[test]
fn every_route_matches_in_both_directions() {
    for &(origin, destination, regular, van) in FIXED_ROUTES {
        let there = fixed_price(&Stop::new(origin), &Stop::new(destination));
        let back = fixed_price(&Stop::new(destination), &Stop::new(origin));

        assert_eq!(there, Some(FixedPrice { regular, van }), "{} -> {}", origin, destination);
        assert_eq!(there, back, "{} <-> {}", origin, destination);
    }
}

#[test]
fn unknown_pairs_have_no_fixed_price() {
    assert_eq!(fixed_price(&Stop::new("Utrecht"), &Stop::new("Arnhem")), None);
    assert_eq!(fixed_price(&Stop::new("Arnhem"), &Stop::new("Nijmegen")), None);
}

#[test]
fn business_name_hint_wins_over_city() {
    use crate::entities::AddressDetail;

    let airport = Stop::with_detail(
        "Evert van de Beekstraat 202, Schiphol",
        AddressDetail {
            business_name: Some("Schiphol Airport".into()),
            city: Some("Haarlemmermeer".into()),
        },
    );

    let price = fixed_price(&airport, &Stop::new("Rotterdam")).unwrap();
    assert_eq!(price, FixedPrice { regular: 77.50, van: 107.50 });
}

#[test]
fn unrecognized_business_name_falls_back_to_city() {
    use crate::entities::AddressDetail;

    let hotel = Stop::with_detail(
        "Koninginnenhoofd 1",
        AddressDetail {
            business_name: Some("Hotel New York".into()),
            city: Some("Rotterdam".into()),
        },
    );

    let price = fixed_price(&hotel, &Stop::new("The Hague")).unwrap();
    assert_eq!(price, FixedPrice { regular: 45.00, van: 65.00 });
}

#[test]
fn address_resolution_uses_first_comma_segment() {
    let source = Stop::new("Schiphol Airport, Vertrekpassage 1, Schiphol");
    let destination = Stop::new("Amsterdam, Damrak 1");

    let price = fixed_price(&source, &destination).unwrap();
    assert_eq!(price, FixedPrice { regular: 42.50, van: 62.50 });
}
