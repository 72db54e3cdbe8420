use crate::entities::{LuggageCount, VehicleAvailability};

/// Decides which vehicle classes can be offered for a party. Over-capacity
/// input never fails, it just marks the class unavailable.
///
/// One literal rule from the fare sheet: 1 large + 3 small bags is an
/// allowed sedan load even though it exceeds the combined three-bag cap.
pub fn determine_availability(passengers: u32, luggage: &LuggageCount) -> VehicleAvailability {
    let regular = luggage.regular;
    let combined = regular.large + regular.small;
    let special = luggage.special_total();

    let allowed_combination = regular.small == 3 && regular.large == 1;

    let regular_available = !(passengers > 4
        || regular.large > 3
        || regular.small > 4
        || (combined > 3 && !allowed_combination)
        || special > 0);

    let van_available = !(passengers > 8
        || regular.large > 8
        || regular.small > 11
        || regular.hand_luggage > 8
        || special > 3);

    VehicleAvailability {
        regular_available,
        van_available,
    }
}

#[cfg(test)]
fn luggage(large: u32, small: u32, hand_luggage: u32) -> LuggageCount {
    use crate::entities::RegularLuggage;

    LuggageCount {
        regular: RegularLuggage {
            large,
            small,
            hand_luggage,
        },
        special: Default::default(),
    }
}

#[test]
fn small_parties_can_take_either_vehicle() {
    let availability = determine_availability(2, &luggage(1, 1, 2));

    assert!(availability.regular_available);
    assert!(availability.van_available);
}

#[test]
fn five_passengers_need_the_van() {
    let availability = determine_availability(5, &luggage(0, 0, 0));

    assert!(!availability.regular_available);
    assert!(availability.van_available);
}

#[test]
fn nine_passengers_fit_nothing() {
    let availability = determine_availability(9, &luggage(0, 0, 0));

    assert!(!availability.regular_available);
    assert!(!availability.van_available);
}

#[test]
fn one_large_three_small_is_an_allowed_sedan_load() {
    let availability = determine_availability(3, &luggage(1, 3, 0));

    assert!(availability.regular_available);
    assert!(availability.van_available);
}

#[test]
fn other_four_bag_combinations_exceed_the_sedan() {
    // four small bags: within the per-kind cap, over the combined cap
    assert!(!determine_availability(3, &luggage(0, 4, 0)).regular_available);
    // two large + two small
    assert!(!determine_availability(3, &luggage(2, 2, 0)).regular_available);
    // three large + one small
    assert!(!determine_availability(3, &luggage(3, 1, 0)).regular_available);
}

#[test]
fn per_kind_caps_apply_to_each_vehicle() {
    assert!(!determine_availability(1, &luggage(4, 0, 0)).regular_available);
    assert!(determine_availability(1, &luggage(4, 0, 0)).van_available);

    assert!(!determine_availability(1, &luggage(9, 0, 0)).van_available);
    assert!(!determine_availability(1, &luggage(0, 12, 0)).van_available);
    assert!(!determine_availability(1, &luggage(0, 0, 9)).van_available);
}

#[test]
fn special_items_rule_out_the_sedan() {
    let mut with_bike = luggage(0, 0, 0);
    with_bike.special.insert("bicycle".into(), 1);

    let availability = determine_availability(2, &with_bike);
    assert!(!availability.regular_available);
    assert!(availability.van_available);
}

#[test]
fn too_many_special_items_rule_out_the_van_too() {
    let mut cargo = luggage(0, 0, 0);
    cargo.special.insert("bicycle".into(), 2);
    cargo.special.insert("wheelchair".into(), 2);

    let availability = determine_availability(2, &cargo);
    assert!(!availability.regular_available);
    assert!(!availability.van_available);
}
