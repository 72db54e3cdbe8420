//! Canonical place names and their aliases.
//!
//! Free-text pickup and drop-off strings are folded onto a small closed set
//! of station names so they can key into the fixed route table. Matching is
//! case-insensitive and substring-based in both directions; entries are
//! tried in declaration order and the first hit wins, so airports are
//! listed before the cities whose names they contain.

/// Canonical name, followed by its lowercase aliases.
static PLACE_ALIASES: &[(&str, &[&str])] = &[
    (
        "Amsterdam Airport Schiphol (AMS)",
        &[
            "schiphol",
            "schiphol airport",
            "amsterdam airport",
            "luchthaven schiphol",
            "(ams)",
        ],
    ),
    (
        "Rotterdam The Hague Airport (RTM)",
        &[
            "rotterdam the hague airport",
            "rotterdam airport",
            "zestienhoven",
            "(rtm)",
        ],
    ),
    (
        "Eindhoven Airport (EIN)",
        &["eindhoven airport", "luchthaven eindhoven", "(ein)"],
    ),
    ("Amsterdam", &["amsterdam"]),
    ("Rotterdam", &["rotterdam"]),
    (
        "The Hague",
        &["the hague", "den haag", "'s-gravenhage", "s-gravenhage"],
    ),
    ("Utrecht", &["utrecht"]),
    ("Leiden", &["leiden"]),
    ("Delft", &["delft"]),
    ("Haarlem", &["haarlem"]),
    ("Hoofddorp", &["hoofddorp"]),
    ("Amstelveen", &["amstelveen"]),
    ("Almere", &["almere"]),
    ("Hilversum", &["hilversum"]),
    ("Zaandam", &["zaandam", "zaanstad"]),
    ("Gouda", &["gouda"]),
    ("Dordrecht", &["dordrecht"]),
    ("Breda", &["breda"]),
    ("Eindhoven", &["eindhoven"]),
    ("Amersfoort", &["amersfoort"]),
    ("Zoetermeer", &["zoetermeer"]),
    ("Schiedam", &["schiedam"]),
    ("Tilburg", &["tilburg"]),
];

/// Resolves a free-text place name to its canonical station name, or
/// returns the input unchanged when nothing matches. A non-canonical
/// return means no fixed route can exist for this place.
pub fn canonicalize(raw: &str) -> &str {
    let needle = raw.trim().to_lowercase();

    if needle.is_empty() {
        return raw;
    }

    // exact canonical names win over any alias
    for (canonical, _) in PLACE_ALIASES {
        if canonical.to_lowercase() == needle {
            return canonical;
        }
    }

    for (canonical, aliases) in PLACE_ALIASES {
        for alias in *aliases {
            if needle == *alias || needle.contains(alias) || alias.contains(needle.as_str()) {
                return canonical;
            }
        }
    }

    raw
}

#[test]
fn every_alias_resolves_to_its_canonical_name() {
    for (canonical, aliases) in PLACE_ALIASES {
        for alias in *aliases {
            assert_eq!(canonicalize(alias), *canonical, "alias {:?}", alias);
        }
    }
}

#[test]
fn canonical_names_resolve_to_themselves() {
    for (canonical, _) in PLACE_ALIASES {
        assert_eq!(canonicalize(canonical), *canonical);
        assert_eq!(canonicalize(&canonical.to_uppercase()), *canonical);
    }
}

#[test]
fn exact_city_name_beats_airport_alias() {
    // "rotterdam" is a substring of the RTM airport aliases, but the exact
    // canonical city name is matched first
    assert_eq!(canonicalize("Rotterdam"), "Rotterdam");
    assert_eq!(canonicalize("rotterdam airport"), "Rotterdam The Hague Airport (RTM)");
}

#[test]
fn substring_matching_is_bidirectional() {
    // input contains an alias
    assert_eq!(
        canonicalize("vertrekhal schiphol plaza"),
        "Amsterdam Airport Schiphol (AMS)"
    );
    // alias contains the input
    assert_eq!(
        canonicalize("zestienhove"),
        "Rotterdam The Hague Airport (RTM)"
    );
}

#[test]
fn unknown_places_pass_through_unchanged() {
    assert_eq!(canonicalize("Arnhem"), "Arnhem");
    assert_eq!(canonicalize("  "), "  ");
    assert_eq!(canonicalize(""), "");
}
