//! The built-in Dutch intercity map.

use crate::schema::{LinkDef, MAP_VERSION, RailMap};

/// The fixed Dutch intercity network: 12 stations and 15 links with travel
/// times in minutes. Used as the default map when no file is given.
pub fn dutch_intercity() -> RailMap {
    let stations = [
        "Amsterdam",
        "Den Haag",
        "Den Helder",
        "Utrecht",
        "Eindhoven",
        "Nijmegen",
        "Maastricht",
        "Enschede",
        "Zwolle",
        "Groningen",
        "Leeuwarden",
        "Meppel",
    ];
    let links = [
        ("Amsterdam", "Den Haag", 46),
        ("Amsterdam", "Den Helder", 77),
        ("Amsterdam", "Utrecht", 26),
        ("Den Haag", "Eindhoven", 89),
        ("Eindhoven", "Maastricht", 63),
        ("Eindhoven", "Nijmegen", 55),
        ("Eindhoven", "Utrecht", 47),
        ("Enschede", "Zwolle", 50),
        ("Groningen", "Leeuwarden", 34),
        ("Groningen", "Meppel", 49),
        ("Leeuwarden", "Meppel", 40),
        ("Maastricht", "Nijmegen", 111),
        ("Meppel", "Zwolle", 15),
        ("Nijmegen", "Zwolle", 77),
        ("Utrecht", "Zwolle", 51),
    ];

    RailMap {
        version: MAP_VERSION,
        name: "Dutch intercity".to_string(),
        stations: stations.iter().map(|s| s.to_string()).collect(),
        links: links
            .iter()
            .map(|&(from, to, minutes)| LinkDef {
                from: from.to_string(),
                to: to.to_string(),
                minutes,
            })
            .collect(),
    }
}
