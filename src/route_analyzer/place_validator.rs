// place_validator.rs
//
// Checks route names against a fixed allow-list of Indian place names.
// This is plain substring gating, not geocoding: a name passes when any
// listed place appears as a whole word, case-insensitively.

use crate::shared_data::RouteMap;

/// Place names the service recognizes in route labels, lowercase.
pub const KNOWN_PLACES: [&str; 31] = [
    "mumbai",
    "delhi",
    "bengaluru",
    "hyderabad",
    "chennai",
    "kolkata",
    "pune",
    "ahmedabad",
    "jaipur",
    "surat",
    "lucknow",
    "kanpur",
    "nagpur",
    "indore",
    "thane",
    "bhopal",
    "visakhapatnam",
    "patna",
    "vadodara",
    "ghaziabad",
    "ludhiana",
    "agra",
    "nashik",
    "faridabad",
    "meerut",
    "rajkot",
    "varanasi",
    "srinagar",
    "amritsar",
    "chandigarh",
    "coimbatore",
];

/// True when any known place occurs as a whole word of `name`.
pub fn is_recognized_place(name: &str) -> bool {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| {
            let token = token.to_lowercase();
            KNOWN_PLACES.iter().any(|place| *place == token)
        })
}

/// First route name failing validation, in input order. Validation stops
/// at the first bad name; later routes are not inspected.
pub fn first_unrecognized_route(routes: &RouteMap) -> Option<&str> {
    routes
        .keys()
        .find(|name| !is_recognized_place(name))
        .map(|name| name.as_str())
}
