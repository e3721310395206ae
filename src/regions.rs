/// Pune sub-regions offered in the region selector.
pub const PUNE_REGIONS: &[&str] = &[
    "Pune",
    "PCMC",
    "Baner",
    "Kothrud",
    "Wakad",
    "Hinjewadi",
    "Hadapsar",
    "Viman Nagar",
    "Kharadi",
];

pub fn is_known_region(name: &str) -> bool {
    PUNE_REGIONS.contains(&name)
}
