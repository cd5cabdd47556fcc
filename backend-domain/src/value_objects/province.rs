// Province value object

pub const UNKNOWN_PROVINCE: &str = "N/A";

/// Takes the segment after the last comma of a location such as
/// "Kab. Bogor, Jawa Barat". Anything without a usable segment maps to
/// [`UNKNOWN_PROVINCE`].
pub fn province_from_location(location: &str) -> String {
    location
        .rsplit_once(',')
        .map(|(_, tail)| tail.trim())
        .filter(|tail| !tail.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN_PROVINCE.to_string())
}

pub fn is_known_province(province: &str) -> bool {
    let trimmed = province.trim();
    !trimmed.is_empty() && trimmed != UNKNOWN_PROVINCE
}
