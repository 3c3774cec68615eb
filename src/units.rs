//! Unit and label conversions used in spoken sentences

/// Conversion factor from kilometers per hour to knots.
///
/// Must stay exact; a drifted constant silently skews every wind reading.
pub const KMH_TO_KNOTS: f64 = 0.539_957;

/// Cardinal labels for the 16 compass sectors, 22.5 degrees each,
/// index 0 at north going clockwise.
pub const CARDINAL_DIRECTIONS: [&str; 16] = [
    "north",
    "north-northeast",
    "northeast",
    "east-northeast",
    "east",
    "east-southeast",
    "southeast",
    "south-southeast",
    "south",
    "south-southwest",
    "southwest",
    "west-southwest",
    "west",
    "west-northwest",
    "northwest",
    "north-northwest",
];

/// Convert a wind speed from km/h to knots.
#[must_use]
pub fn knots_from_kmh(kmh: f64) -> f64 {
    kmh * KMH_TO_KNOTS
}

/// Convert a meteorological wind direction in degrees to a cardinal label.
///
/// Upstream data is not guaranteed to stay within [0, 360), so the bearing
/// is normalized first: 360 maps to north, negative bearings wrap.
#[must_use]
pub fn degrees_to_cardinal(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = (normalized / 22.5).round() as usize % 16;
    CARDINAL_DIRECTIONS[index]
}

/// Convert a WMO weather code to a human-readable phrase.
///
/// Phrases are lowercase so they read naturally mid-sentence. Codes outside
/// the table yield a default phrase rather than failing.
#[must_use]
pub fn weather_description(code: i64) -> &'static str {
    match code {
        0 => "clear sky",
        1 => "mainly clear",
        2 => "partly cloudy",
        3 => "overcast",
        45 => "fog",
        48 => "depositing rime fog",
        51 => "light drizzle",
        53 => "moderate drizzle",
        55 => "dense drizzle",
        56 => "light freezing drizzle",
        57 => "dense freezing drizzle",
        61 => "slight rain",
        63 => "moderate rain",
        65 => "heavy rain",
        66 => "light freezing rain",
        67 => "heavy freezing rain",
        71 => "slight snow fall",
        73 => "moderate snow fall",
        75 => "heavy snow fall",
        77 => "snow grains",
        80 => "slight rain showers",
        81 => "moderate rain showers",
        82 => "violent rain showers",
        85 => "slight snow showers",
        86 => "heavy snow showers",
        95 => "thunderstorm",
        96 => "thunderstorm with slight hail",
        99 => "thunderstorm with heavy hail",
        _ => "unknown conditions",
    }
}
