//! Request parameters and their defaults

use ogcard_core::types::Color;
use serde::Serialize;

/// Query keys and the value used when a key is absent or empty
pub const FIELD_DEFAULTS: &[(&str, &str)] = &[
    ("title", "Default Title"),
    ("desc", ""),
    ("bg", "#1a1a1a"),
    ("cardBg", "#ffffff"),
    ("sTime", ""),
    ("sWeather", ""),
    ("sBattery", ""),
    ("sLoc", ""),
    ("emojis", "🚗 🏠"),
];

/// The text and colour fields of one card
///
/// Field names follow the query keys when serialized, so a set of
/// parameters can be written back out as the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardParams {
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Text colour, always `#`-prefixed
    #[serde(rename = "bg")]
    pub text_color: String,
    /// Canvas background colour, always `#`-prefixed
    #[serde(rename = "cardBg")]
    pub background_color: String,
    #[serde(rename = "sTime")]
    pub time: String,
    #[serde(rename = "sWeather")]
    pub weather: String,
    #[serde(rename = "sBattery")]
    pub battery: String,
    #[serde(rename = "sLoc")]
    pub location: String,
    pub emojis: String,
}

impl CardParams {
    /// Build parameters from `(key, value)` pairs.
    ///
    /// The first occurrence of a key is the one read; an empty value counts
    /// as absent and takes the default from [`FIELD_DEFAULTS`]. Unknown keys
    /// are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut found: [Option<String>; 9] = Default::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            match FIELD_DEFAULTS.iter().position(|(name, _)| *name == key) {
                Some(idx) => {
                    if found[idx].is_none() {
                        found[idx] = Some(value.as_ref().to_string());
                    }
                },
                None => log::debug!("ignoring unknown parameter {:?}", key),
            }
        }

        let [title, desc, bg, card_bg, time, weather, battery, location, emojis] = found;
        let text = |value: Option<String>, idx: usize| -> String {
            value
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| FIELD_DEFAULTS[idx].1.to_string())
        };

        Self {
            title: text(title, 0),
            description: text(desc, 1),
            text_color: add_hash(bg.as_deref(), FIELD_DEFAULTS[2].1),
            background_color: add_hash(card_bg.as_deref(), FIELD_DEFAULTS[3].1),
            time: text(time, 4),
            weather: text(weather, 5),
            battery: text(battery, 6),
            location: text(location, 7),
            emojis: text(emojis, 8),
        }
    }

    /// Text colour parsed, or the default when it is not valid hex
    pub fn foreground(&self) -> Color {
        parse_color(&self.text_color, FIELD_DEFAULTS[2].1)
    }

    /// Background colour parsed, or the default when it is not valid hex
    pub fn background(&self) -> Color {
        parse_color(&self.background_color, FIELD_DEFAULTS[3].1)
    }

    /// The four metadata chips, left column first
    pub fn chips(&self) -> [&str; 4] {
        [&self.time, &self.weather, &self.battery, &self.location]
    }
}

impl Default for CardParams {
    fn default() -> Self {
        Self::from_pairs(std::iter::empty::<(&str, &str)>())
    }
}

/// Prefix `#` unless present; `fallback` when the value is absent or empty
pub fn add_hash(color: Option<&str>, fallback: &str) -> String {
    match color {
        None | Some("") => fallback.to_string(),
        Some(value) if value.starts_with('#') => value.to_string(),
        Some(value) => format!("#{}", value),
    }
}

fn parse_color(value: &str, fallback: &str) -> Color {
    if let Some(color) = Color::from_hex(value) {
        return color;
    }
    log::warn!("unparseable colour {:?}, using {}", value, fallback);
    Color::from_hex(fallback).unwrap_or_else(Color::black)
}
