use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One roll's worth of frame notes, as exported by the Exif Notes app.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RollMetadata {
    pub camera: Option<Camera>,
    pub iso: Option<Scalar>,
    pub film_stock: Option<FilmStock>,
    pub frames: Vec<FrameRecord>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FilmStock {
    pub make: Option<String>,
    pub model: Option<String>,
}

/// One logged exposure. `count` is the frame number and acts as the key when
/// matching scans to notes.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    pub count: i64,
    #[serde(deserialize_with = "deserialize_local_datetime")]
    pub date: NaiveDateTime,
    pub lens: Option<Lens>,
    pub shutter: Option<String>,
    pub aperture: Option<Scalar>,
    pub focal_length: Option<Scalar>,
    pub location: Option<Location>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Lens {
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The exporter is inconsistent about numeric fields (iso, aperture, focal
/// length may arrive as a JSON number or a string), so accept both and format
/// numbers without a trailing `.0`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Text(s) => write!(f, "{}", s),
        }
    }
}

// Exif Notes writes local date-times with or without a seconds component.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn deserialize_local_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&raw, format).ok())
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date-time '{}'", raw)))
}
