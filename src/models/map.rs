use serde::{Deserialize, Deserializer, Serialize};

/// A geolocated claim from `GET /map-data`.
///
/// Only rows with both coordinates are returned by the server. Coordinates
/// come from `DECIMAL` columns and may arrive as JSON strings or numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    #[serde(rename = "Claim_Person", default)]
    pub claim_person: Option<String>,
    #[serde(rename = "village_name", default)]
    pub village: Option<String>,
    #[serde(rename = "tehsil_name", default)]
    pub tehsil: Option<String>,
    #[serde(rename = "district_name", default)]
    pub district: Option<String>,
    #[serde(deserialize_with = "coordinate")]
    pub latitude: f64,
    #[serde(deserialize_with = "coordinate")]
    pub longitude: f64,
    #[serde(rename = "Community_ID", default, deserialize_with = "loose_text")]
    pub community_id: Option<String>,
    #[serde(rename = "document_status", default)]
    pub status: Option<String>,
}

impl MapPoint {
    /// "village, tehsil, district", skipping the parts that are missing.
    pub fn place(&self) -> String {
        [&self.village, &self.tehsil, &self.district]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn coordinate<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid coordinate '{text}'"))),
    }
}

/// Community ids are integers in one table and strings in another.
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}
