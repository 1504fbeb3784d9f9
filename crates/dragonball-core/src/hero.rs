//! Hero records as sent by the API and the summary shown to users.

use serde::{Deserialize, Serialize};

/// A hero record in the wire shape of `heros/all`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeroRecord {
    pub id: String,
    pub photo: String,
    #[serde(default)]
    pub favorite: bool,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// The reduced view of a hero: its name and picture.
///
/// Projected from [`HeroRecord`]; id, favorite flag and description are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSummary {
    pub name: String,
    pub image_url: String,
}

impl HeroSummary {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

impl From<HeroRecord> for HeroSummary {
    fn from(record: HeroRecord) -> Self {
        Self {
            name: record.name,
            image_url: record.photo,
        }
    }
}

/// Decode a `heros/all` body and project every record, keeping API order.
pub fn decode_hero_list(body: &str) -> crate::Result<Vec<HeroSummary>> {
    let records: Vec<HeroRecord> = serde_json::from_str(body)?;
    Ok(records.into_iter().map(HeroSummary::from).collect())
}
