//! Frontend Models
//!
//! Data structures matching the academix catalog endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Localized name/description pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub name: String,
    /// Sub-category translations carry no description
    #[serde(default)]
    pub description: String,
}

/// Catalog record listed under a sub-category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub link: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl Item {
    /// Name from the first translation, empty when there is none
    pub fn primary_name(&self) -> &str {
        primary(&self.translations).map_or("", |t| t.name.as_str())
    }

    pub fn primary_description(&self) -> &str {
        primary(&self.translations).map_or("", |t| t.description.as_str())
    }
}

/// Grouping entity whose items are listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    #[serde(default)]
    pub translations: Vec<Translation>,
}

impl SubCategory {
    pub fn primary_name(&self) -> &str {
        primary(&self.translations).map_or("", |t| t.name.as_str())
    }
}

/// One page of items as returned by the items endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPage {
    pub content: Vec<Item>,
    pub total_elements: u64,
}

/// Identifiers are opaque: numbers and strings are both accepted
fn opaque_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

/// Only the first translation is ever displayed
fn primary(translations: &[Translation]) -> Option<&Translation> {
    translations.first()
}
