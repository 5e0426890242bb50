//! Hotel documents as stored in the `hotels` collection.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use validator::Validate;

/// Price exactly as the store holds it: either a JSON number or a free label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotelPrice {
    Amount(Number),
    Label(String),
}

impl Default for HotelPrice {
    fn default() -> Self {
        HotelPrice::Label(String::new())
    }
}

impl fmt::Display for HotelPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HotelPrice::Amount(number) => write!(f, "{}", number),
            HotelPrice::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: HotelPrice,
}

impl Hotel {
    /// Builds a record from a store document. The id lives outside the
    /// document body and always wins over an `id` field inside it.
    pub fn from_document(id: impl Into<String>, document: Value) -> serde_json::Result<Self> {
        let mut fields = match document {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.insert("id".into(), Value::String(id.into()));
        serde_json::from_value(Value::Object(fields))
    }

    /// Document body without the id, as written to the store.
    pub fn to_document(&self) -> Value {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(self.name.clone()));
        fields.insert("description".into(), Value::String(self.description.clone()));
        fields.insert("image".into(), Value::String(self.image.clone()));
        fields.insert(
            "price".into(),
            serde_json::to_value(&self.price).unwrap_or(Value::Null),
        );
        Value::Object(fields)
    }

    pub fn apply_patch(&mut self, patch: &HotelPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(price) = &patch.price {
            self.price = price.clone();
        }
    }
}

/// Partial update for a single hotel document. Absent fields stay untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct HotelPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2048))]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<HotelPrice>,
}

impl HotelPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.price.is_none()
    }

    /// JSON object holding only the fields present in the patch.
    pub fn to_document(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<HotelPrice, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => HotelPrice::Amount(number),
        Some(Value::String(label)) => HotelPrice::Label(label),
        _ => HotelPrice::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_string_description_is_coerced_to_empty() {
        let hotel = Hotel::from_document(
            "h1",
            json!({ "name": "Seaside Inn", "description": 42, "price": 120 }),
        )
        .unwrap();
        assert_eq!(hotel.description, "");
        assert_eq!(hotel.price.to_string(), "120");
    }

    #[test]
    fn missing_fields_default_and_id_comes_from_store() {
        let hotel = Hotel::from_document("h2", json!({ "id": "spoofed" })).unwrap();
        assert_eq!(hotel.id, "h2");
        assert_eq!(hotel.name, "");
        assert_eq!(hotel.price, HotelPrice::default());
    }

    #[test]
    fn price_label_is_kept_verbatim() {
        let hotel =
            Hotel::from_document("h3", json!({ "price": "from $99 / night" })).unwrap();
        assert_eq!(hotel.price.to_string(), "from $99 / night");
        assert_eq!(hotel.to_document()["price"], json!("from $99 / night"));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut hotel = Hotel::from_document(
            "h4",
            json!({ "name": "Old", "description": "Quiet", "image": "/a.png", "price": 80 }),
        )
        .unwrap();
        let patch = HotelPatch {
            name: Some("New".into()),
            ..Default::default()
        };
        hotel.apply_patch(&patch);
        assert_eq!(hotel.name, "New");
        assert_eq!(hotel.description, "Quiet");
        assert_eq!(patch.to_document(), json!({ "name": "New" }));
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(HotelPatch::default().is_empty());
        let patch: HotelPatch = serde_json::from_value(json!({ "price": 10 })).unwrap();
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_rejects_blank_name() {
        let patch = HotelPatch {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
