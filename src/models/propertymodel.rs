use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by the repository; callers can never set them.
pub const RESERVED_FIELDS: [&str; 2] = ["id", "createdAt"];

/// A listing as stored in `properties.json`.
///
/// Only `id` and `createdAt` belong to the repository. Everything else the
/// admin console submits (`title`, `price`, `images`, ...) is kept verbatim in
/// `fields`, whatever its JSON type, and read back through the accessors
/// below.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    // Opaque: stored text is written back byte for byte
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Property {
    /// Builds a new record from caller fields. `id` and `createdAt` in
    /// `fields` are discarded in favour of the supplied values.
    pub fn from_fields(id: String, created_at: String, fields: Map<String, Value>) -> Property {
        Property {
            id,
            created_at: Some(created_at),
            fields: strip_reserved(fields),
        }
    }

    /// Shallow merge: every top-level key in `fields` replaces the stored one,
    /// everything else is kept. `id` and `createdAt` never change.
    pub fn merged(&self, fields: Map<String, Value>) -> Property {
        let mut merged = self.clone();
        merged.fields.extend(strip_reserved(fields));
        merged
    }

    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.text("title")
    }

    pub fn location(&self) -> Option<&str> {
        self.text("location")
    }

    pub fn property_type(&self) -> Option<&str> {
        self.text("type")
    }

    pub fn status(&self) -> Option<&str> {
        self.text("status")
    }

    pub fn price(&self) -> Option<f64> {
        self.field("price").and_then(Value::as_f64)
    }

    pub fn featured(&self) -> bool {
        self.field("featured").and_then(Value::as_bool).unwrap_or(false)
    }
}

fn strip_reserved(mut fields: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_FIELDS {
        fields.remove(key);
    }
    fields
}

/// `prop-` followed by `count + 1`, zero-padded to three digits.
pub fn next_property_id(count: usize) -> String {
    format!("prop-{:03}", count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn ids_are_padded_to_three_digits() {
        assert_eq!(next_property_id(0), "prop-001");
        assert_eq!(next_property_id(41), "prop-042");
        assert_eq!(next_property_id(999), "prop-1000");
    }

    #[test]
    fn caller_cannot_pick_id_or_timestamp() {
        let property = Property::from_fields(
            "prop-007".to_string(),
            "2024-05-01T10:00:00.000Z".to_string(),
            fields(json!({ "id": "mine", "createdAt": "1999-01-01T00:00:00Z", "title": "Loft" })),
        );

        assert_eq!(property.id, "prop-007");
        assert_eq!(property.created_at.as_deref(), Some("2024-05-01T10:00:00.000Z"));
        assert_eq!(property.title(), Some("Loft"));
        assert_eq!(property.fields.len(), 1);
    }

    #[test]
    fn values_are_kept_whatever_their_type() {
        let property = Property::from_fields(
            "prop-001".to_string(),
            "2024-05-01T10:00:00.000Z".to_string(),
            fields(json!({ "bathrooms": 2.5, "price": "on request", "title": null })),
        );

        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["bathrooms"], json!(2.5));
        assert_eq!(value["price"], json!("on request"));
        assert_eq!(value["title"], Value::Null);
        assert_eq!(property.price(), None);
        assert_eq!(property.title(), None);
    }

    #[test]
    fn merge_replaces_top_level_keys_only() {
        let property = Property::from_fields(
            "prop-001".to_string(),
            "2024-05-01T10:00:00.000Z".to_string(),
            fields(json!({ "title": "Loft", "features": ["Pool", "Gym"] })),
        );

        let merged = property.merged(fields(json!({ "features": ["Sauna"], "price": 900000 })));

        assert_eq!(merged.title(), Some("Loft"));
        assert_eq!(merged.field("features"), Some(&json!(["Sauna"])));
        assert_eq!(merged.price(), Some(900000.0));
        assert_eq!(merged.created_at, property.created_at);
    }

    #[test]
    fn records_without_created_at_round_trip_unchanged() {
        let stored = json!({ "id": "prop-001", "title": "Seed", "price": 1000000 });

        let property: Property = serde_json::from_value(stored.clone()).unwrap();

        assert_eq!(property.created_at, None);
        assert_eq!(serde_json::to_value(&property).unwrap(), stored);
    }
}
