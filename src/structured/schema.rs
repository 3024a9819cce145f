//! Response schema generation.
//!
//! Gemini accepts an OpenAPI subset: upper-case type names and no
//! `additionalProperties`.

use serde_json::{json, Value};

/// Builder for an `OBJECT` response schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    description: Option<String>,
    properties: Vec<(String, Value)>,
    required: Vec<String>,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Add a property and mark it required.
    pub fn require(mut self, name: impl Into<String>, schema: Value) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, schema));
        self
    }

    pub fn build(self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("OBJECT"));

        let mut properties = serde_json::Map::new();
        let mut ordering = Vec::with_capacity(self.properties.len());
        for (name, schema) in self.properties {
            ordering.push(Value::String(name.clone()));
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());
        map.insert("propertyOrdering".into(), ordering.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }
        if let Some(desc) = self.description {
            map.insert("description".into(), desc.into());
        }

        map.into()
    }
}

pub fn string() -> Value {
    json!({"type": "STRING"})
}

/// A number constrained to `[min, max]`.
pub fn number_in_range(min: f64, max: f64) -> Value {
    json!({"type": "NUMBER", "minimum": min, "maximum": max})
}

/// An array of strings drawn from `allowed`, holding at most `max_items`.
pub fn enum_array(allowed: &[String], max_items: usize) -> Value {
    let mut items = json!({"type": "STRING"});
    if !allowed.is_empty() {
        items["enum"] = json!(allowed);
    }
    json!({"type": "ARRAY", "items": items, "maxItems": max_items.to_string()})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generator_basic() {
        let schema = SchemaGenerator::new()
            .require("sceneDescription", string())
            .add_property("note", string())
            .build();
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["sceneDescription"]["type"], "STRING");
        assert_eq!(schema["required"], json!(["sceneDescription"]));
        assert_eq!(schema["propertyOrdering"], json!(["sceneDescription", "note"]));
    }

    #[test]
    fn test_number_in_range() {
        let n = number_in_range(-100.0, 100.0);
        assert_eq!(n["type"], "NUMBER");
        assert_eq!(n["minimum"], -100.0);
        assert_eq!(n["maximum"], 100.0);
    }

    #[test]
    fn test_enum_array() {
        let allowed = vec!["Rock".to_string(), "Jazz".to_string()];
        let a = enum_array(&allowed, 3);
        assert_eq!(a["type"], "ARRAY");
        assert_eq!(a["items"]["enum"], json!(["Rock", "Jazz"]));
        assert_eq!(a["maxItems"], "3");

        let open = enum_array(&[], 2);
        assert!(open["items"].get("enum").is_none());
    }
}
