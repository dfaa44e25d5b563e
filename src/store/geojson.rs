use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

use super::{
    feature::{AttrValue, Feature, FeatureStore},
    schema::FieldSchema,
};

impl FeatureStore {
    /// Parse a GeoJSON FeatureCollection from raw bytes.
    pub fn from_geojson_bytes(bytes: &[u8], schema: &FieldSchema) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
        Self::from_geojson_value(&value, schema)
    }

    /// Extract features from a parsed GeoJSON FeatureCollection.
    ///
    /// Only the properties named by `schema` are read; geometry is left to
    /// the rendering surface. Absent or malformed values on individual
    /// features never fail the load; the load fails only when the payload
    /// is not a FeatureCollection at all.
    pub fn from_geojson_value(value: &Value, schema: &FieldSchema) -> Result<Self> {
        let Some(raw) = value["features"].as_array() else {
            bail!("GeoJSON payload has no \"features\" array");
        };

        let mut features = Vec::with_capacity(raw.len());
        for entry in raw {
            let props = entry["properties"].as_object();
            let attr = |key: &str| attr_from_value(props.and_then(|p| p.get(key)));

            let id = match props.and_then(|p| p.get(&schema.id)) {
                Some(Value::String(s)) => Some(s.as_str().into()),
                Some(Value::Number(n)) => Some(n.to_string().into()),
                _ => None,
            };

            features.push(Feature {
                id,
                walkability: attr(&schema.walkability),
                area: attr(&schema.area),
                population: attr(&schema.population),
            });
        }

        debug!(count = features.len(), "loaded feature collection");
        Ok(Self::from_features(features))
    }
}

fn attr_from_value(value: Option<&Value>) -> AttrValue {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(AttrValue::Absent, AttrValue::Number),
        Some(Value::String(s)) => AttrValue::Text(s.clone()),
        _ => AttrValue::Absent,
    }
}
