mod feature;
mod geojson;
mod schema;

pub use feature::{AttrValue, Feature, FeatureStore};
pub use schema::FieldSchema;
