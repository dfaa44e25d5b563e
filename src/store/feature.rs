use std::sync::Arc;

/// A loosely-typed attribute value as it arrives from the source payload.
/// Upstream data mixes numbers, numeric strings, and missing values freely;
/// every consumer goes through [`AttrValue::as_number`] rather than trusting
/// the raw representation.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    Absent,
}

impl AttrValue {
    /// Parse the attribute as a finite number, or `None` if it is absent,
    /// empty, non-numeric, or non-finite.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttrValue::Number(v) if v.is_finite() => Some(*v),
            AttrValue::Number(_) => None,
            AttrValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            AttrValue::Absent => None,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, AttrValue::Absent)
    }
}

/// One polygon record. Geometry is opaque payload owned by the rendering
/// surface and never inspected here; only the filterable attributes are kept.
#[derive(Debug, Clone)]
pub struct Feature {
    pub id: Option<Arc<str>>, // Display-only identifier
    pub walkability: AttrValue,
    pub area: AttrValue,
    pub population: AttrValue,
}

/// The immutable feature collection, loaded once per session.
#[derive(Debug, Default)]
pub struct FeatureStore {
    features: Vec<Feature>,
}

impl FeatureStore {
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Read-only iteration over all features, in load order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter()
    }
}
