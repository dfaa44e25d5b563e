/// Names of the GeoJSON properties carrying each filterable attribute.
/// Defaults match the EPA National Walkability Index block-group dataset.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub walkability: String,
    pub area: String,
    pub population: String,
    pub id: String,
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self {
            walkability: "NatWalkInd".to_string(),
            area: "Ac_Total".to_string(),
            population: "TotPop".to_string(),
            id: "GEOID20".to_string(),
        }
    }
}
