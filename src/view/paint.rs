use serde_json::{json, Value};

use crate::filter::RangeState;
use crate::store::FieldSchema;

/// Fill opacity for features inside the current bounds.
pub const INCLUDED_OPACITY: f64 = 0.75;
/// Fill opacity for features filtered out.
pub const EXCLUDED_OPACITY: f64 = 0.20;

/// Population upper bound substituted when the dataset carries no
/// population data, keeping the expression shape stable while leaving the
/// gate wide open.
const POP_GATE_OPEN_MAX: f64 = 1e15;

/// Build the declarative fill-opacity rule for a Mapbox-style renderer.
///
/// This is a structural translation of [`crate::classify`]'s predicate
/// (same bounds, same conjunction), so the map cannot drift from the
/// reported statistics. A missing population attribute coalesces to 0, the
/// closest the expression language comes to the per-feature parse gate.
pub fn fill_opacity_expression(range: &RangeState, schema: &FieldSchema) -> Value {
    let (pop_min, pop_max) = if range.has_population {
        (range.pop_min, range.pop_max)
    } else {
        (0.0, POP_GATE_OPEN_MAX)
    };

    json!([
        "case",
        [
            "all",
            [">=", ["to-number", ["get", schema.walkability]], range.walk_min],
            ["<=", ["to-number", ["get", schema.walkability]], range.walk_max],
            [">=", ["to-number", ["coalesce", ["get", schema.population], 0]], pop_min],
            ["<=", ["to-number", ["coalesce", ["get", schema.population], 0]], pop_max],
        ],
        INCLUDED_OPACITY,
        EXCLUDED_OPACITY,
    ])
}
