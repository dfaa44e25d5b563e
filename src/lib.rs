#![doc = "WalkLens public API"]
mod filter;
mod stats;
mod store;
mod survey;
mod view;

#[doc(inline)]
pub use store::{AttrValue, Feature, FeatureStore, FieldSchema};

#[doc(inline)]
pub use survey::PopulationSurvey;

#[doc(inline)]
pub use filter::{classify, Classification, RangeState, WALK_CEILING, WALK_FLOOR};

#[doc(inline)]
pub use stats::{
    aggregate, bucket_index, group_thousands, AggregationResult, StatLines, BUCKET_COUNT,
    BUCKET_LABELS, UNAVAILABLE,
};

#[doc(inline)]
pub use view::{
    fill_opacity_expression, RecomputeCoordinator, ResultSink, ViewUpdate, EXCLUDED_OPACITY,
    INCLUDED_OPACITY,
};
