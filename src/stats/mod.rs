mod aggregate;
mod format;

pub use aggregate::{aggregate, bucket_index, AggregationResult, BUCKET_COUNT, BUCKET_LABELS};
pub use format::{group_thousands, StatLines, UNAVAILABLE};
