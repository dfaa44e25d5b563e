mod coordinator;
mod paint;

pub use coordinator::{RecomputeCoordinator, ResultSink, ViewUpdate};
pub use paint::{fill_opacity_expression, EXCLUDED_OPACITY, INCLUDED_OPACITY};
