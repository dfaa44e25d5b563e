use serde_json::Value;
use tracing::debug;

use crate::filter::RangeState;
use crate::stats::{aggregate, AggregationResult, StatLines};
use crate::store::{FeatureStore, FieldSchema};
use crate::survey::PopulationSurvey;

use super::paint::fill_opacity_expression;

/// One recompute's immutable fan-out payload. Chart consumers read the
/// histogram arrays off `result`, paired with [`crate::BUCKET_LABELS`].
#[derive(Debug, Clone)]
pub struct ViewUpdate {
    /// Bounds after clamping. Callers must write corrected values back to
    /// the controls, not just use them internally.
    pub range: RangeState,
    pub result: AggregationResult,
    /// Declarative fill-opacity rule for the map surface.
    pub fill_opacity: Value,
    pub stats: StatLines,
}

/// A consumer of recompute results: map paint, stat panel, each chart.
/// Sinks receive the update while the coordinator is mutably borrowed, so
/// a re-entrant recompute is rejected at compile time.
pub trait ResultSink {
    fn publish(&mut self, update: &ViewUpdate);
}

/// Owns the feature store and the current bounds; on every range change it
/// clamps, aggregates exactly once, and republishes to every attached sink.
pub struct RecomputeCoordinator {
    store: FeatureStore,
    schema: FieldSchema,
    survey: PopulationSurvey,
    range: RangeState,
    sinks: Vec<Box<dyn ResultSink>>,
}

impl RecomputeCoordinator {
    /// Surveys the store once and starts at the default bounds. The store
    /// must already be loaded; there is no deferred-activation path here.
    pub fn new(store: FeatureStore, schema: FieldSchema) -> Self {
        let survey = PopulationSurvey::scan(&store);
        let range = RangeState::defaults(&survey);
        Self { store, schema, survey, range, sinks: Vec::new() }
    }

    pub fn attach(&mut self, sink: Box<dyn ResultSink>) {
        self.sinks.push(sink);
    }

    #[inline]
    pub fn store(&self) -> &FeatureStore {
        &self.store
    }

    #[inline]
    pub fn survey(&self) -> &PopulationSurvey {
        &self.survey
    }

    #[inline]
    pub fn range(&self) -> &RangeState {
        &self.range
    }

    /// Apply a range change: clamp, store, aggregate once, publish. The
    /// returned update carries the clamped bounds for control write-back.
    pub fn on_range_change(&mut self, requested: RangeState) -> ViewUpdate {
        let mut next = requested.clamped();
        // The capability flag is dataset-fixed; callers cannot toggle it.
        next.has_population = self.survey.has_population;
        self.range = next;
        self.recompute()
    }

    /// Restore the default bounds and republish.
    pub fn reset(&mut self) -> ViewUpdate {
        self.range = RangeState::defaults(&self.survey);
        self.recompute()
    }

    fn recompute(&mut self) -> ViewUpdate {
        let result = aggregate(&self.store, &self.range);
        debug!(matched = result.matched_count, "recompute complete");

        let stats = StatLines::render(&result);
        let update = ViewUpdate {
            range: self.range,
            fill_opacity: fill_opacity_expression(&self.range, &self.schema),
            stats,
            result,
        };
        for sink in &mut self.sinks {
            sink.publish(&update);
        }
        update
    }
}
