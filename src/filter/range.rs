use serde::Serialize;

use crate::survey::PopulationSurvey;

/// Fixed walkability-index domain of the filter controls.
pub const WALK_FLOOR: f64 = 1.0;
pub const WALK_CEILING: f64 = 20.0;

/// The four current filter bounds plus the dataset-level population
/// capability flag. Always passed explicitly; nothing reads it ambiently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeState {
    pub walk_min: f64,
    pub walk_max: f64,
    pub pop_min: f64,
    pub pop_max: f64,
    /// Fixed at load time; when false the population bounds are inert.
    pub has_population: bool,
}

impl RangeState {
    /// Default bounds after load: full walkability range, full population
    /// range when the dataset carries population data.
    pub fn defaults(survey: &PopulationSurvey) -> Self {
        Self {
            walk_min: WALK_FLOOR,
            walk_max: WALK_CEILING,
            pop_min: 0.0,
            pop_max: survey.ceiling,
            has_population: survey.has_population,
        }
    }

    /// Restore the `min <= max` invariant by collapsing each lower bound
    /// down to its upper bound (never the reverse), and pin the walkability
    /// bounds into their fixed domain.
    pub fn clamped(mut self) -> Self {
        self.walk_min = self.walk_min.clamp(WALK_FLOOR, WALK_CEILING);
        self.walk_max = self.walk_max.clamp(WALK_FLOOR, WALK_CEILING);
        if self.walk_min > self.walk_max {
            self.walk_min = self.walk_max;
        }

        self.pop_min = self.pop_min.max(0.0);
        self.pop_max = self.pop_max.max(0.0);
        if self.pop_min > self.pop_max {
            self.pop_min = self.pop_max;
        }
        self
    }
}
