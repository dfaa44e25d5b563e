use tracing::debug;

use crate::store::FeatureStore;

/// Load-time scan deciding whether the dataset supports population
/// filtering at all, and how large the population controls must be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationSurvey {
    /// True iff at least one feature carries a parseable population value.
    pub has_population: bool,
    /// Largest parsed population value (0 when none parse).
    pub max_population: f64,
    /// `max_population` rounded up to a clean control ceiling:
    /// nearest 100, or nearest 500 once the maximum reaches 50,000.
    pub ceiling: f64,
}

impl PopulationSurvey {
    /// Scan every feature once. Individually malformed population values
    /// are skipped for the maximum, never treated as proof the dataset
    /// lacks population data.
    pub fn scan(store: &FeatureStore) -> Self {
        let mut has_population = false;
        let mut max_population = 0.0_f64;

        for feature in store.iter() {
            if let Some(pop) = feature.population.as_number() {
                has_population = true;
                max_population = max_population.max(pop);
            }
        }

        let ceiling = if has_population {
            let step = if max_population >= 50_000.0 { 500.0 } else { 100.0 };
            round_up(max_population, step)
        } else {
            0.0
        };

        debug!(has_population, max_population, ceiling, "population survey complete");
        Self { has_population, max_population, ceiling }
    }

    /// Suggested increment for the population range controls.
    pub fn control_step(&self) -> f64 {
        if self.ceiling >= 50_000.0 { 500.0 } else { 100.0 }
    }
}

fn round_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}
