use serde::Serialize;

use crate::filter::{classify, RangeState};
use crate::store::FeatureStore;

pub const BUCKET_COUNT: usize = 10;

/// Fixed labels for the ten two-wide walkability buckets, aligned with
/// [`bucket_index`]. Chart consumers pair these with the histogram arrays.
pub const BUCKET_LABELS: [&str; BUCKET_COUNT] = [
    "1-2", "3-4", "5-6", "7-8", "9-10", "11-12", "13-14", "15-16", "17-18", "19-20",
];

/// Map a walkability value to its two-wide histogram bucket: `[1,2]` is
/// bucket 0, `[19,20]` is bucket 9. Values landing outside the ten buckets
/// yield `None` and are dropped from the histograms only.
pub fn bucket_index(walkability: f64) -> Option<usize> {
    let idx = ((walkability - 1.0) / 2.0).floor();
    if idx >= 0.0 && idx < BUCKET_COUNT as f64 {
        Some(idx as usize)
    } else {
        None
    }
}

/// Immutable snapshot of one recompute. Rebuilt from scratch on every
/// range change; there is no incremental update path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub matched_count: u64,
    /// `None` iff no feature matched.
    pub average_walkability: Option<f64>,
    /// `None` iff the dataset carries no population data.
    pub total_population: Option<f64>,
    /// Acres per walkability bucket, over included features.
    pub area_histogram: [f64; BUCKET_COUNT],
    /// Population per walkability bucket; all zero without dataset population.
    pub population_histogram: [f64; BUCKET_COUNT],
}

/// Single pass over the full store: classify every feature, accumulate the
/// scalar stats and both histograms. Scalars and histograms are validated
/// independently: an included feature with walkability outside the bucket
/// domain still counts toward the scalars, and a malformed area drops only
/// that feature's area-histogram contribution.
pub fn aggregate(store: &FeatureStore, range: &RangeState) -> AggregationResult {
    let mut matched_count = 0_u64;
    let mut walk_sum = 0.0;
    let mut pop_sum = 0.0;
    let mut area_histogram = [0.0; BUCKET_COUNT];
    let mut population_histogram = [0.0; BUCKET_COUNT];

    for feature in store.iter() {
        let class = classify(feature, range);
        if !class.included {
            continue;
        }
        let Some(walkability) = class.walkability else {
            continue;
        };

        matched_count += 1;
        walk_sum += walkability;
        if range.has_population {
            if let Some(pop) = class.population {
                pop_sum += pop;
            }
        }

        if let Some(bucket) = bucket_index(walkability) {
            if let Some(area) = feature.area.as_number() {
                area_histogram[bucket] += area;
            }
            if range.has_population {
                if let Some(pop) = class.population {
                    population_histogram[bucket] += pop;
                }
            }
        }
    }

    AggregationResult {
        matched_count,
        average_walkability: (matched_count > 0).then(|| walk_sum / matched_count as f64),
        total_population: range.has_population.then_some(pop_sum),
        area_histogram,
        population_histogram,
    }
}
