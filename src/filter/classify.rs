use crate::store::Feature;

use super::RangeState;

/// Outcome of classifying one feature against the current bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub included: bool,
    /// Parsed walkability value, `None` when the attribute is malformed.
    pub walkability: Option<f64>,
    /// Parsed population value, `None` when absent or malformed.
    pub population: Option<f64>,
}

impl Classification {
    const EXCLUDED: Self = Self { included: false, walkability: None, population: None };
}

/// Decide whether `feature` passes the current filter bounds.
///
/// Walkability is mandatory: a feature whose walkability attribute fails to
/// parse contributes to nothing. The population gate is asymmetric: when
/// the dataset as a whole carries no population data the gate
/// always passes, but in a population-bearing dataset a feature whose own
/// population fails to parse does not get a free pass.
pub fn classify(feature: &Feature, range: &RangeState) -> Classification {
    let Some(walkability) = feature.walkability.as_number() else {
        return Classification::EXCLUDED;
    };
    let population = feature.population.as_number();

    let walk_ok = walkability >= range.walk_min && walkability <= range.walk_max;
    let pop_ok = if range.has_population {
        population.is_some_and(|p| p >= range.pop_min && p <= range.pop_max)
    } else {
        true
    };

    Classification { included: walk_ok && pop_ok, walkability: Some(walkability), population }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AttrValue;

    fn feature(walkability: AttrValue, population: AttrValue) -> Feature {
        Feature { id: None, walkability, area: AttrValue::Absent, population }
    }

    fn range(has_population: bool) -> RangeState {
        RangeState {
            walk_min: 1.0,
            walk_max: 20.0,
            pop_min: 0.0,
            pop_max: 10_000.0,
            has_population,
        }
    }

    #[test]
    fn malformed_walkability_excludes_unconditionally() {
        let f = feature(AttrValue::Text("abc".into()), AttrValue::Number(500.0));
        let class = classify(&f, &range(true));
        assert!(!class.included);
        assert_eq!(class.walkability, None);
        assert_eq!(class.population, None);
    }

    #[test]
    fn population_gate_is_inert_without_dataset_population() {
        let f = feature(AttrValue::Number(10.0), AttrValue::Absent);
        assert!(classify(&f, &range(false)).included);
    }

    #[test]
    fn missing_population_fails_gate_in_population_bearing_dataset() {
        let f = feature(AttrValue::Number(10.0), AttrValue::Absent);
        let class = classify(&f, &range(true));
        assert!(!class.included);
        assert_eq!(class.walkability, Some(10.0));
    }

    #[test]
    fn both_gates_must_pass() {
        let f = feature(AttrValue::Number(10.0), AttrValue::Number(500.0));
        let mut r = range(true);
        assert!(classify(&f, &r).included);

        r.walk_max = 9.0;
        assert!(!classify(&f, &r).included);

        r.walk_max = 20.0;
        r.pop_max = 400.0;
        assert!(!classify(&f, &r).included);
    }
}
