use super::AggregationResult;

/// Marker shown when a statistic is structurally unavailable.
pub const UNAVAILABLE: &str = "—";

/// The three formatted strings consumed by the stat panel.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLines {
    pub matched_count: String,
    pub average_walkability: String,
    pub total_population: String,
}

impl StatLines {
    pub fn render(result: &AggregationResult) -> Self {
        Self {
            matched_count: group_thousands(result.matched_count as f64),
            average_walkability: result
                .average_walkability
                .map_or_else(|| UNAVAILABLE.to_string(), |avg| format!("{avg:.2}")),
            total_population: result
                .total_population
                .map_or_else(|| UNAVAILABLE.to_string(), group_thousands),
        }
    }
}

/// Render an integral quantity with grouped thousands, e.g. `1,234,567`.
pub fn group_thousands(value: f64) -> String {
    let raw = format!("{}", value.round() as i64);
    let (sign, digits) = raw.strip_prefix('-').map_or(("", raw.as_str()), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
