/// Fixed total-score to percentile lookup. The ladder is a published
/// business rule, not an empirical distribution.
const PERCENTILE_LADDER: &[(f64, f64)] = &[
    (90.0, 95.0),
    (85.0, 90.0),
    (80.0, 85.0),
    (75.0, 80.0),
    (70.0, 75.0),
    (65.0, 70.0),
    (60.0, 65.0),
    (55.0, 60.0),
    (50.0, 55.0),
    (45.0, 50.0),
    (40.0, 45.0),
];

pub(crate) fn percentile_for(total_score: f64) -> f64 {
    for (threshold, percentile) in PERCENTILE_LADDER {
        if total_score >= *threshold {
            return *percentile;
        }
    }
    // below the ladder, scale linearly down to a floor of 5
    (total_score / 40.0 * 45.0).max(5.0)
}
