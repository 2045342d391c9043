//! Eddington number over per-day distances

/// Compute the Eddington number of a distance distribution.
///
/// E is the largest integer such that at least E distinct days each have a
/// recorded distance of at least E kilometers. Callers pass one distance per
/// day (e.g. `DailySummary::distance_km`), already in kilometers.
///
/// NaN entries are discarded. The scan runs over the full sorted-descending
/// sequence rather than stopping at the first failing rank, so the result is
/// the true maximum even for duplicate-heavy distributions. Pure in the
/// multiset of inputs; order does not matter; empty input yields 0.
pub fn eddington_number(distances_km: &[f64]) -> u32 {
    let mut days: Vec<f64> = distances_km
        .iter()
        .copied()
        .filter(|d| !d.is_nan())
        .collect();
    days.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

    let mut e = 0;
    for (i, distance) in days.iter().enumerate() {
        let rank = (i + 1) as u32;
        if *distance >= f64::from(rank) {
            e = rank;
        }
    }
    e
}
