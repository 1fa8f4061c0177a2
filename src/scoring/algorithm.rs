use crate::{
    models::{KillCounts, ScoreEntry},
    scoring::PointsTable,
};

/// Weight every positive kill count by the points table.
///
/// Bosses with zero kills or no weight are left out of the breakdown. The breakdown is
/// sorted by points, highest first; equal points keep their kill-count order.
pub fn compute_points(kill_counts: &KillCounts, table: &PointsTable) -> (f64, Vec<ScoreEntry>) {
    let mut breakdown: Vec<ScoreEntry> = kill_counts
        .iter()
        .filter(|(_, count)| *count > 0)
        .filter_map(|(category, count)| {
            table.weight(category).map(|weight| ScoreEntry {
                category: category.to_string(),
                count,
                points: weight * count as f64,
            })
        })
        .collect();

    let total = breakdown.iter().map(|entry| entry.points).sum();

    // sort_by is stable
    breakdown.sort_by(|a, b| b.points.total_cmp(&a.points));

    (total, breakdown)
}
