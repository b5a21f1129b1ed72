//! Flattening of a profiling summary into export records.

use dataide_model::{MetricValue, ProfileLevel, ProfileRecord, ProfilingSummary};

/// Flattens a summary into `table`, `column` and `correlation` records.
///
/// Per table: one `row_count` record, then one record per stat key of each
/// column in serialized key order, then one record per unordered column pair
/// `i < j` of the correlation block, named `"a~b"`. Undefined coefficients
/// carry [`MetricValue::Missing`].
pub fn profile_to_rows(summary: &ProfilingSummary) -> Vec<ProfileRecord> {
    let mut records = Vec::new();
    for (table, profile) in summary {
        records.push(ProfileRecord {
            level: ProfileLevel::Table,
            table: table.clone(),
            column: String::new(),
            metric: "row_count".to_string(),
            value: MetricValue::Count(profile.row_count),
        });

        for (column, stats) in &profile.columns {
            records.extend(stats.metrics().into_iter().map(|(metric, value)| ProfileRecord {
                level: ProfileLevel::Column,
                table: table.clone(),
                column: column.clone(),
                metric: metric.to_string(),
                value,
            }));
        }

        let Some(matrix) = &profile.correlation else {
            continue;
        };
        let names: Vec<&String> = matrix.keys().collect();
        for (i, left) in names.iter().enumerate() {
            for right in &names[i + 1..] {
                let coefficient = matrix
                    .get(*left)
                    .and_then(|row| row.get(*right))
                    .copied()
                    .flatten();
                records.push(ProfileRecord {
                    level: ProfileLevel::Correlation,
                    table: table.clone(),
                    column: String::new(),
                    metric: format!("{left}~{right}"),
                    value: coefficient.map_or(MetricValue::Missing, MetricValue::Float),
                });
            }
        }
    }
    records
}
