//! Report rows built from accumulated endpoint statistics.

use report_core::formatting::format_average;
use report_core::models::{ReportRow, StatsTable};

/// Stateless helper that turns a [`StatsTable`] into report rows.
pub struct ReportBuilder;

impl ReportBuilder {
    /// One row per endpoint, in first-seen order, indexed from zero.
    ///
    /// An empty table yields no rows.
    pub fn build(table: &StatsTable) -> Vec<ReportRow> {
        table
            .iter()
            .enumerate()
            .map(|(index, (url, stats))| ReportRow {
                index,
                url: url.to_string(),
                count: stats.count,
                avg_response_time: format_average(stats.average()),
            })
            .collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, url: &str, count: u64, avg: &str) -> ReportRow {
        ReportRow {
            index,
            url: url.to_string(),
            count,
            avg_response_time: avg.to_string(),
        }
    }

    #[test]
    fn test_build_rows_in_first_seen_order() {
        let mut table = StatsTable::new();
        table.record("/api/users", 0.1);
        table.record("/api/products", 0.2);
        table.record("/api/users", 0.3);

        let report = ReportBuilder::build(&table);
        assert_eq!(
            report,
            vec![
                row(0, "/api/users", 2, "0.200"),
                row(1, "/api/products", 1, "0.200"),
            ]
        );
    }

    #[test]
    fn test_build_empty_stats() {
        assert!(ReportBuilder::build(&StatsTable::new()).is_empty());
    }

    #[test]
    fn test_zero_count_entry_averages_to_zero() {
        let mut table = StatsTable::new();
        table.entry_mut("/never-hit");

        let report = ReportBuilder::build(&table);
        assert_eq!(report, vec![row(0, "/never-hit", 0, "0.000")]);
    }

    #[test]
    fn test_indices_follow_first_seen_order() {
        let mut table = StatsTable::new();
        for url in ["/c", "/a", "/b", "/a", "/c"] {
            table.record(url, 1.0);
        }

        let report = ReportBuilder::build(&table);
        let indexed: Vec<(usize, &str)> =
            report.iter().map(|r| (r.index, r.url.as_str())).collect();
        assert_eq!(indexed, vec![(0, "/c"), (1, "/a"), (2, "/b")]);
    }

    #[test]
    fn test_build_is_repeatable() {
        let mut table = StatsTable::new();
        table.record("/x", 0.123_456);
        table.record("/y", 10.0);
        assert_eq!(ReportBuilder::build(&table), ReportBuilder::build(&table));
        assert_eq!(ReportBuilder::build(&table)[0].avg_response_time, "0.123");
    }
}
