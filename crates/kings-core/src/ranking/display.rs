// Display value for a single statistic row.
//
// Count statistics with a companion percentage are shown as
// "P% (T de D)", where D is the attempt count implied by the count T and the
// percentage P. Everything else is shown as its truncated integer total, or
// "-" when the total is missing.

use std::fmt;

use super::pairs::paired_code;
use crate::data::{LeagueData, StatRecord};

/// Placeholder shown for a missing total.
pub const MISSING_VALUE: &str = "-";

/// Lookup of a player's statistic row by code.
///
/// Implemented by `LeagueData` (indexed) and by plain slices (linear scan).
pub trait StatLookup {
    /// First row for `player_id` whose `stat_code` matches.
    fn find_stat(&self, player_id: &str, stat_code: &str) -> Option<&StatRecord>;
}

impl StatLookup for LeagueData {
    fn find_stat(&self, player_id: &str, stat_code: &str) -> Option<&StatRecord> {
        LeagueData::find_stat(self, player_id, stat_code)
    }
}

impl StatLookup for [StatRecord] {
    fn find_stat(&self, player_id: &str, stat_code: &str) -> Option<&StatRecord> {
        self.iter()
            .find(|r| r.player_id == player_id && r.stat_code == stat_code)
    }
}

/// Formatted value of a statistic row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Count with its companion percentage and implied denominator.
    Paired {
        pct: i64,
        total: i64,
        denominator: i64,
    },
    /// Plain integer total.
    Count(i64),
    /// No usable total.
    Missing,
}

impl DisplayValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, DisplayValue::Missing)
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Paired {
                pct,
                total,
                denominator,
            } => write!(f, "{pct}% ({total} de {denominator})"),
            DisplayValue::Count(n) => write!(f, "{n}"),
            DisplayValue::Missing => f.write_str(MISSING_VALUE),
        }
    }
}

/// Compute the display value of `record`, resolving its percentage partner
/// through `lookup` (the full statistics table, not a filtered subset).
///
/// Rounding: the percentage and the implied denominator round to nearest with
/// ties to even; the count itself is truncated. A non-positive percentage
/// yields a denominator of 0.
pub fn display_value<L>(record: &StatRecord, lookup: &L) -> DisplayValue
where
    L: StatLookup + ?Sized,
{
    let total = record.total();

    if let Some(pct_code) = paired_code(&record.stat_code) {
        let pct = lookup
            .find_stat(&record.player_id, pct_code)
            .and_then(StatRecord::total);
        if let (Some(pct), Some(total)) = (pct, total) {
            let denominator = if pct > 0.0 {
                (total * 100.0 / pct).round_ties_even() as i64
            } else {
                0
            };
            return DisplayValue::Paired {
                pct: pct.round_ties_even() as i64,
                total: total.trunc() as i64,
                denominator,
            };
        }
    }

    match total {
        Some(value) => DisplayValue::Count(value.trunc() as i64),
        None => DisplayValue::Missing,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::stat;

    fn shown(record: &StatRecord, table: &[StatRecord]) -> String {
        display_value(record, table).to_string()
    }

    #[test]
    fn paired_count_reconstructs_denominator() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", Some(5.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(50.0)),
        ];
        assert_eq!(shown(&table[0], &table), "50% (5 de 10)");
        assert_eq!(
            display_value(&table[0], table.as_slice()),
            DisplayValue::Paired {
                pct: 50,
                total: 5,
                denominator: 10
            }
        );
    }

    #[test]
    fn zero_percentage_reports_zero_denominator() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", Some(5.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(0.0)),
        ];
        assert_eq!(shown(&table[0], &table), "0% (5 de 0)");
    }

    #[test]
    fn negative_percentage_reports_zero_denominator() {
        let table = vec![
            stat("1", "A", "TIR", "Shots", Some(4.0)),
            stat("1", "A", "TIR-X", "Shot accuracy", Some(-12.4)),
        ];
        assert_eq!(shown(&table[0], &table), "-12% (4 de 0)");
    }

    #[test]
    fn unpaired_match_falls_back_to_integer_total() {
        let table = vec![
            stat("1", "A", "ASS-V", "Assists", Some(3.0)),
            stat("2", "A", "ASS-X", "Assist pct", Some(60.0)),
        ];
        assert_eq!(display_value(&table[0], table.as_slice()), DisplayValue::Count(3));
        assert_eq!(shown(&table[0], &table), "3");
    }

    #[test]
    fn code_without_pair_uses_truncated_total() {
        let table = vec![stat("1", "A", "MVP", "MVP", Some(2.9))];
        assert_eq!(shown(&table[0], &table), "2");
    }

    #[test]
    fn missing_total_shows_placeholder() {
        let table = vec![
            stat("1", "A", "MVP", "MVP", None),
            stat("2", "A", "MVP", "MVP", Some(f64::NAN)),
        ];
        assert_eq!(shown(&table[0], &table), "-");
        assert_eq!(shown(&table[1], &table), "-");
    }

    #[test]
    fn paired_code_with_missing_total_shows_placeholder() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", None),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(50.0)),
        ];
        assert_eq!(shown(&table[0], &table), "-");
    }

    #[test]
    fn missing_percentage_total_falls_back() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", Some(5.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", None),
        ];
        assert_eq!(shown(&table[0], &table), "5");
    }

    #[test]
    fn first_percentage_row_wins() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", Some(5.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(25.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(50.0)),
        ];
        assert_eq!(shown(&table[0], &table), "25% (5 de 20)");
    }

    // Rounding is to nearest, halves to even.

    #[test]
    fn denominator_half_rounds_to_even() {
        // 1 / 0.40 = 2.5 and 3 / 0.40 = 7.5 exactly
        let table = vec![
            stat("1", "A", "PLP", "Penalties", Some(1.0)),
            stat("1", "A", "PLP-X", "Penalty pct", Some(40.0)),
            stat("2", "A", "PLP", "Penalties", Some(3.0)),
            stat("2", "A", "PLP-X", "Penalty pct", Some(40.0)),
        ];
        assert_eq!(shown(&table[0], &table), "40% (1 de 2)");
        assert_eq!(shown(&table[2], &table), "40% (3 de 8)");
    }

    #[test]
    fn denominator_rounds_to_nearest_not_down() {
        // 2 / 0.30 = 6.67
        let table = vec![
            stat("1", "A", "DUL-V", "Duels won", Some(2.0)),
            stat("1", "A", "DUL-VX", "Duel pct", Some(30.0)),
        ];
        assert_eq!(shown(&table[0], &table), "30% (2 de 7)");
    }

    #[test]
    fn percentage_is_rounded_for_display() {
        // 7 / 0.625 = 11.2
        let table = vec![
            stat("1", "A", "PAS-CR", "Crosses", Some(7.0)),
            stat("1", "A", "PAS-CRX", "Cross pct", Some(62.5)),
        ];
        assert_eq!(shown(&table[0], &table), "62% (7 de 11)");
    }

    #[test]
    fn percentage_half_rounds_to_even() {
        let table = vec![
            stat("1", "A", "GOL-R", "Goals", Some(1.0)),
            stat("1", "A", "GOL-R-X", "Goal accuracy", Some(12.5)),
            stat("2", "A", "GOL-R", "Goals", Some(3.0)),
            stat("2", "A", "GOL-R-X", "Goal accuracy", Some(37.5)),
        ];
        assert_eq!(shown(&table[0], &table), "12% (1 de 8)");
        assert_eq!(shown(&table[2], &table), "38% (3 de 8)");
    }

    #[test]
    fn indexed_and_scanned_lookups_agree() {
        let rows = vec![
            stat("1", "A", "GOL-D", "Goals", Some(3.0)),
            stat("1", "A", "GOL-D-X", "Goal pct", Some(30.0)),
            stat("2", "B", "GOL-D", "Goals", Some(4.0)),
        ];
        let data = LeagueData::new(vec![], rows.clone());
        for record in &rows {
            assert_eq!(
                display_value(record, &data),
                display_value(record, rows.as_slice())
            );
        }
    }
}
