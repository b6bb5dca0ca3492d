// Count statistics that have a companion percentage statistic.

/// `(count code, percentage code)` pairs.
pub const STAT_PAIRS: &[(&str, &str)] = &[
    ("GOL-R-ALL", "GOL-R-ALL-X"),
    ("GOL-R", "GOL-R-X"),
    ("GOL-D", "GOL-D-X"),
    ("TIR", "TIR-X"),
    ("ASS-V", "ASS-X"),
    ("DRB-R", "DRB-RX"),
    ("PLP", "PLP-X"),
    ("DUL-V", "DUL-VX"),
    ("PAS-CR", "PAS-CRX"),
];

/// Percentage code paired with the given count code, if any.
pub fn paired_code(stat_code: &str) -> Option<&'static str> {
    STAT_PAIRS
        .iter()
        .find(|(count, _)| *count == stat_code)
        .map(|(_, pct)| *pct)
}
