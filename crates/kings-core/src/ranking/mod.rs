// Ranking pipeline: statistic selection, filtering, ordering, and the
// display-value rule for paired count/percentage statistics.

pub mod display;
pub mod pairs;
pub mod pipeline;
pub mod selectors;

pub use display::{display_value, DisplayValue, StatLookup};
pub use pipeline::{rank, DisplayRow, RankOutcome, TeamFilter};
