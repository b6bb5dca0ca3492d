// Choices offered by the sidebar selectors and the statistic description.

use std::collections::BTreeSet;

use crate::data::LeagueData;

/// Statistic names for the selector: featured names present in the data, in
/// the given order, then every other name alphabetically.
pub fn stat_choices(data: &LeagueData, featured: &[String]) -> Vec<String> {
    let present: BTreeSet<&str> = data
        .stats()
        .iter()
        .map(|r| r.stat_name.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    let mut choices: Vec<String> = featured
        .iter()
        .filter(|name| present.contains(name.as_str()))
        .cloned()
        .collect();
    choices.extend(
        present
            .into_iter()
            .filter(|name| !featured.iter().any(|f| f == name))
            .map(str::to_string),
    );
    choices
}

/// Distinct non-empty team names, sorted.
pub fn team_choices(data: &LeagueData) -> Vec<String> {
    data.stats()
        .iter()
        .map(|r| r.team_name.as_str())
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// First non-empty description recorded for the statistic.
pub fn stat_description<'a>(data: &'a LeagueData, stat_name: &str) -> Option<&'a str> {
    data.stats()
        .iter()
        .filter(|r| r.stat_name == stat_name)
        .find_map(|r| r.stat_description.as_deref())
}
