// Core of the league dashboard: configuration, data loading, and the ranking
// pipeline. The terminal front-end lives in `kings-tui`.

pub mod config;
pub mod data;
pub mod pages;
pub mod ranking;
