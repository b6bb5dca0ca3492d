// Terminal front-end for the league dashboard. Re-exports the `tui` module
// tree so widget and input code can be tested.

pub mod tui;
