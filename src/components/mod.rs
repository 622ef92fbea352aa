//! Presentational components: they render controller state and forward user
//! intents upward via callbacks.

pub mod chart;
pub mod common;
pub mod filter_bar;
pub mod layout;
pub mod lead_table;
pub mod pagination;
pub mod sources;
