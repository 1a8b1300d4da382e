pub mod classify;
pub mod dimord;
pub mod graph_metrics;
pub mod record;
