// Occupation catalog: static definitions, synthetic series, trend labels,
// and the filtering view-model served to the dashboard.

pub mod builder;
pub mod charts;
pub mod definitions;
pub mod filter;
pub mod handlers;
pub mod series;
pub mod trend;
