//! Pure aggregation layer over the normalized activity dataset
//!
//! Everything in this module is synchronous and side-effect free: each
//! function reads a borrowed dataset and returns a new value. Callers are
//! expected to normalize once (see [`normalize`]) and feed the result to the
//! aggregators; normalization is an explicit pipeline stage, not something
//! each aggregator redoes internally.

mod eddington;
mod filter;
mod normalize;
mod summary;

pub use eddington::eddington_number;
pub use filter::ActivityFilter;
pub use normalize::{normalize, renormalize};
pub use summary::{
    daily_summary, gear_distance, totals, weekly_summary, DailySummary, GearSummary, Totals,
    WeeklySummary,
};
