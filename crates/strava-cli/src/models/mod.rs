mod activity;

pub use activity::{ActivityRecord, NormalizedActivity, DEFAULT_SPORT_TYPE};
