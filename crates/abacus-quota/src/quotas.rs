//! Static free-tier quota configuration.
//!
//! Every model on the Qwen free tier currently carries the same allowance of
//! one million tokens for the 180-day activation window. The table is
//! embedded, read-only configuration; it is not derived from logged data.
//! Slice order is the display order.

/// Free-token allowance per model.
pub const FREE_QUOTA_TOKENS: u64 = 1_000_000;

/// Length of the quota validity window, in days from activation.
pub const QUOTA_WINDOW_DAYS: i64 = 180;

/// Models covered by the free tier, in display order.
pub const FREE_TIER_MODELS: [&str; 16] = [
    "qwen-max",
    "qwen-plus",
    "qwen-turbo",
    "qwen3-coder-plus",
    "qwen3-coder-turbo",
    "qwq-plus",
    "qvq-max",
    "qwen-vl-max",
    "qwen-vl-plus",
    "qwen-omni-turbo",
    "qwen3-72b-instruct",
    "qwen3-32b-instruct",
    "qwen3-8b-instruct",
    "qwen3-7b-instruct",
    "qwen3-1.5b-instruct",
    "qwen3-0.5b-instruct",
];

/// Models the report renderer always shows, even with zero usage.
pub const DEFAULT_DISPLAY_MODELS: [&str; 4] =
    ["qwen3-coder-plus", "qwen-plus", "qwen-turbo", "qwen-max"];

/// Free-token allowance for `model`, or `None` when the model is not on the
/// free tier. Unknown models are tolerated in the log but never tallied.
pub fn quota_for(model: &str) -> Option<u64> {
    FREE_TIER_MODELS
        .contains(&model)
        .then_some(FREE_QUOTA_TOKENS)
}
