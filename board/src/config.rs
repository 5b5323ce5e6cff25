//! Timing configuration for transient UI feedback.

use std::time::Duration;

pub const DEFAULT_UNREGISTER_NOTICE_MS: u64 = 4_000;
pub const DEFAULT_SIGNUP_NOTICE_MS: u64 = 5_000;
pub const DEFAULT_HIGHLIGHT_MS: u64 = 1_200;

/// How long banners and card highlights stay visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    /// Banner lifetime for every unregister outcome.
    pub unregister_notice: Duration,
    /// Banner lifetime for every signup outcome.
    pub signup_notice: Duration,
    /// Lifetime of the `activity-updated` card class.
    pub highlight: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            unregister_notice: Duration::from_millis(DEFAULT_UNREGISTER_NOTICE_MS),
            signup_notice: Duration::from_millis(DEFAULT_SIGNUP_NOTICE_MS),
            highlight: Duration::from_millis(DEFAULT_HIGHLIGHT_MS),
        }
    }
}
