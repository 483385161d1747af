//! "Time since post" labels.

use chrono::{DateTime, Utc};

/// Format `posted_at` relative to `now`.
///
/// Returns "Just now", "N min ago", "N hr ago", or the calendar date once a
/// post is a day old. Timestamps ahead of `now` read "Just now".
pub fn format_relative_time(posted_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed_min = (now - posted_at).num_minutes();

    if elapsed_min < 1 {
        "Just now".to_string()
    } else if elapsed_min < 60 {
        format!("{} min ago", elapsed_min)
    } else if elapsed_min < 60 * 24 {
        format!("{} hr ago", elapsed_min / 60)
    } else {
        posted_at.format("%Y-%m-%d").to_string()
    }
}
