use chrono::{DateTime, Local};

/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    pub const MS_IN_MIN: i64 = 60 * Self::MS_IN_S;
    pub const MS_IN_H: i64 = 60 * Self::MS_IN_MIN;
    pub const LOCAL_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";

    /// Short label for a poll interval: "500ms", "1s", "90s", "5m", "2h".
    pub fn interval_to_string(interval_ms: i64) -> String {
        match interval_ms {
            ms if ms >= Self::MS_IN_H && ms % Self::MS_IN_H == 0 => format!("{}h", ms / Self::MS_IN_H),
            ms if ms >= Self::MS_IN_MIN && ms % Self::MS_IN_MIN == 0 => {
                format!("{}m", ms / Self::MS_IN_MIN)
            }
            ms if ms >= Self::MS_IN_S && ms % Self::MS_IN_S == 0 => format!("{}s", ms / Self::MS_IN_S),
            ms => format!("{}ms", ms),
        }
    }
}

// Time Helper functions

/// Epoch seconds as sent by the market service -> local date and time for display.
pub fn epoch_sec_to_local(epoch_sec: i64) -> Option<String> {
    epoch_ms_to_local(epoch_sec.checked_mul(TimeUtils::MS_IN_S)?)
}

pub fn epoch_ms_to_local(epoch_ms: i64) -> Option<String> {
    let dt = DateTime::from_timestamp_millis(epoch_ms)?.with_timezone(&Local);
    Some(dt.format(TimeUtils::LOCAL_TIME_FORMAT).to_string())
}

pub fn format_clock(dt: &DateTime<Local>) -> String {
    dt.format(TimeUtils::CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn seconds_are_scaled_to_millis_then_localized() {
        let expected = Local
            .timestamp_millis_opt(1_700_000_000_000)
            .single()
            .unwrap()
            .format("%Y-%m-%d %H:%M:%S")
            .to_string();
        assert_eq!(epoch_sec_to_local(1_700_000_000), Some(expected));
    }

    #[test]
    fn interval_labels_use_largest_whole_unit() {
        assert_eq!(TimeUtils::interval_to_string(1000), "1s");
        assert_eq!(TimeUtils::interval_to_string(90_000), "90s");
        assert_eq!(TimeUtils::interval_to_string(300_000), "5m");
        assert_eq!(TimeUtils::interval_to_string(7_200_000), "2h");
        assert_eq!(TimeUtils::interval_to_string(250), "250ms");
    }

    #[test]
    fn unrepresentable_timestamps_yield_none() {
        assert_eq!(epoch_sec_to_local(i64::MAX), None);
    }
}
