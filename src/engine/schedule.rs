use std::time::Duration;

use crate::utils::AppInstant;

/// Fixed-interval timer driven by the UI loop. Fires immediately the first time it is asked.
#[derive(Debug, Clone)]
pub struct PollSchedule {
    interval: Duration,
    last_fired: Option<AppInstant>,
}

impl PollSchedule {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn has_fired(&self) -> bool {
        self.last_fired.is_some()
    }

    pub fn is_due(&self, now: AppInstant) -> bool {
        match self.last_fired {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        }
    }

    pub fn mark_fired(&mut self, now: AppInstant) {
        self.last_fired = Some(now);
    }

    /// How long the UI may sleep before the next timer fetch.
    pub fn time_until_due(&self, now: AppInstant) -> Duration {
        match self.last_fired {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_immediately_then_on_interval() {
        let start = AppInstant::now();
        let mut schedule = PollSchedule::new(Duration::from_millis(1000));
        assert!(schedule.is_due(start));
        assert_eq!(schedule.time_until_due(start), Duration::ZERO);

        schedule.mark_fired(start);
        assert!(!schedule.is_due(start + Duration::from_millis(999)));
        assert_eq!(
            schedule.time_until_due(start + Duration::from_millis(400)),
            Duration::from_millis(600)
        );
        assert!(schedule.is_due(start + Duration::from_millis(1000)));
        assert_eq!(
            schedule.time_until_due(start + Duration::from_secs(5)),
            Duration::ZERO
        );
    }
}
