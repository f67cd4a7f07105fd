use chrono::{DateTime, Local};

/// What the status bar shows about the feed.
#[derive(Debug, Clone, Default)]
pub struct FeedStatus {
    /// Wall-clock time of the last applied snapshot.
    pub last_success: Option<DateTime<Local>>,
    /// Last failure since the last applied snapshot. Cleared on success.
    pub last_error: Option<String>,
    pub in_flight: usize,
    pub fetches_issued: u64,
    pub snapshots_applied: u64,
    pub stale_dropped: u64,
    pub failures: u64,
}

impl FeedStatus {
    pub(crate) fn record_issue(&mut self) {
        self.in_flight += 1;
        self.fetches_issued += 1;
    }

    pub(crate) fn record_return(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub(crate) fn record_success(&mut self) {
        self.last_success = Some(Local::now());
        self.last_error = None;
        self.snapshots_applied += 1;
    }

    pub(crate) fn record_failure(&mut self, message: String) {
        self.last_error = Some(message);
        self.failures += 1;
    }

    pub(crate) fn record_stale(&mut self) {
        self.stale_dropped += 1;
    }
}
