//! Debugging feature flags.

pub struct LogFlags {
    /// Log every fetch issued and every snapshot applied.
    pub log_fetches: bool,

    /// Log responses dropped because a newer request or a different pair superseded them.
    pub log_stale_drops: bool,

    /// Anything about the pair selector
    pub log_selection: bool,

    /// Chart construction and axis recalculation
    pub log_chart: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: false,
    log_stale_drops: true,
    log_selection: true,
    log_chart: false,
};
