use std::sync::LazyLock;

pub const ICON_CHART: &str = "📊";
pub const ICON_CLOCK: &str = "🕓";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_REFRESH: &str = "🔄";

pub struct UiText {
    // --- Top panel ---
    pub app_title: String,
    pub label_pair: String,
    pub hover_listed_on: String,
    pub label_poll_every: String,

    // --- Table ---
    pub table_heading: String,
    pub col_exchange: String,
    pub col_last_traded: String,
    pub col_best_buy: String,
    pub col_best_sell: String,
    pub col_volume: String,
    pub col_timestamp: String,
    pub table_empty: String,
    pub timestamp_unknown: String,

    // --- Chart ---
    pub chart_heading: String,
    pub series_last_traded: String,
    pub series_best_buy: String,
    pub series_best_sell: String,
    pub axis_price: String,

    // --- Waiting screen ---
    pub ws_title: String,
    pub ws_fetching: String,
    pub ws_elapsed: String,
    pub err_startup: String,

    // --- Status bar ---
    pub sb_updated: String,
    pub sb_never: String,
    pub sb_in_flight: String,
    pub sb_dropped: String,
    pub sb_error: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: format!("{} Arb Board", ICON_CHART),
    label_pair: "Pair".to_string(),
    hover_listed_on: "Listed on".to_string(),
    label_poll_every: format!("{} every", ICON_REFRESH),

    table_heading: "Markets".to_string(),
    col_exchange: "Exchange".to_string(),
    col_last_traded: "Last Traded".to_string(),
    col_best_buy: "Best Buy".to_string(),
    col_best_sell: "Best Sell".to_string(),
    col_volume: "Volume (24h)".to_string(),
    col_timestamp: "Updated".to_string(),
    table_empty: "No exchange quotes this pair right now.".to_string(),
    timestamp_unknown: "-".to_string(),

    chart_heading: "Prices by exchange".to_string(),
    series_last_traded: "Last Traded Price".to_string(),
    series_best_buy: "Best Buy Price".to_string(),
    series_best_sell: "Best Sell Price".to_string(),
    axis_price: "Price".to_string(),

    ws_title: "Waiting for market data".to_string(),
    ws_fetching: "Fetching".to_string(),
    ws_elapsed: "Waited".to_string(),
    err_startup: "Market feed unavailable".to_string(),

    sb_updated: format!("{} Updated", ICON_CLOCK),
    sb_never: "never".to_string(),
    sb_in_flight: "in flight".to_string(),
    sb_dropped: "stale dropped".to_string(),
    sb_error: format!("{} Last fetch failed:", ICON_WARNING),
});

impl UiText {
    /// Table header, in column order.
    pub fn table_columns(&self) -> [&str; 6] {
        [
            self.col_exchange.as_str(),
            self.col_last_traded.as_str(),
            self.col_best_buy.as_str(),
            self.col_best_sell.as_str(),
            self.col_volume.as_str(),
            self.col_timestamp.as_str(),
        ]
    }
}
