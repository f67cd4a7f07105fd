mod market_table;
mod price_chart;
mod screens;
mod ui_config;
mod ui_render;
mod ui_text;

pub use market_table::{COLUMN_COUNT, MarketTable, TableRow};
pub use price_chart::{AxisBounds, BarChartModel, ChartState, PriceChart, PriceSeries};

pub(crate) use screens::render_waiting;

pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_render::render_fullscreen_message;
pub(crate) use ui_text::{ICON_WARNING, UI_TEXT};
