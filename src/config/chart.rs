//! Price chart configuration

use eframe::egui::Color32;

pub struct SeriesStyle {
    pub fill: Color32,
    pub border: Color32,
}

pub struct ChartConfig {
    /// Y-axis floor is the lowest price scaled by this factor
    pub floor_factor: f64,
    /// Y-axis ceiling is the highest price scaled by this factor
    pub ceil_factor: f64,
    /// Tick step = price range / tick_divisions
    pub tick_divisions: u32,
    /// Most y grid lines drawn; a narrower tick step is widened to span / tick_divisions
    pub max_grid_lines: u32,
    /// Width taken by one exchange's group of bars (x units, one exchange per unit)
    pub group_width: f64,
    pub border_width: f32,
    pub height: f32,

    pub last_traded: SeriesStyle,
    pub best_buy: SeriesStyle,
    pub best_sell: SeriesStyle,
}

// Fills are premultiplied at 20% alpha.
pub const CHART_CONFIG: ChartConfig = ChartConfig {
    floor_factor: 0.98,
    ceil_factor: 1.02,
    tick_divisions: 5,
    max_grid_lines: 50,
    group_width: 0.8,
    border_width: 1.0,
    height: 320.0,

    last_traded: SeriesStyle {
        fill: Color32::from_rgba_premultiplied(15, 38, 38, 51),
        border: Color32::from_rgb(75, 192, 192), // Teal
    },
    best_buy: SeriesStyle {
        fill: Color32::from_rgba_premultiplied(11, 32, 47, 51),
        border: Color32::from_rgb(54, 162, 235), // Blue
    },
    best_sell: SeriesStyle {
        fill: Color32::from_rgba_premultiplied(51, 20, 26, 51),
        border: Color32::from_rgb(255, 99, 132), // Pink
    },
};
