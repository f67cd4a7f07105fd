use std::ops::RangeInclusive;

use {
    eframe::egui::{Stroke, Ui},
    egui_plot::{Bar, BarChart, GridMark, Legend, Plot},
    strum::IntoEnumIterator,
    strum_macros::EnumIter,
};

use crate::{
    config::{CHART_CONFIG, DF, SeriesStyle},
    domain::Quote,
    ui::UI_TEXT,
    utils::min_max,
};

/// The three prices compared per exchange, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum PriceSeries {
    LastTraded,
    BestBuy,
    BestSell,
}

impl PriceSeries {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LastTraded => &UI_TEXT.series_last_traded,
            Self::BestBuy => &UI_TEXT.series_best_buy,
            Self::BestSell => &UI_TEXT.series_best_sell,
        }
    }

    pub fn style(self) -> &'static SeriesStyle {
        match self {
            Self::LastTraded => &CHART_CONFIG.last_traded,
            Self::BestBuy => &CHART_CONFIG.best_buy,
            Self::BestSell => &CHART_CONFIG.best_sell,
        }
    }

    fn of(self, quote: &Quote) -> f64 {
        match self {
            Self::LastTraded => quote.last_traded_price.value(),
            Self::BestBuy => quote.best_buy_price.value(),
            Self::BestSell => quote.best_sell_price.value(),
        }
    }
}

/// Y-axis layout derived from the prices on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub floor: f64,
    pub ceil: f64,
    /// Zero when every price is equal. The grid then falls back to egui_plot's own spacing.
    pub tick_step: f64,
}

impl AxisBounds {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let (min, max) = min_max(values)?;
        Some(Self {
            floor: min * CHART_CONFIG.floor_factor,
            ceil: max * CHART_CONFIG.ceil_factor,
            tick_step: (max - min) / CHART_CONFIG.tick_divisions as f64,
        })
    }

    pub fn has_ticks(&self) -> bool {
        self.tick_step > 0.0
    }

    /// Step the y grid is drawn at. `tick_step` when it gives a readable number of lines,
    /// otherwise the drawn range split into `tick_divisions`. `None` leaves egui_plot's default grid.
    pub fn grid_step(&self) -> Option<f64> {
        if !self.has_ticks() {
            return None;
        }
        let range = self.draw_range();
        let span = range.end() - range.start();
        if span / self.tick_step > CHART_CONFIG.max_grid_lines as f64 {
            Some(span / CHART_CONFIG.tick_divisions as f64)
        } else {
            Some(self.tick_step)
        }
    }

    /// Range handed to the plot. All-zero prices collapse floor and ceil, so widen to a unit band.
    pub fn draw_range(&self) -> RangeInclusive<f64> {
        if self.ceil > self.floor {
            self.floor..=self.ceil
        } else {
            (self.floor - 1.0)..=(self.ceil + 1.0)
        }
    }
}

/// Data behind the bar chart. Built once, then mutated on every update.
#[derive(Debug, Clone, Default)]
pub struct BarChartModel {
    labels: Vec<String>,
    series: [Vec<f64>; 3],
    axis: Option<AxisBounds>,
}

impl BarChartModel {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self, which: PriceSeries) -> &[f64] {
        &self.series[which.index()]
    }

    pub fn axis(&self) -> Option<AxisBounds> {
        self.axis
    }

    fn load(&mut self, quotes: &[Quote]) {
        self.labels.clear();
        self.labels.extend(quotes.iter().map(|q| q.exchange.clone()));

        for which in PriceSeries::iter() {
            let values = &mut self.series[which.index()];
            values.clear();
            values.extend(quotes.iter().map(|q| which.of(q)));
        }

        let all: Vec<f64> = self.series.iter().flatten().copied().collect();
        if let Some(axis) = AxisBounds::from_values(&all) {
            self.axis = Some(axis);
        }
    }
}

/// Unbound until the first snapshot arrives, Bound to one model for the rest of the session.
#[derive(Debug, Default)]
pub enum ChartState {
    #[default]
    Unbound,
    Bound(BarChartModel),
}

#[derive(Debug, Default)]
pub struct PriceChart {
    state: ChartState,
    constructions: usize,
}

impl PriceChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, quotes: &[Quote]) {
        match &mut self.state {
            ChartState::Unbound => {
                let mut model = BarChartModel::default();
                model.load(quotes);
                self.constructions += 1;
                if DF.log_chart {
                    log::info!("Chart built with {} exchanges", model.labels.len());
                }
                self.state = ChartState::Bound(model);
            }
            ChartState::Bound(model) => model.load(quotes),
        }

        #[cfg(debug_assertions)]
        if DF.log_chart {
            if let Some(axis) = self.model().and_then(|m| m.axis) {
                log::info!(
                    "Chart axis {:.6}..{:.6} step {:.6}",
                    axis.floor,
                    axis.ceil,
                    axis.tick_step
                );
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        matches!(self.state, ChartState::Bound(_))
    }

    /// How many times the model has been built. Never exceeds 1.
    pub fn constructions(&self) -> usize {
        self.constructions
    }

    pub fn model(&self) -> Option<&BarChartModel> {
        match &self.state {
            ChartState::Bound(model) => Some(model),
            ChartState::Unbound => None,
        }
    }

    pub fn render(&self, ui: &mut Ui) {
        let Some(model) = self.model() else {
            return;
        };

        let labels = model.labels.clone();
        let exchange_count = labels.len();
        let bar_width = CHART_CONFIG.group_width / PriceSeries::iter().len() as f64;

        let mut plot = Plot::new("price_chart")
            .height(CHART_CONFIG.height)
            .legend(Legend::default())
            .y_axis_label(UI_TEXT.axis_price.clone())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_double_click_reset(false)
            .x_grid_spacer(move |_input| {
                (0..exchange_count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            });

        if let Some(step) = model.axis.and_then(|a| a.grid_step()) {
            plot = plot.y_grid_spacer(move |input| y_grid_marks(step, input.bounds));
        }

        plot.show(ui, |plot_ui| {
            for which in PriceSeries::iter() {
                let style = which.style();
                let offset =
                    -CHART_CONFIG.group_width / 2.0 + bar_width * (which.index() as f64 + 0.5);
                let bars = model
                    .series(which)
                    .iter()
                    .enumerate()
                    .map(|(x, &price)| {
                        Bar::new(x as f64 + offset, price)
                            .width(bar_width)
                            .fill(style.fill)
                            .stroke(Stroke::new(CHART_CONFIG.border_width, style.border))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(which.label(), bars).color(style.border));
            }

            if let Some(axis) = model.axis {
                plot_ui.set_plot_bounds_x(-0.5..=(exchange_count.max(1) as f64 - 0.5));
                plot_ui.set_plot_bounds_y(axis.draw_range());
            }
        });
    }
}

/// Grid lines at every multiple of `step` inside `bounds`, never more than a few times `max_grid_lines`.
fn y_grid_marks(step: f64, (min, max): (f64, f64)) -> Vec<GridMark> {
    let start = (min / step).ceil() as i64;
    let end = (max / step).floor() as i64;
    let limit = CHART_CONFIG.max_grid_lines as usize * 4;
    (start..=end)
        .take(limit)
        .map(|i| GridMark {
            value: i as f64 * step,
            step_size: step,
        })
        .collect()
}
