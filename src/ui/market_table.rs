use {
    eframe::egui::{RichText, Ui},
    egui_extras::{Column, TableBuilder},
    tabled::{builder::Builder, settings::Style},
};

use crate::{
    domain::Quote,
    ui::{UI_CONFIG, UI_TEXT},
    utils::epoch_sec_to_local,
};

pub const COLUMN_COUNT: usize = 6;

/// One exchange's quote as display text, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub cells: [String; COLUMN_COUNT],
}

impl TableRow {
    pub fn from_quote(quote: &Quote) -> Self {
        let timestamp = epoch_sec_to_local(quote.timestamp_secs)
            .unwrap_or_else(|| UI_TEXT.timestamp_unknown.clone());
        Self {
            cells: [
                quote.exchange.clone(),
                quote.last_traded_price.as_str().to_owned(),
                quote.best_buy_price.as_str().to_owned(),
                quote.best_sell_price.as_str().to_owned(),
                quote.volume_24hr.clone(),
                timestamp,
            ],
        }
    }
}

/// Table view of the latest snapshot. Every update replaces all rows.
#[derive(Debug, Default)]
pub struct MarketTable {
    rows: Vec<TableRow>,
}

impl MarketTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, quotes: &[Quote]) {
        self.rows = quotes.iter().map(TableRow::from_quote).collect();
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn render(&self, ui: &mut Ui) {
        if self.rows.is_empty() {
            ui.label(RichText::new(&UI_TEXT.table_empty).italics());
            return;
        }

        let row_height = UI_CONFIG.table_row_height;
        TableBuilder::new(ui)
            .id_salt("market_table")
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .columns(
                Column::auto().at_least(UI_CONFIG.table_min_col_width),
                COLUMN_COUNT,
            )
            .header(row_height, |mut header| {
                for title in UI_TEXT.table_columns() {
                    header.col(|ui| {
                        ui.label(RichText::new(title).strong().color(UI_CONFIG.colors.heading));
                    });
                }
            })
            .body(|mut body| {
                for row in &self.rows {
                    body.row(row_height, |mut table_row| {
                        for cell in &row.cells {
                            table_row.col(|ui| {
                                ui.monospace(cell);
                            });
                        }
                    });
                }
            });
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(UI_TEXT.table_columns());
        for row in &self.rows {
            builder.push_record(row.cells.iter().map(String::as_str));
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}
