use eframe::egui::{CentralPanel, ComboBox, Context, RichText, ScrollArea, TopBottomPanel, Ui};

use crate::app::App;
use crate::domain::TradingPair;
use crate::ui::{ICON_WARNING, UI_CONFIG, UI_TEXT};
use crate::utils::{TimeUtils, format_clock};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.top_panel_frame();
        let mut picked: Option<TradingPair> = None;

        TopBottomPanel::top("top_toolbar")
            .frame(frame)
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    // PAIR SELECTOR
                    ui.label(&UI_TEXT.label_pair);
                    let current = self.selected_pair().cloned();
                    let selected_text = current
                        .as_ref()
                        .map(TradingPair::as_str)
                        .unwrap_or_default()
                        .to_owned();

                    ComboBox::from_id_salt("pair_selector")
                        .selected_text(selected_text)
                        .show_ui(ui, |ui| {
                            for pair in &self.pairs {
                                let is_current = current.as_ref() == Some(pair);
                                let listed_on = self
                                    .registry
                                    .exchanges_listing(pair)
                                    .iter()
                                    .map(|e| e.to_string())
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                let resp = ui
                                    .selectable_label(is_current, pair.as_str())
                                    .on_hover_text(format!(
                                        "{} {}",
                                        UI_TEXT.hover_listed_on, listed_on
                                    ));
                                if resp.clicked() {
                                    picked = Some(pair.clone());
                                }
                            }
                        });

                    if let Some(feed) = &self.feed {
                        ui.separator();
                        ui.label(
                            RichText::new(format!(
                                "{} {}",
                                UI_TEXT.label_poll_every,
                                TimeUtils::interval_to_string(feed.poll_interval().as_millis() as i64)
                            ))
                            .small()
                            .color(UI_CONFIG.colors.subdued),
                        );
                    }
                });
            });

        if let Some(pair) = picked {
            self.handle_pair_selection(pair);
        }
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.central_panel_frame();

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            if let Some(err) = &self.startup_error {
                render_fullscreen_message(ui, &UI_TEXT.err_startup, err, true);
                return;
            }

            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(RichText::new(&UI_TEXT.table_heading).color(UI_CONFIG.colors.heading));
                ui.add_space(4.0);
                self.table.render(ui);

                ui.add_space(16.0);
                ui.heading(RichText::new(&UI_TEXT.chart_heading).color(UI_CONFIG.colors.heading));
                ui.add_space(4.0);
                self.chart.render(ui);
            });
        });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        let frame = UI_CONFIG.bottom_panel_frame();
        TopBottomPanel::bottom("status_panel")
            .frame(frame)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_feed(ui);
                    ui.separator();
                    self.render_status_error(ui);
                });
            });
    }

    fn render_status_feed(&self, ui: &mut Ui) {
        let Some(feed) = &self.feed else {
            return;
        };
        let status = feed.status();

        let updated = status
            .last_success
            .as_ref()
            .map(format_clock)
            .unwrap_or_else(|| UI_TEXT.sb_never.clone());
        ui.label(RichText::new(format!("{} {}", UI_TEXT.sb_updated, updated)).small());

        if status.in_flight > 0 {
            ui.separator();
            ui.spinner();
            ui.label(
                RichText::new(format!("{} {}", status.in_flight, UI_TEXT.sb_in_flight))
                    .small()
                    .color(UI_CONFIG.colors.subdued),
            );
        }

        if status.stale_dropped > 0 {
            ui.separator();
            ui.label(
                RichText::new(format!("{} {}", status.stale_dropped, UI_TEXT.sb_dropped))
                    .small()
                    .color(UI_CONFIG.colors.subdued),
            );
        }
    }

    fn render_status_error(&self, ui: &mut Ui) {
        let last_error = self
            .feed
            .as_ref()
            .and_then(|f| f.status().last_error.as_deref());
        if let Some(err) = last_error {
            ui.label(
                RichText::new(format!("{} {}", UI_TEXT.sb_error, err))
                    .small()
                    .color(UI_CONFIG.colors.error),
            );
        }
    }
}

pub(crate) fn render_fullscreen_message(ui: &mut Ui, title: &str, subtitle: &str, is_error: bool) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);

        if is_error {
            ui.heading(format!("{} {}", ICON_WARNING, title));
        } else {
            ui.spinner();
            ui.add_space(12.0);
            ui.heading(title);
        }

        ui.add_space(6.0);

        let color = if is_error {
            UI_CONFIG.colors.error
        } else {
            UI_CONFIG.colors.label
        };

        ui.label(RichText::new(subtitle).color(color));
    });
}
