use {
    crate::{
        app::{App, WaitingState},
        ui::{UI_CONFIG, UI_TEXT, render_fullscreen_message},
        utils::AppInstant,
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

/// Shown until the first snapshot for the selected pair lands.
pub(crate) fn render_waiting(ctx: &Context, app: &App, state: &WaitingState) {
    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            if let Some(err) = &app.startup_error {
                render_fullscreen_message(ui, &UI_TEXT.err_startup, err, true);
                return;
            }

            let pair = app
                .selected_pair()
                .map(|p| p.to_string())
                .unwrap_or_default();
            render_fullscreen_message(
                ui,
                &UI_TEXT.ws_title,
                &format!("{} {}", UI_TEXT.ws_fetching, pair),
                false,
            );

            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                let waited = AppInstant::now().saturating_duration_since(state.since);
                ui.label(
                    RichText::new(format!("{} {}s", UI_TEXT.ws_elapsed, waited.as_secs()))
                        .small()
                        .color(UI_CONFIG.colors.subdued),
                );

                let last_error = app
                    .feed
                    .as_ref()
                    .and_then(|f| f.status().last_error.as_deref());
                if let Some(err) = last_error {
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.sb_error, err))
                            .color(UI_CONFIG.colors.error),
                    );
                }
            });
        });
}
