use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::WaitingState};

impl PhaseView for WaitingState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_waiting_state(ctx, self)
    }
}
