// src/app/state.rs

use crate::utils::AppInstant;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    /// No snapshot applied yet.
    Waiting(WaitingState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Waiting(WaitingState::default())
    }
}

#[derive(Clone)]
pub(crate) struct WaitingState {
    pub(crate) since: AppInstant,
}

impl Default for WaitingState {
    fn default() -> Self {
        Self {
            since: AppInstant::now(),
        }
    }
}
