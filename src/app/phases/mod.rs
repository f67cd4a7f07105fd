pub(super) mod phase_view;
pub(super) mod running;
pub(super) mod waiting;

pub(crate) use phase_view::PhaseView;
