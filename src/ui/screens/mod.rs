mod waiting;

pub(crate) use waiting::render_waiting;
