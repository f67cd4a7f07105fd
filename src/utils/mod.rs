mod logging;
mod maths_utils;
pub mod time_utils;

pub use logging::{LOG_TARGET, log_levels};
pub use time_utils::{AppInstant, TimeUtils, epoch_ms_to_local, epoch_sec_to_local, format_clock};

pub(crate) use maths_utils::min_max;
