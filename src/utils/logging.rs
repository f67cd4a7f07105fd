use log::LevelFilter;

/// Log target of everything this crate emits.
pub const LOG_TARGET: &str = "arb_board";

/// (everyone else, this crate). Debug builds keep our `info!` lines, which is where the `DF` flags log.
pub fn log_levels() -> (LevelFilter, LevelFilter) {
    if cfg!(debug_assertions) {
        (LevelFilter::Warn, LevelFilter::Info)
    } else {
        (LevelFilter::Error, LevelFilter::Error)
    }
}
