/// Sets up env_logger. Warnings always show so that a missing
/// template sources file is reported; `--verbose` shows everything.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
