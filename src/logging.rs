use env_logger::Builder;
use log::LevelFilter;

/// Initializes `env_logger` for the command-line tool.
///
/// `verbose` raises the default level from `Warn` to `Info`; `RUST_LOG` still
/// takes precedence.  Repeated calls are ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    let _ = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
