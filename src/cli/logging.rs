use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Log level for the given number of `-v` flags: WARN, INFO, then DEBUG
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the stderr subscriber. Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: u8) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level_for_verbosity(verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
