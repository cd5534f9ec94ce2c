use std::sync::OnceLock;

use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

/// Set up log levels, formatting, and other configurations for the logger
pub struct Logger {
    multi_progress: MultiProgress,
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

impl<'a> Logger {
    /// Initialize once, later calls return the same logger
    ///
    /// RUST_LOG always wins over the default filter.
    pub fn init(default_filter: &str) -> &'a Self {
        LOGGER.get_or_init(|| {
            let logger = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(default_filter),
            )
            .build();

            let level = logger.filter();
            let multi_progress = MultiProgress::new();

            // Fails only if another logger is installed already, e.g. in tests
            if let Err(err) = LogWrapper::new(multi_progress.clone(), logger).try_init() {
                eprintln!("Logger is already set: {err}");
            } else {
                log::set_max_level(level);
            }

            Self { multi_progress }
        })
    }

    /// Spinners and log lines share this, so logs do not tear the spinner
    pub fn multi_progress() -> &'a MultiProgress {
        // No logs shown by default, only human-friendly messages
        &Self::init("off").multi_progress
    }
}
