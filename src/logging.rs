use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "KIRA_TEXTQC_LOG";

/// Installs a stderr subscriber. `KIRA_TEXTQC_LOG` overrides the default
/// level; `verbose` lowers the default to `debug`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
