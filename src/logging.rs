use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Targets that follow the `-v` flag. Everything else stays at the
/// subscriber default.
const CRATE_TARGETS: &[&str] = &["jalaali", "jalaali_calendar", "jalaali_datetime"];

/// Level for a `-v` count: warnings only by default, one step louder per
/// flag, saturating at trace.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `target=level` directives for every workspace crate.
fn directives(level: LevelFilter) -> String {
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so stdout carries only
/// command results. `RUST_LOG` takes precedence over `-v` when set.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
