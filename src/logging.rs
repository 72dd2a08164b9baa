use tracing_subscriber::EnvFilter;

/// Library targets whose events reach stderr.
const CRATE_TARGETS: &[&str] = &[
    "almanac",
    "almanac_business",
    "almanac_calendar",
    "almanac_distance",
    "almanac_interval",
];

/// Installs the stderr subscriber, keeping stdout for command results.
///
/// `-v` shows command spans and config loading, `-vv` adds enumeration
/// stops, and `-vvv` reports every clamped month shift and chosen distance
/// bucket. Without flags only warnings pass. A set `RUST_LOG` replaces the
/// whole filter.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn default_directives(verbosity: u8) -> String {
    let level = ["warn", "info", "debug", "trace"][usize::from(verbosity.min(3))];
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
