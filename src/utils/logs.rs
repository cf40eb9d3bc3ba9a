use tracing_subscriber::EnvFilter;

// installs the json subscriber used by the catalog binary, RUST_LOG overrides the default level
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // replies go to stdout, keep logs on stderr
        .with_writer(std::io::stderr)
        .json()
        .try_init();
}
