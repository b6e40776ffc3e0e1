use log::LevelFilter;

/// Initialize logging using env_logger.
/// Defaults to `info`; the RUST_LOG environment variable overrides it.
/// e.g., `RUST_LOG=wallet_core=debug wallet-panel connect Phantom`
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}
