mod ui;

use crate::ui::cli;
use clap::Parser;
use wallet_core::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    init_logging();
    let args = cli::Args::parse();
    match cli::run_cli(args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("CLI error: {e:?}");
            std::process::exit(1);
        }
    }
}
