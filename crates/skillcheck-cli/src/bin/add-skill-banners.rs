//! Add activation banners to skill documents

use clap::Parser;
use skillcheck_cli::{BannerArgs, CliConsole, commands, init_tracing};

#[tokio::main]
async fn main() {
    let args = BannerArgs::parse();
    init_tracing(args.verbose);

    // Failures are reported but never change the exit status
    if let Err(e) = commands::banners::run(&args).await {
        CliConsole::new(args.verbose).error(&format!("{:#}", e));
    }
}
