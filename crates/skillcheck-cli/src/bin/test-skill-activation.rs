//! Check skill activation against a catalog of prompts

use clap::Parser;
use skillcheck_cli::{ActivationArgs, CliConsole, commands, init_tracing};

#[tokio::main]
async fn main() {
    let args = ActivationArgs::parse();
    init_tracing(args.verbose);

    let code = match commands::activation::run(&args).await {
        Ok(code) => code,
        Err(e) => {
            CliConsole::new(args.verbose).error(&format!("Error running tests: {:#}", e));
            1
        }
    };

    std::process::exit(code);
}
