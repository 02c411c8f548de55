//! Skillcheck command-line tools
//!
//! - `add-skill-banners` inserts a `🎯 SKILL ACTIVATED: <name>` banner after
//!   the frontmatter of every `SKILL.md` under the skills directory.
//! - `test-skill-activation` sends a catalog of prompts through the activation
//!   hook and exits non-zero when any prompt activates no skill.
//!
//! # Installation
//!
//! ```bash
//! cargo install --path crates/skillcheck-cli
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose`) for detailed logging.

pub mod args;
pub mod commands;
pub mod console;

pub use args::{ActivationArgs, BannerArgs};
pub use console::CliConsole;

use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
