//! Shell completion generation for siteup

use clap::Command;
use clap_complete::{Generator, generate};

/// Generate shell completions for the given shell and write them to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}
