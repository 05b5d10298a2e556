use bdd_report::cli::commands::cmd_generate;
use bdd_report::cli::config::{Cli, load_config};
use bdd_report::init_tracing;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref());

    if let Err(e) = cmd_generate(&cli, &config) {
        tracing::error!("Error generating BDD report: {}", e);
        std::process::exit(1);
    }
}
