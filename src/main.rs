use clap::Parser;

use apiref::cli::{Cli, Commands};
use apiref::commands::generate::{generate, GenerateConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            module,
            output_dir,
            warn_missing_docs,
        } => generate(GenerateConfig {
            module,
            output_dir,
            warn_missing_docs,
        }),
    }
}
