use std::process::ExitCode;

use clap::Parser;
use nanoct::command::Commands;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    log::debug!("Running command {:?}", cli.command);

    let result = match cli.command {
        Commands::Preprocess(mut cmd) => cmd.try_execute(),
        Commands::ExpectedOutputs(mut cmd) => cmd.try_execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
