//! stocker - Command line tool for fish stocking calendars.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "stocker",
    version,
    about = "Arizona fish stocking calendar toolkit"
)]
struct Cli {
    #[command(flatten)]
    options: stocker_cmd::Options,

    #[command(subcommand)]
    command: stocker_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    stocker_cmd::run(cli.command, &cli.options).await
}
