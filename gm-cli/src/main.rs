//! Green Meter CLI - command line tool for logistics emission estimates.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gm-cli",
    version,
    about = "Carbon-aware logistics emissions toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gm_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Running {:?}", cli.command);
    gm_cmd::run(cli.command)
}
