use clap::{Args, Subcommand};

mod bootstrap;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply the embedded schema files
    Bootstrap(bootstrap::BootstrapArgs),
}

pub(crate) async fn run(command: DbCommand) -> Result<(), String> {
    match command.command {
        DbSubcommand::Bootstrap(args) => bootstrap::run(args).await,
    }
}
