//! Database Config

use bookstore_app::database::ConnectionSettings;
use clap::Args;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// Connection and pool settings.
    #[command(flatten)]
    pub connection: ConnectionSettings,

    /// Skip applying the embedded schema files at startup
    #[arg(long, env = "SKIP_BOOTSTRAP", default_value_t = false)]
    pub skip_bootstrap: bool,
}
