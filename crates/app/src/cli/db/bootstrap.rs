use bookstore_app::{
    database::{ConnectionSettings, Db},
    schema::{self, SCHEMA_FILES, STRUCTURE_FILES},
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct BootstrapArgs {
    #[command(flatten)]
    connection: ConnectionSettings,

    /// Apply structural files only, leaving out the sample books
    #[arg(long)]
    skip_seed: bool,
}

pub(crate) async fn run(args: BootstrapArgs) -> Result<(), String> {
    let db = Db::connect(&args.connection)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let files: &[schema::SchemaFile] = if args.skip_seed {
        &STRUCTURE_FILES
    } else {
        &SCHEMA_FILES
    };

    let report = schema::apply(db.pool(), files).await;

    db.close().await;

    if !report.is_clean() {
        return Err(format!("schema files failed: {}", report.failed.join(", ")));
    }

    println!("applied schema files: {}", report.applied.join(", "));

    Ok(())
}
