//! Bookstore JSON API Server

use std::process::ExitCode;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info, warn};

use bookstore_app::{context::AppContext, database::Db, schema};

use crate::{config::ServerConfig, observability::Observability, state::State};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod books;
mod config;
mod errors;
mod extensions;
mod healthcheck;
mod observability;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Bookstore JSON API Server entry point
#[tokio::main]
pub async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match ServerConfig::load() {
        Ok(config) => config,
        Err(error) => {
            // Help and version output also arrive here.
            if let Err(print_error) = error.print() {
                #[expect(
                    clippy::print_stderr,
                    reason = "logging not initialized yet, must use eprintln for config errors"
                )]
                {
                    eprintln!("Configuration error: {print_error}");
                }
            }

            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(error) = Observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("failed to initialize observability: {error}");
        }

        return ExitCode::FAILURE;
    }

    let db = match Db::connect(&config.database.connection).await {
        Ok(db) => db,
        Err(connect_error) => {
            error!("failed to connect to database: {connect_error}");

            return ExitCode::FAILURE;
        }
    };

    if config.database.skip_bootstrap {
        info!("schema bootstrap skipped");
    } else {
        let report = schema::bootstrap(db.pool()).await;

        if !report.is_clean() {
            warn!(failed = ?report.failed, "schema bootstrap finished with failures");
        }
    }

    let app = AppContext::from_db(&db);

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request_logging)
        .hoop(inject(State::from_app_context(app)))
        .push(router::app_router());

    let doc = OpenApi::new("Bookstore API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let service = Service::new(router)
        .hoop(router::cors())
        .hoop(errors::json_errors);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    let acceptor = match TcpListener::new(addr).try_bind().await {
        Ok(acceptor) => acceptor,
        Err(bind_error) => {
            error!("failed to bind server: {bind_error}");

            db.close().await;

            return ExitCode::FAILURE;
        }
    };

    let server = Server::new(acceptor);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server.serve(service).await;

    info!("server stopped");

    db.close().await;

    ExitCode::SUCCESS
}
