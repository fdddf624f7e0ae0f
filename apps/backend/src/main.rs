use actix_web::{web, App, HttpServer};
use campus_auth::config::AppConfig;
use campus_auth::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use campus_auth::routes;
use campus_auth::state::StateBuilder;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match StateBuilder::from_config(&config).and_then(StateBuilder::build) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        token_ttl_secs = config.token_ttl.as_secs(),
        "starting campus auth backend"
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
