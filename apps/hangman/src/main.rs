use actix_web::{web, App, HttpServer};
use hangman::config::AppConfig;
use hangman::infra::state::build_state;
use hangman::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use hangman::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    telemetry::init_tracing(config.log_format);

    let app_state = match build_state()
        .with_leaderboard_path(&config.leaderboard_path)
        .build()
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "state_build_failed");
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        leaderboard = %config.leaderboard_path.display(),
        "server_starting"
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
