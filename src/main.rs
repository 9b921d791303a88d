use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use ai_core_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allow_any_header()
        .max_age(3600);

    match &config.cors_allowed_origin {
        Some(origin) => cors.allowed_origin(origin),
        None => cors,
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new(config.clone()).map_err(std::io::Error::other)?;

    log::info!(
        "starting HTTP server on {}:{} (model: {})",
        config.web_server_host,
        config.web_server_port,
        config.llm_model
    );

    let cors_config = config.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&cors_config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await
}
