use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use codeq_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    if config.search_api_key.is_none() {
        log::warn!("TAVILY_API_KEY is not set; requests must supply search_api_key");
    }
    if config.model_api_key.is_none() {
        log::warn!("GROQ_API_KEY is not set; requests must supply model_api_key");
    }

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let state = AppState::new(config).map_err(|e| std::io::Error::other(e.to_string()))?;

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = match &state.config.cors_allowed_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allowed_methods(vec!["GET", "POST"])
                .allow_any_header()
                .expose_headers(vec![codeq_server::middleware::REQUEST_ID_HEADER]),
            None => Cors::permissive(),
        };

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
