use actix_web::{App, HttpServer, web};
use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use user_registry::config::Config;
use user_registry::store::memory::MemoryStore;
use user_registry::user_api::handlers;
use user_registry::user_api::server_api::UserService;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let store = MemoryStore::new(Vec::new());
    let service = web::Data::new(UserService::new(Box::new(store)));

    info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(service.clone())
            .configure(handlers::routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
