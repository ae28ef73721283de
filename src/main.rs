use compliance_advisor::infrastructure::{
    AppConfig, AppContainer, create_connection_pool, database::run_migrations,
};
use compliance_advisor::presentation::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;

    let pool = create_connection_pool(&config.database_url)?;
    run_migrations(&pool)?;

    let container = AppContainer::new(&config, pool).await?;

    HttpServer::new(&container, Some(config.port)).run().await
}
