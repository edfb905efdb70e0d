use catalog::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};
use catalog_server::handler::AppRouter;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    init_logger();

    let config = Config::init();

    let pool = ConnectionManager::new_pool(&config.database_url).await?;

    let state = AppState::new(pool);

    println!("🚀 Server started successfully");

    AppRouter::serve(config.port, state).await?;

    Ok(())
}
