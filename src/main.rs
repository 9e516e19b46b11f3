use tokio::net::TcpListener;

use lingolab::{AppState, config::AppConfig, create_app, data};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    let pool = data::establish_pool(&config.database_url)?;

    let bind_addr = config.bind_addr.clone();
    let app = create_app(AppState::new(pool, config));

    let listener = TcpListener::bind(&bind_addr).await.map_err(|e| {
        log::error!("Failed to bind to address {}: {}", bind_addr, e);
        e
    })?;

    log::info!("Server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
