use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use trivia_backend::{
    config::{get_config, init_config},
    database::pool::{create_pool, run_migrations},
    routes, telemetry, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    init_config()?;
    let config = get_config()?;

    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    info!("Database migrations applied");

    let app = routes::router(AppState::from_pool(pool));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
