use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = shipping::Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        db_host = %cfg.db_host,
        loglevel = %cfg.loglevel,
        "configuration resolved"
    );

    let pool = shipping::db::pool(&cfg);

    match shipping::db::ping(&pool).await {
        Ok(()) => info!("database reachable"),
        Err(e) => warn!(
            error = %e,
            "database not reachable yet; connections are retried on use"
        ),
    }

    tokio::signal::ctrl_c().await?;
    info!("shutdown signal received");
    pool.close().await;
    Ok(())
}
