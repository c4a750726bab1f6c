use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::config::{Config, Storage};
use api::gql::build_schema;
use api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let state = match config.storage {
        Storage::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            AppState::in_memory()
        }
        Storage::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .acquire_timeout(std::time::Duration::from_secs(3))
                .idle_timeout(Some(std::time::Duration::from_secs(600))) // 10 minutes
                .max_lifetime(Some(std::time::Duration::from_secs(1800))) // 30 minutes
                .connect(database_url)
                .await?;
            tracing::info!(
                "Connected to Postgres with max {} connections",
                config.database_max_connections
            );

            if config.skip_migrations {
                tracing::info!("Skipping database migrations (SKIP_MIGRATIONS=true)");
            } else {
                tracing::info!("Running database migrations...");
                infra::db::MIGRATOR.run(&pool).await?;
                tracing::info!("Database migrations completed successfully");
            }

            AppState::postgres(pool)
        }
    };

    let schema = build_schema(state.clone(), config.gql_introspection);
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
