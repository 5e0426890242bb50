use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reservemate_backend::{
    app::build_router,
    config::Config,
    db::connection::{create_pool, run_migrations},
    repositories::{HotelStore, InMemoryUserStore, PgHotelStore, PgUserStore, UserStore},
    seed::{bootstrap_admin, seeded_memory_store},
    state::AppState,
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reservemate_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        database = config.database_url.is_some(),
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        bind_addr = %config.bind_addr,
        "Loaded configuration from environment/.env"
    );

    let (hotels, users): (Arc<dyn HotelStore>, Arc<dyn UserStore>) = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            run_migrations(&pool).await?;
            (
                Arc::new(PgHotelStore::new(pool.clone())),
                Arc::new(PgUserStore::new(pool)),
            )
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory stores");
            (
                Arc::new(seeded_memory_store(config.hotels_seed_file.as_deref())?),
                Arc::new(InMemoryUserStore::new()),
            )
        }
    };

    if let (Some(email), Some(password)) = (&config.admin_email, &config.admin_password) {
        bootstrap_admin(users.as_ref(), email, password).await?;
    }

    let addr = config.bind_addr;
    let app = build_router(AppState::new(hotels, users, config));

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
