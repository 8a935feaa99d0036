use fleet_server::{AppState, build_router, logger};

use fleet_auth::hash_password;
use fleet_config::{AdminConfig, Config};
use fleet_core::{Identity, validation};
use fleet_db::{DbError, IdentityRepository};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fleet-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = fleet_db::connect(&database_path).await?;
    info!("Database connection established, migrations applied");

    ensure_bootstrap_admin(&pool, &config.admin).await;

    // Build router
    let app = build_router(AppState { pool });

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}

/// Ensure the configured bootstrap administrator exists in the database
async fn ensure_bootstrap_admin(pool: &sqlx::SqlitePool, admin: &AdminConfig) {
    let (Some(car_id), Some(email), Some(phone_number), Some(password)) = (
        admin.car_id.as_deref(),
        admin.email.as_deref(),
        admin.phone_number.as_deref(),
        admin.password.as_deref(),
    ) else {
        return;
    };

    match register_privileged(pool, car_id, email, phone_number, password).await {
        Ok(Some(identity)) => info!("Created bootstrap admin {}", identity.car_id),
        Ok(None) => info!("Bootstrap admin {} already exists", car_id),
        Err(e) => warn!("Failed to create bootstrap admin: {}", e),
    }
}

/// Privileged registration: same rules as the public endpoint, plus the
/// staff and superuser flags. Returns None when the identity already exists.
async fn register_privileged(
    pool: &sqlx::SqlitePool,
    car_id: &str,
    email: &str,
    phone_number: &str,
    password: &str,
) -> Result<Option<Identity>, Box<dyn Error>> {
    validation::require("car_id", car_id)?;
    validation::require("email", email)?;
    validation::require("phone_number", phone_number)?;

    validation::validate_email(email)?;
    let email = validation::normalize_email(email);
    let phone_number = validation::normalize_phone_number(phone_number)?;
    validation::validate_password(password)?;

    let password_hash = hash_password(password)?;
    let identity =
        Identity::new(car_id.to_string(), email, phone_number, password_hash).with_privileges();

    let repo = IdentityRepository::new(pool.clone());
    match repo.create(&identity).await {
        Ok(()) => Ok(Some(identity)),
        Err(DbError::UniqueViolation { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
