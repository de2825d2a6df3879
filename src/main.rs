//!
//! Travel booking service: REST API plus the JSON page endpoints the
//! web frontend consumes. Reads configuration from a TOML file
//! (~/.config/tripnest/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use tripnest::application::{BookingService, IdentityService};
use tripnest::config::AppConfig;
use tripnest::infrastructure::crypto::jwt::JwtConfig;
use tripnest::infrastructure::database::migrator::Migrator;
use tripnest::shared::shutdown::ShutdownCoordinator;
use tripnest::{
    create_router, default_config_path, init_database, DatabaseConfig, SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("TRIPNEST_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!(
                "Failed to load config from {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            AppConfig::default()
        }
    };

    info!("Starting Tripnest...");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        access_expiration_minutes: app_cfg.security.access_token_minutes,
        refresh_expiration_days: app_cfg.security.refresh_token_days,
        issuer: "tripnest".to_string(),
    };
    info!(
        "JWT configured with {}min access / {}d refresh tokens",
        jwt_config.access_expiration_minutes, jwt_config.refresh_expiration_days
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin user if not exists
    create_default_admin(&db, &app_cfg).await;

    // ── Repositories & services ────────────────────────────────
    let repos: Arc<dyn tripnest::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    let identity = Arc::new(IdentityService::new(
        repos.clone(),
        jwt_config.clone(),
        app_cfg.security.session_ttl_days,
    ));
    let bookings = Arc::new(BookingService::new(repos.clone()));

    // ── Router & HTTP server ───────────────────────────────────
    let router = create_router(db.clone(), repos, identity, bookings, jwt_config);

    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let server = axum::serve(listener, router).with_graceful_shutdown(async move {
        shutdown_signal.wait().await;
        info!("🛑 HTTP server received shutdown signal");
    });

    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    if let Err(e) = server.await {
        error!("HTTP server error: {}", e);
    }

    // Perform final cleanup
    info!("🧹 Performing final cleanup...");

    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Tripnest shutdown complete");
    Ok(())
}

/// Initialize tracing from the logging config. `RUST_LOG` wins over the
/// configured level when set.
fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Create default admin user if no users exist
async fn create_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    use tripnest::infrastructure::crypto::password::hash_password;
    use tripnest::infrastructure::database::entities::user;

    let users_count = user::Entity::find().count(db).await.unwrap_or(0);

    if users_count == 0 {
        info!("Creating default admin user...");

        let admin_email = app_cfg.admin.email.clone();
        let admin_username = app_cfg.admin.username.clone();
        let admin_password = app_cfg.admin.password.clone();

        let password_hash = match hash_password(&admin_password) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to hash admin password: {}", e);
                return;
            }
        };

        let admin = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(admin_username),
            email: Set(admin_email.clone()),
            phone_number: Set(None),
            password_hash: Set(password_hash),
            is_customer: Set(false),
            is_hotel_manager: Set(false),
            is_airline_manager: Set(false),
            is_staff: Set(true),
            is_superuser: Set(true),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(chrono::Utc::now()),
            last_login_at: Set(None),
        };

        match admin.insert(db).await {
            Ok(_) => {
                info!("Default admin created: {}", admin_email);
                info!("⚠️  Please change the admin password immediately!");
            }
            Err(e) => {
                error!("Failed to create admin user: {}", e);
            }
        }
    }
}
