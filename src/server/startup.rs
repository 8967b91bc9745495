use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    data::{feature::FeatureRepository, plan_type::PlanTypeRepository},
    error::AppError,
    model::{feature::CreateFeatureParam, plan_type::CreatePlanTypeParam},
};

/// Plan types inserted by `seed_catalog`.
const SEED_PLAN_TYPES: [&str; 3] = ["Free", "Starter", "Pro"];

/// Features inserted by `seed_catalog` as `(label, description)`.
const SEED_FEATURES: [(&str, &str); 4] = [
    (
        "Unlimited projects",
        "Create and manage an unlimited number of projects.",
    ),
    (
        "Real-time analytics",
        "Access usage and performance metrics in real-time.",
    ),
    (
        "Priority support",
        "24/7 access to priority technical assistance.",
    ),
    (
        "Dedicated sandbox",
        "A separate environment for testing and development.",
    ),
];

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set; otherwise `level` applies to every target.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool sized from configuration, then runs all pending SeaORM
/// migrations so the schema is current before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.db_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready, migrations applied");

    Ok(db)
}

/// Inserts the default plan types and features that are missing.
///
/// Existing rows are matched by name or label and left untouched, so running this on
/// every startup is safe.
///
/// # Returns
/// - `Ok(())` - Every default entry exists
/// - `Err(AppError)` - Database error during lookup or insert
pub async fn seed_catalog<C: ConnectionTrait>(db: &C) -> Result<(), AppError> {
    let plan_type_repo = PlanTypeRepository::new(db);
    let mut inserted = 0;

    for name in SEED_PLAN_TYPES {
        if plan_type_repo.find_by_name(name).await?.is_none() {
            plan_type_repo
                .create(CreatePlanTypeParam {
                    name: name.to_string(),
                    description: None,
                })
                .await?;
            inserted += 1;
        }
    }

    let feature_repo = FeatureRepository::new(db);
    for (label, description) in SEED_FEATURES {
        if feature_repo.find_by_label(label).await?.is_none() {
            feature_repo
                .create(CreateFeatureParam {
                    label: label.to_string(),
                    description: Some(description.to_string()),
                })
                .await?;
            inserted += 1;
        }
    }

    tracing::info!("Catalog seed complete, {} entries inserted", inserted);

    Ok(())
}
