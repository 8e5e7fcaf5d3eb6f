//! Account API server
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌────────────┐    ┌──────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Repository │───▶│  Store   │
//! │  (YAML)  │    │  (axum)  │    │ (identity) │    │ (PG/mem) │
//! └──────────┘    └──────────┘    └────────────┘    └──────────┘
//! ```
//!
//! Usage: `account_api [--env dev] [--port 3000] [--in-memory]`

use std::sync::Arc;

use account_api::account::{AccountRepository, AccountStore, InMemoryAccountStore, PgAccountStore};
use account_api::config::AppConfig;
use account_api::db::Database;
use account_api::gateway::{self, state::AppState};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn use_in_memory_store() -> bool {
    std::env::args().any(|a| a == "--in-memory")
}

async fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn AccountStore>> {
    if use_in_memory_store() {
        tracing::warn!("Using in-memory account store; data is lost on exit");
        return Ok(Arc::new(InMemoryAccountStore::new()));
    }

    let db = Database::connect(&config.postgres)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    if config.postgres.auto_create_schema {
        db.ensure_schema().await?;
    }
    Ok(Arc::new(PgAccountStore::new(db.pool().clone())))
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    let store = open_store(&config).await?;
    let mode = config.accounts.consistency_mode;
    tracing::info!(?mode, store = store.name(), "Account repository ready");

    let repository = Arc::new(AccountRepository::new(store, mode));
    let state = Arc::new(AppState::new(repository));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let app_config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            std::process::exit(1);
        }
    };
    let _log_guard = match account_api::logging::init_logging(&app_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting Account API in {} mode", env);

    if let Err(e) = run(app_config).await {
        tracing::error!("FATAL: {:#}", e);
        std::process::exit(1);
    }
}
