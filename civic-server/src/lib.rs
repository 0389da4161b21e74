//! CivicDesk Server - civic issue intake and tracking
//!
//! Citizens file reports (category, location, photo reference, contact),
//! municipal staff triage and resolve them, and a dashboard reads aggregate
//! statistics. Persistence is an embedded SurrealDB; citizen notifications
//! go through a fire-and-forget queue.
//!
//! # Module structure
//!
//! ```text
//! civic-server/src/
//! ├── core/          # Config, state, HTTP server, startup errors
//! ├── api/           # HTTP routes and handlers
//! ├── lifecycle/     # Issue lifecycle: intake, routing, transitions
//! ├── notify/        # Outbound notification queue
//! ├── db/            # Database layer (models, repositories)
//! └── utils/         # Errors, logging, validation, time helpers
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod lifecycle;
pub mod notify;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use lifecycle::IssueLifecycle;
pub use notify::{LogGateway, NotificationGateway, NotificationService};
pub use utils::{AppError, AppResult};

/// Load .env and initialize logging. Call once, before anything logs.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    // Logs land in a file only if the directory exists, so create it first
    config.ensure_work_dir_structure()?;
    let logs_dir = config.logs_dir();
    utils::logger::init_logger_with_file(
        Some(&config.log_level),
        logs_dir.to_str(),
    );
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______ _       _      ____            __
  / ____/(_)   __(_)____/ __ \___  _____/ /__
 / /    / / | / / / ___/ / / / _ \/ ___/ //_/
/ /___ / /| |/ / / /__/ /_/ /  __(__  ) ,<
\____//_/ |___/_/\___/_____/\___/____/_/|_|
    "#
    );
}
