//! Booking Server - party/event-rental storefront backend
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): public storefront routes + admin back-office CRUD
//! - **Database** (`db`): embedded SurrealDB storage, repository per table
//! - **Auth** (`auth`): JWT + Argon2 for the admin back-office
//! - **Pricing** (`pricing`): line-item and reservation total calculation
//! - **Booking** (`booking`): availability matching and checkout snapshots
//! - **Mailer** (`mailer`): transactional e-mail wrapper (best effort)
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # config, state, server
//! ├── auth/          # JWT, passwords, middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models + repositories
//! ├── pricing/       # monetary arithmetic
//! ├── booking/       # availability + checkout
//! ├── mailer/        # e-mail client + templates
//! └── utils/         # errors, logging, time, validation
//! ```

pub mod api;
pub mod auth;
pub mod booking;
pub mod core;
pub mod db;
pub mod mailer;
pub mod pricing;
pub mod utils;

// Re-export common types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ______ _           __
   / ____/(_)___  ___ / /_ ____ _
  / /_   / / _ \/ __/  __/ __ `/
 / __/  / /  __(__  ) /_/ /_/ /
/_/    /_/\___/____/\__/\__,_/
        booking server
    "#
    );
}
