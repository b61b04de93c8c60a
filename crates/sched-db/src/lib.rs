//! # sched-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository
//! traits defined in `sched-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional
//!   claim/consume path of the booking engine
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sched_common::AppConfig;
//! use sched_db::pool::create_pool;
//! use sched_db::repositories::PgSlotRepository;
//! use sched_core::traits::SlotRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&config.database).await?;
//!     let slot_repo = PgSlotRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool};
pub use repositories::{
    PgBookingRepository, PgInvitationRepository, PgRecruiterRepository, PgSlotRepository,
};
