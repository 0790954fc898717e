pub mod utils;
pub mod services;
pub mod database;

pub use utils::{Config, Result, ApiError};
pub use services::{Provider, ProviderClient};
pub use database::{DbPool, create_pool, database_host};
