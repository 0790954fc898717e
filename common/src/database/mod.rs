pub mod connection;

pub use connection::{DbPool, build_pool, create_pool, database_host};
