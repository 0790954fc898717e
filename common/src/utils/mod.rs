pub mod error;
pub mod config;

pub use config::{Config, Credentials, Endpoints};
pub use error::{Result, ApiError};
