pub mod external;
pub mod provider;

pub use external::ProviderClient;
pub use provider::Provider;
