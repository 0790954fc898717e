pub use common::utils::error::Result;
