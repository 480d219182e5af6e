pub mod config;
pub mod error;
pub mod posts;
pub mod schema;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use crate::config::{Config, DatabaseConfig, PostsApiConfig, ServerConfig};
pub use error::{GatewayError, Result};
pub use posts::{PostSource, PostsApi};
pub use schema::{build_schema, GatewaySchema};
pub use store::{SqlUserStore, UserStore};
