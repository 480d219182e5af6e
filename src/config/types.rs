use serde::{Deserialize, Serialize};

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub posts: PostsApiConfig,
}

impl Config {
    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.database.validate()?;
        self.posts.validate()
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// User store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://postbridge.db" or "sqlite::memory:")
    #[serde(default = "default_database_url")]
    pub url: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.url.starts_with("sqlite:") {
            return Err(format!(
                "Database URL '{}' must be a SQLite URL (sqlite:...)",
                self.url
            ));
        }

        if self.max_connections == 0 {
            return Err("database.max_connections must be at least 1".to_string());
        }

        Ok(())
    }
}

fn default_database_url() -> String {
    "sqlite://postbridge.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

/// Upstream posts API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsApiConfig {
    /// Base URL of the REST service exposing `/posts`
    #[serde(default = "default_posts_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. No timeout is applied when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for PostsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_posts_base_url(),
            timeout_secs: None,
        }
    }
}

impl PostsApiConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Posts base URL '{}' must be a valid URL (http:// or https://)",
                self.base_url
            ));
        }

        if self.timeout_secs == Some(0) {
            return Err("posts.timeout_secs must be greater than zero".to_string());
        }

        Ok(())
    }
}

fn default_posts_base_url() -> String {
    "https://jsonplaceholder.typicode.com/".to_string()
}
