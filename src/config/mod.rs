mod types;

pub use types::{Config, DatabaseConfig, PostsApiConfig, ServerConfig};

use crate::error::{GatewayError, Result};
use ::config::{Environment, File, FileFormat};
use std::fs;

/// Prefix for environment overrides, e.g. `POSTBRIDGE__DATABASE__URL`
pub const ENV_PREFIX: &str = "POSTBRIDGE";

/// Load configuration from a TOML file, with environment overrides applied on top
pub fn load_config(path: &str) -> Result<Config> {
    load_config_with_prefix(path, ENV_PREFIX)
}

fn load_config_with_prefix(path: &str, env_prefix: &str) -> Result<Config> {
    let settings = ::config::Config::builder()
        .add_source(File::new(path, FileFormat::Toml))
        .add_source(
            Environment::with_prefix(env_prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| GatewayError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = settings.try_deserialize()?;

    config.validate().map_err(GatewayError::Config)?;

    Ok(config)
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    config.validate().map_err(GatewayError::Config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| GatewayError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_load_valid_config() {
        let temp_file = write_config(
            r#"
[server]
port = 8080
bind = "127.0.0.1"

[database]
url = "sqlite://users.db"
max_connections = 2

[posts]
base_url = "https://posts.internal/api/"
timeout_secs = 10
"#,
        );

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite://users.db");
        assert_eq!(config.database.max_connections, 2);
        assert_eq!(config.posts.base_url, "https://posts.internal/api/");
        assert_eq!(config.posts.timeout_secs, Some(10));
    }

    #[test]
    fn test_load_config_fills_defaults() {
        let temp_file = write_config(
            r#"
[server]
port = 4001
"#,
        );

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 4001);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite://postbridge.db");
        assert_eq!(config.posts.base_url, "https://jsonplaceholder.typicode.com/");
    }

    #[test]
    fn test_load_invalid_posts_url() {
        let temp_file = write_config(
            r#"
[posts]
base_url = "invalid-url"
"#,
        );

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config("/nonexistent/postbridge.toml");
        assert!(matches!(config, Err(GatewayError::Config(_))));
    }

    #[test]
    fn test_environment_overrides_file() {
        let temp_file = write_config(
            r#"
[database]
url = "sqlite://from-file.db"
"#,
        );

        let prefix = "POSTBRIDGE_OVERRIDE_TEST";
        std::env::set_var("POSTBRIDGE_OVERRIDE_TEST__DATABASE__URL", "sqlite://from-env.db");
        std::env::set_var("POSTBRIDGE_OVERRIDE_TEST__SERVER__PORT", "9000");

        let config = load_config_with_prefix(temp_file.path().to_str().unwrap(), prefix).unwrap();

        assert_eq!(config.database.url, "sqlite://from-env.db");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = Config::default();
        config.database.url = "sqlite://saved.db".to_string();
        config.posts.timeout_secs = Some(5);

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded = load_config(path).unwrap();

        assert_eq!(loaded.database.url, "sqlite://saved.db");
        assert_eq!(loaded.posts.timeout_secs, Some(5));
        assert_eq!(loaded.server.port, config.server.port);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let mut config = Config::default();
        config.database.max_connections = 0;

        let temp_file = NamedTempFile::new().unwrap();
        let result = save_config(&config, temp_file.path().to_str().unwrap());

        assert!(result.is_err());
    }
}
