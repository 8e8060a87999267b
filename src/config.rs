use std::path::{Path, PathBuf};

use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: PathBuf,
    pub properties_file: PathBuf,
    pub admin_file: PathBuf,
    pub log_level: LevelFilter,
    // Only used when admin.json does not exist yet
    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn init() -> Config {
        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string());
        let mut config = Config::with_data_dir(data_dir);

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => tracing::warn!("Ignoring invalid PORT value '{}'", port),
            }
        }

        if let Ok(path) = std::env::var("PROPERTIES_FILE") {
            config.properties_file = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("ADMIN_FILE") {
            config.admin_file = PathBuf::from(path);
        }

        config.log_level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| level.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::DEBUG);

        let username = std::env::var("ADMIN_USERNAME").ok().filter(|v| !v.is_empty());
        let password = std::env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty());
        config.admin_seed = match (username, password) {
            (Some(username), Some(password)) => Some(AdminSeed {
                username,
                password,
                email: std::env::var("ADMIN_EMAIL").unwrap_or_default(),
            }),
            _ => None,
        };

        config
    }

    /// Defaults rooted at `data_dir`, with nothing read from the environment.
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Config {
        let data_dir = data_dir.as_ref().to_path_buf();

        Config {
            port: 3000,
            properties_file: data_dir.join("properties.json"),
            admin_file: data_dir.join("admin.json"),
            data_dir,
            log_level: LevelFilter::DEBUG,
            admin_seed: None,
        }
    }
}
