use dotenvy::dotenv;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub deployment: String,
    pub db_path: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok(); // Load from .env file if available

        Config {
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "oilfield-api".to_string()),
            deployment: env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            db_path: env::var("DB_PATH").unwrap_or_else(|_| "data/app.db".to_string()),
            listen_addr: env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        }
    }

    #[cfg(test)]
    pub fn for_tests(db_path: &std::path::Path) -> Self {
        Config {
            app_name: "oilfield-api-test".to_string(),
            deployment: "test".to_string(),
            db_path: db_path.to_string_lossy().into_owned(),
            listen_addr: "127.0.0.1:0".to_string(),
        }
    }
}
