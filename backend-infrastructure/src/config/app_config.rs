use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{DbConfig, RuntimeConfig};

use super::validation::{validate_mongo_uri, validate_store_name};

pub const CONFIG_PATH_ENV: &str = "STOCKROOM_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub mongo_uri: String,
    pub mongo_database: String,
    pub items_collection: String,
    pub clock_in_collection: String,
    pub app_name: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_string(),
            mongo_uri: "mongodb://localhost:27017".to_string(),
            mongo_database: "myappdb".to_string(),
            items_collection: "items".to_string(),
            clock_in_collection: "clock_in_records".to_string(),
            app_name: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path);
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.mongo_uri = self.mongo_uri.trim().to_string();
        self.mongo_database = self.mongo_database.trim().to_string();
        self.items_collection = self.items_collection.trim().to_string();
        self.clock_in_collection = self.clock_in_collection.trim().to_string();
        if let Some(app_name) = &self.app_name {
            let trimmed = app_name.trim();
            self.app_name = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_mongo_uri(&self.mongo_uri)?;
        validate_store_name("mongo_database", &self.mongo_database)?;
        validate_store_name("items_collection", &self.items_collection)?;
        validate_store_name("clock_in_collection", &self.clock_in_collection)?;
        if self.items_collection == self.clock_in_collection {
            return Err(anyhow!(
                "items_collection and clock_in_collection must differ"
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_db_config(&self) -> DbConfig {
        DbConfig {
            mongo_uri: self.mongo_uri.clone(),
            mongo_database: self.mongo_database.clone(),
            items_collection: self.items_collection.clone(),
            clock_in_collection: self.clock_in_collection.clone(),
            app_name: self.app_name.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("STOCKROOM_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("STOCKROOM_MONGO_URI") {
            self.mongo_uri = value;
        }
        if let Some(value) = lookup("STOCKROOM_MONGO_DATABASE") {
            self.mongo_database = value;
        }
        if let Some(value) = lookup("STOCKROOM_ITEMS_COLLECTION") {
            self.items_collection = value;
        }
        if let Some(value) = lookup("STOCKROOM_CLOCK_IN_COLLECTION") {
            self.clock_in_collection = value;
        }
        if let Some(value) = lookup("STOCKROOM_APP_NAME") {
            self.app_name = Some(value);
        }
        if let Some(value) = lookup("STOCKROOM_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("STOCKROOM_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}
