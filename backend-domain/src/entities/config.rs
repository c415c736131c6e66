// Runtime and database settings handed to the upper layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub mongo_uri: String,
    pub mongo_database: String,
    pub items_collection: String,
    pub clock_in_collection: String,
    pub app_name: Option<String>,
}
