use anyhow::{anyhow, Result};

pub fn validate_mongo_uri(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("mongo_uri must not be empty"));
    }
    if !(trimmed.starts_with("mongodb://") || trimmed.starts_with("mongodb+srv://")) {
        return Err(anyhow!("mongo_uri must start with mongodb:// or mongodb+srv://"));
    }
    Ok(())
}

/// Database and collection names: non-empty, no `$`, no NUL.
pub fn validate_store_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", field));
    }
    if value.contains('$') || value.contains('\0') {
        return Err(anyhow!("{} contains a forbidden character", field));
    }
    Ok(())
}
