use anyhow::{anyhow, Result};

pub fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!("{} must start with http:// or https://", field));
    }
    if trimmed.len() <= "https://".len() {
        return Err(anyhow!("{} has no host", field));
    }
    Ok(())
}

pub fn validate_facility(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("facility name is empty"));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(anyhow!("facility name '{}' contains control characters", value));
    }
    Ok(())
}
