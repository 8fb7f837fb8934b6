use super::types::Args;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) url
pub fn check_http_url(value: &str) -> Result<String, String> {
    let value = value.trim();
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(format!("'{value}' must start with http:// or https://"));
    }
    if reqwest::Url::parse(value).is_err() {
        return Err(format!("'{value}' is not a valid url."));
    }
    Ok(value.to_string())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a setting is out of range
    pub fn validate(&self) -> Result<(), String> {
        if self.countdown_idle_secs == 0 {
            return Err("countdown_idle_secs must be greater than zero.".to_string());
        }
        if self.bind.trim().is_empty() {
            return Err("bind address is required.".to_string());
        }
        Ok(())
    }
}
