use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;
use crate::constants::{MAX_LABEL_LENGTH, MIN_SECRET_KEY_LENGTH, MAX_SECRET_KEY_LENGTH};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

static SECRET_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    if !HEX_COLOR.is_match(color) {
        return Err(ValidationError::new("invalid_hex_color"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(ValidationError::new("invalid_weight"));
    }
    Ok(())
}

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_LABEL_LENGTH {
        return Err(ValidationError::new("invalid_label"));
    }
    Ok(())
}

pub fn validate_secret_key(key: &str) -> Result<(), ValidationError> {
    if key.len() < MIN_SECRET_KEY_LENGTH
        || key.len() > MAX_SECRET_KEY_LENGTH
        || !SECRET_KEY.is_match(key)
    {
        return Err(ValidationError::new("invalid_secret_key"));
    }
    Ok(())
}

pub fn validate_redirect_url(url: &str) -> Result<(), ValidationError> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ValidationError::new("invalid_redirect_url"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors() {
        assert!(validate_hex_color("#fff").is_ok());
        assert!(validate_hex_color("#f97316").is_ok());
        assert!(validate_hex_color("f97316").is_err());
        assert!(validate_hex_color("#f9731").is_err());
        assert!(validate_hex_color("#gggggg").is_err());
    }

    #[test]
    fn weights() {
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(12.5).is_ok());
        assert!(validate_weight(-1.0).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn labels() {
        assert!(validate_label("Free coffee").is_ok());
        assert!(validate_label("   ").is_err());
        assert!(validate_label(&"x".repeat(MAX_LABEL_LENGTH + 1)).is_err());
    }

    #[test]
    fn secret_keys() {
        assert!(validate_secret_key(&"a".repeat(MIN_SECRET_KEY_LENGTH)).is_ok());
        assert!(validate_secret_key("too-short").is_err());
        assert!(validate_secret_key(&format!("{}!", "a".repeat(MIN_SECRET_KEY_LENGTH))).is_err());
    }

    #[test]
    fn redirect_urls() {
        assert!(validate_redirect_url("https://example.com/offer").is_ok());
        assert!(validate_redirect_url("javascript:alert(1)").is_err());
    }
}
