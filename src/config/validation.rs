use crate::config::types::FeedConfig;
use crate::ConfigError;

/// Validates the entire configuration
///
/// Runs before the polling loop starts; any violation aborts startup.
pub fn validate(config: &FeedConfig) -> Result<(), ConfigError> {
    validate_access_key(&config.access_key)?;
    validate_slices(config.slice_count, config.slice_index)?;
    Ok(())
}

/// Validates the access key
fn validate_access_key(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::Validation(
            "access key cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the slice pair
///
/// Slices partition the feed across cooperating client instances. The pair
/// must be supplied together: a slice count without an index (or vice versa)
/// would silently change which articles this instance receives.
fn validate_slices(count: Option<i32>, index: Option<i32>) -> Result<(), ConfigError> {
    match (count, index) {
        (None, None) => Ok(()),
        (Some(_), None) => Err(ConfigError::Validation(
            "slice_count was given without slice_index; both are required together".to_string(),
        )),
        (None, Some(_)) => Err(ConfigError::Validation(
            "slice_index was given without slice_count; both are required together".to_string(),
        )),
        (Some(c), Some(i)) => {
            if c < 1 {
                return Err(ConfigError::Validation(format!(
                    "slice_count must be >= 1, got {}",
                    c
                )));
            }
            if i < 0 {
                return Err(ConfigError::Validation(format!(
                    "slice_index must be >= 0, got {}",
                    i
                )));
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = FeedConfig::new("profile-key");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_key() {
        let config = FeedConfig::new("");
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));

        let config = FeedConfig::new("   ");
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_validate_slice_pair_together_or_not_at_all() {
        let mut config = FeedConfig::new("key");
        config.slice_count = Some(4);
        assert!(validate(&config).is_err());

        let mut config = FeedConfig::new("key");
        config.slice_index = Some(0);
        assert!(validate(&config).is_err());

        let mut config = FeedConfig::new("key");
        config.slice_count = Some(4);
        config.slice_index = Some(0);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_validate_slice_bounds() {
        let mut config = FeedConfig::new("key");
        config.slice_count = Some(0);
        config.slice_index = Some(0);
        assert!(validate(&config).is_err());

        let mut config = FeedConfig::new("key");
        config.slice_count = Some(2);
        config.slice_index = Some(-1);
        assert!(validate(&config).is_err());
    }
}
