use crate::config::types::{Config, CrawlerConfig, RulesConfig};
use crate::crawler::ExtractRule;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_rules_config(&config.rules)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.concurrency < 1 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be >= 1, got {}",
            config.concurrency
        )));
    }

    if let Some(max_urls) = config.max_urls {
        if max_urls < 1 {
            return Err(ConfigError::Validation(format!(
                "max-urls must be >= 1 when set, got {}",
                max_urls
            )));
        }
    }

    Ok(())
}

/// Validates both extraction rule tables
fn validate_rules_config(rules: &RulesConfig) -> Result<(), ConfigError> {
    if rules.page.is_empty() {
        return Err(ConfigError::Validation(
            "at least one page rule is required".to_string(),
        ));
    }

    for rule in rules.page.iter().chain(rules.assets.iter()) {
        validate_rule(rule)?;
    }

    Ok(())
}

/// Validates a single extraction rule
///
/// The element and attribute must be non-empty and must together form a
/// parsable CSS selector, so a broken rule is rejected here instead of being
/// silently skipped during extraction.
fn validate_rule(rule: &ExtractRule) -> Result<(), ConfigError> {
    if rule.element.is_empty() {
        return Err(ConfigError::Validation(
            "rule element cannot be empty".to_string(),
        ));
    }

    if rule.attribute.is_empty() {
        return Err(ConfigError::Validation(
            "rule attribute cannot be empty".to_string(),
        ));
    }

    if rule.selector().is_none() {
        return Err(ConfigError::Validation(format!(
            "rule '{}[{}]' is not a valid selector",
            rule.element, rule.attribute
        )));
    }

    Ok(())
}
