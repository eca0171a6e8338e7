use std::collections::HashSet;
use std::path::Path;
use crate::errors::DetectorError;
use super::types::DetectorConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<DetectorConfig, DetectorError> {
    if !path.exists() {
        return Err(DetectorError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(DetectorError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<DetectorConfig, DetectorError> {
    // An empty document means "all defaults"
    if content.trim().is_empty() {
        return Ok(DetectorConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: DetectorConfig = serde_yaml::from_value(yaml)?;

    validate_config(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), DetectorError> {
    // Convert YAML value to JSON for schema validation
    let json_str = serde_json::to_string(yaml)
        .map_err(|e| DetectorError::Config(format!("Config conversion error: {}", e)))?;
    let json_value: serde_json::Value = serde_json::from_str(&json_str)
        .map_err(|e| DetectorError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| DetectorError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only; semantic checks below decide what is fatal
        for e in errors {
            let msg = format!("{} at {}", e, e.instance_path);
            warn!(validation_error = %msg, "Config schema warning");
        }
    }

    Ok(())
}

/// Semantic checks that must hold before any scanning begins.
pub fn validate_config(config: &DetectorConfig) -> Result<(), DetectorError> {
    if config.injection_points.is_empty() {
        return Err(DetectorError::Config(
            "At least one injection point must be configured".into(),
        ));
    }

    let mut seen = HashSet::new();
    for point in &config.injection_points {
        if !seen.insert(point) {
            return Err(DetectorError::Config(format!(
                "Injection point '{}' is listed more than once",
                point
            )));
        }
    }

    if config.max_concurrent_requests == 0 {
        return Err(DetectorError::Config(
            "max_concurrent_requests must be at least 1".into(),
        ));
    }

    if config.http.timeout_secs == 0 || config.http.connect_timeout_secs == 0 {
        return Err(DetectorError::Config(
            "HTTP timeouts must be at least 1 second".into(),
        ));
    }

    if config.max_exploits_to_test == 0 {
        warn!("max_exploits_to_test is 0, no candidate will ever be tested");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InjectionPoint;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
max_crawled_urls_to_fuzz: 20
max_exploits_to_test: 100
injection_points:
  - PATH_SUFFIX
  - ROOT
max_concurrent_requests: 4
http:
  timeout_secs: 3
  user_agent: scanner/1.0
"#;
        let config = parse_config_str(yaml).unwrap();
        assert_eq!(config.max_crawled_urls_to_fuzz, 20);
        assert_eq!(config.max_exploits_to_test, 100);
        assert_eq!(
            config.injection_points,
            vec![InjectionPoint::PathSuffix, InjectionPoint::Root]
        );
        assert_eq!(config.max_concurrent_requests, 4);
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.user_agent.as_deref(), Some("scanner/1.0"));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config_str("   \n").unwrap();
        assert_eq!(config.max_exploits_to_test, 500);
    }

    #[test]
    fn test_unknown_injection_point_is_config_error() {
        let err = parse_config_str("injection_points: [HEADER]").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_empty_injection_points_rejected() {
        let err = parse_config_str("injection_points: []").unwrap_err();
        assert!(matches!(err, DetectorError::Config(_)));
    }

    #[test]
    fn test_duplicate_injection_points_rejected() {
        let err = parse_config_str("injection_points: [ROOT, PATH_SUFFIX, ROOT]").unwrap_err();
        assert!(err.to_string().contains("ROOT"));
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert!(parse_config_str("max_exploits_to_test: -1").is_err());
    }

    #[test]
    fn test_zero_budget_allowed() {
        let config = parse_config_str("max_exploits_to_test: 0").unwrap();
        assert_eq!(config.max_exploits_to_test, 0);
    }

    #[test]
    fn test_zero_concurrency_rejected() {
        assert!(parse_config_str("max_concurrent_requests: 0").is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(parse_config_str("http:\n  timeout_secs: 0").is_err());
    }

    #[tokio::test]
    async fn test_parse_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_exploits_to_test: 7").unwrap();
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.max_exploits_to_test, 7);
    }

    #[tokio::test]
    async fn test_parse_config_missing_file() {
        let err = parse_config(Path::new("/nonexistent/detector.yaml")).await.unwrap_err();
        assert!(matches!(err, DetectorError::Config(_)));
    }
}
