use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use crate::cli::commands::{OutputFormat, ScanArgs};
use traversal_detector::clock::UtcClock;
use traversal_detector::config::{parse_config, DetectorConfig};
use traversal_detector::detector::GenericPathTraversalDetector;
use traversal_detector::errors::DetectorError;
use traversal_detector::models::{NetworkService, TargetInfo};
use traversal_detector::reporting::format_report_list_markdown;
use traversal_detector::transport::ReqwestTransport;
use tracing::info;

/// Scan input produced by an external crawler.
#[derive(Debug, Deserialize)]
pub struct ScanInput {
    #[serde(default)]
    pub target: TargetInfo,
    pub services: Vec<NetworkService>,
}

pub async fn load_scan_input(path: &Path) -> Result<ScanInput, DetectorError> {
    if !path.exists() {
        return Err(DetectorError::InvalidTarget(format!(
            "Scan input not found: {}",
            path.display()
        )));
    }
    let content = tokio::fs::read_to_string(path).await?;
    serde_json::from_str(&content)
        .map_err(|e| DetectorError::InvalidTarget(format!("Invalid scan input: {}", e)))
}

pub async fn handle_scan(args: ScanArgs) -> Result<(), DetectorError> {
    let config = match &args.config {
        Some(path) => parse_config(Path::new(path)).await?,
        None => DetectorConfig::default(),
    };
    let input = load_scan_input(Path::new(&args.input)).await?;

    let transport = Arc::new(ReqwestTransport::new(&config.http)?);
    let detector = GenericPathTraversalDetector::new(Arc::new(UtcClock), transport, config)?;

    let reports = detector.detect(&input.target, &input.services).await;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
        OutputFormat::Markdown => format_report_list_markdown(&reports),
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &rendered).await?;
            info!(path = %path, reports = reports.len(), "Report written");
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_scan_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "target": {{"network_endpoints": ["127.0.0.1"]}},
                "services": [{{
                    "host": "127.0.0.1",
                    "port": 8080,
                    "service_name": "http",
                    "crawl_results": [{{
                        "crawl_target": {{"http_method": "GET", "url": "http://127.0.0.1:8080/"}},
                        "response_code": 200
                    }}]
                }}]
            }}"#
        )
        .unwrap();

        let input = load_scan_input(file.path()).await.unwrap();
        assert_eq!(input.target.network_endpoints, vec!["127.0.0.1"]);
        assert_eq!(input.services.len(), 1);
        assert_eq!(input.services[0].crawl_results[0].response_code, 200);
    }

    #[tokio::test]
    async fn test_load_scan_input_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"services\": 3}}").unwrap();
        let err = load_scan_input(file.path()).await.unwrap_err();
        assert!(matches!(err, DetectorError::InvalidTarget(_)));
    }
}
