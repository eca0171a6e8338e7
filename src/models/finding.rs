use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::service::{NetworkService, TargetInfo};

/// Severity level reported for a vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Medium,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "MEDIUM",
        }
    }
}

/// How far the detector got in confirming the vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DetectionStatus {
    /// Confirmed with live evidence from the target.
    VulnerabilityVerified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityId {
    pub publisher: String,
    pub value: String,
}

/// Free-form evidence attached to a vulnerability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalDetail {
    pub text: String,
}

impl AdditionalDetail {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    pub main_id: VulnerabilityId,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub recommendation: String,
    pub additional_details: Vec<AdditionalDetail>,
}

/// A confirmed vulnerability for one network service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionReport {
    pub target_info: TargetInfo,
    pub network_service: NetworkService,
    pub detection_timestamp: DateTime<Utc>,
    pub detection_status: DetectionStatus,
    pub vulnerability: Vulnerability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DetectionReportList {
    pub detection_reports: Vec<DetectionReport>,
}

impl DetectionReportList {
    pub fn is_empty(&self) -> bool {
        self.detection_reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.detection_reports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_status_serialization() {
        let json = serde_json::to_string(&DetectionStatus::VulnerabilityVerified).unwrap();
        assert_eq!(json, "\"VULNERABILITY_VERIFIED\"");
    }

    #[test]
    fn test_severity_serialization() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"MEDIUM\"");
        assert_eq!(Severity::Medium.as_str(), "MEDIUM");
    }
}
