use crate::models::{
    AdditionalDetail, DetectionReport, DetectionStatus, NetworkService, Severity, TargetInfo,
    Vulnerability, VulnerabilityId,
};
use super::exploit::PotentialExploit;

pub const VULNERABILITY_PUBLISHER: &str = "GOOGLE";
pub const VULNERABILITY_ID: &str = "GENERIC_PT";

const DESCRIPTION: &str = "Generic Path Traversal vulnerability allowing to leak arbitrary files.";

const RECOMMENDATION: &str = "Do not accept user-controlled file paths or restrict file paths to a \
set of pre-defined paths. If the application is meant to let users define file names, apply \
`basename` or equivalent before handling the provided file name.";

/// Builds the finding for one service from its confirmed candidates.
///
/// Evidence lists one detail per candidate after a leading count summary,
/// ordered the same way candidates were scheduled for testing.
pub fn build_detection_report(
    target_info: &TargetInfo,
    network_service: &NetworkService,
    exploits: &[PotentialExploit],
    detection_timestamp: chrono::DateTime<chrono::Utc>,
) -> DetectionReport {
    let mut ordered: Vec<&PotentialExploit> = exploits.iter().collect();
    ordered.sort_by(|a, b| a.testing_order(b));

    let mut additional_details = Vec::with_capacity(ordered.len() + 1);
    additional_details.push(AdditionalDetail::text(format!(
        "Found {} distinct vulnerable configurations.",
        ordered.len()
    )));
    additional_details.extend(ordered.iter().map(|e| AdditionalDetail::text(e.to_string())));

    DetectionReport {
        target_info: target_info.clone(),
        network_service: network_service.clone(),
        detection_timestamp,
        detection_status: DetectionStatus::VulnerabilityVerified,
        vulnerability: Vulnerability {
            main_id: VulnerabilityId {
                publisher: VULNERABILITY_PUBLISHER.to_string(),
                value: VULNERABILITY_ID.to_string(),
            },
            severity: Severity::Medium,
            title: format!(
                "Generic Path Traversal vulnerability at {}",
                network_service.root_url()
            ),
            description: DESCRIPTION.to_string(),
            recommendation: RECOMMENDATION.to_string(),
            additional_details,
        },
    }
}
