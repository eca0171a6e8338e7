use crate::models::{DetectionReport, DetectionReportList};

pub fn format_report_markdown(report: &DetectionReport) -> String {
    let vuln = &report.vulnerability;
    let mut md = format!(
        "### {}\n\n**Severity:** {}\n**Id:** {}/{}\n**Detected:** {}\n\n{}\n\n**Evidence:**\n",
        vuln.title,
        vuln.severity.as_str(),
        vuln.main_id.publisher,
        vuln.main_id.value,
        report.detection_timestamp.to_rfc3339(),
        vuln.description,
    );
    for detail in &vuln.additional_details {
        md.push_str(&format!("- `{}`\n", detail.text));
    }
    md.push_str(&format!("\n**Recommendation:** {}\n", vuln.recommendation));
    md
}

pub fn format_report_list_markdown(reports: &DetectionReportList) -> String {
    let mut md = String::from("# Path Traversal Detection Report\n\n");
    if reports.is_empty() {
        md.push_str("No path traversal vulnerabilities were confirmed.\n");
        return md;
    }

    md.push_str(&format!(
        "| Service | Confirmed configurations |\n|---|---|\n{}\n",
        reports
            .detection_reports
            .iter()
            .map(|r| format!(
                "| {} | {} |",
                r.network_service.root_url(),
                r.vulnerability.additional_details.len().saturating_sub(1)
            ))
            .collect::<Vec<_>>()
            .join("\n")
    ));
    for report in &reports.detection_reports {
        md.push_str("\n---\n\n");
        md.push_str(&format_report_markdown(report));
    }
    md
}
