use std::sync::Arc;

use futures::stream::{self, StreamExt};
use crate::clock::Clock;
use crate::config::{validate_config, DetectorConfig};
use crate::errors::DetectorError;
use crate::models::{DetectionReportList, NetworkService, TargetInfo};
use crate::transport::HttpTransport;
use super::exploit::{InjectionPointOrder, PotentialExploit};
use super::filter::select_crawl_targets;
use super::generator::{request_from_crawl_target, ExploitGenerator};
use super::payloads::TraversalProfile;
use super::report::build_detection_report;
use super::selector::select_for_testing;
use super::verifier::Verifier;
use tracing::{debug, info};

/// Detects generic path traversal on web services using their crawl results.
///
/// A run goes through: crawl filter, candidate generation, dedup/order/cap,
/// concurrent verification, and per-service aggregation. Only the
/// verification stage performs I/O.
pub struct GenericPathTraversalDetector {
    clock: Arc<dyn Clock>,
    verifier: Verifier,
    config: DetectorConfig,
    injection_points: InjectionPointOrder,
    profile: Arc<TraversalProfile>,
}

impl GenericPathTraversalDetector {
    /// Fails on invalid configuration, before anything is sent.
    pub fn new(
        clock: Arc<dyn Clock>,
        transport: Arc<dyn HttpTransport>,
        config: DetectorConfig,
    ) -> Result<Self, DetectorError> {
        validate_config(&config)?;
        let injection_points = InjectionPointOrder::new(config.injection_points.clone());
        let profile = Arc::new(TraversalProfile::new()?);
        let verifier = Verifier::new(transport, Arc::clone(&profile));

        Ok(Self {
            clock,
            verifier,
            config,
            injection_points,
            profile,
        })
    }

    pub async fn detect(
        &self,
        target_info: &TargetInfo,
        matched_services: &[NetworkService],
    ) -> DetectionReportList {
        info!(services = matched_services.len(), "GenericPathTraversalDetector starts detecting");

        let services = web_services(matched_services);
        let selected = self.plan(&services);
        info!(
            web_services = services.len(),
            candidates = selected.len(),
            budget = self.config.max_exploits_to_test,
            "Testing path traversal candidates"
        );

        let confirmed = self.verify_all(selected).await;

        let mut reports = DetectionReportList::default();
        for service in &services {
            let exploits: Vec<PotentialExploit> = confirmed
                .iter()
                .filter(|e| e.service() == service)
                .cloned()
                .collect();
            if exploits.is_empty() {
                continue;
            }
            info!(
                service = %service.root_url(),
                confirmed = exploits.len(),
                "Path traversal verified"
            );
            reports.detection_reports.push(build_detection_report(
                target_info,
                service,
                &exploits,
                self.clock.now(),
            ));
        }

        info!(reports = reports.len(), "GenericPathTraversalDetector finished");
        reports
    }

    /// The exact set of candidates a run will send, in testing order.
    pub fn plan(&self, services: &[Arc<NetworkService>]) -> Vec<PotentialExploit> {
        let candidates = services
            .iter()
            .flat_map(|service| self.generate_potential_exploits(service));
        select_for_testing(candidates, self.config.max_exploits_to_test)
    }

    pub fn generate_potential_exploits(
        &self,
        service: &Arc<NetworkService>,
    ) -> Vec<PotentialExploit> {
        let targets = select_crawl_targets(service, self.config.max_crawled_urls_to_fuzz);

        let mut exploits = Vec::new();
        for target in targets {
            let Some(request) = request_from_crawl_target(target) else {
                continue;
            };
            let generator =
                ExploitGenerator::new(request, Arc::clone(service), &self.injection_points);
            for payload in self.profile.payloads() {
                exploits.extend(generator.inject_payload(payload));
            }
        }

        debug!(service = %service.root_url(), candidates = exploits.len(), "Generated candidates");
        exploits
    }

    async fn verify_all(&self, selected: Vec<PotentialExploit>) -> Vec<PotentialExploit> {
        stream::iter(selected)
            .map(|exploit| async move {
                let exploitable = self.verifier.is_exploitable(&exploit).await;
                (exploit, exploitable)
            })
            .buffer_unordered(self.config.max_concurrent_requests)
            .filter_map(|(exploit, exploitable)| async move { exploitable.then_some(exploit) })
            .collect()
            .await
    }
}

/// Web services among the matched ones, without duplicates, in input order.
fn web_services(matched: &[NetworkService]) -> Vec<Arc<NetworkService>> {
    let mut services: Vec<Arc<NetworkService>> = Vec::new();
    for service in matched.iter().filter(|s| s.is_web_service()) {
        if !services.iter().any(|s| s.as_ref() == service) {
            services.push(Arc::new(service.clone()));
        }
    }
    services
}
