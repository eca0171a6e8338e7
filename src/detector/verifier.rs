use std::sync::Arc;

use crate::transport::HttpTransport;
use super::exploit::PotentialExploit;
use super::payloads::TraversalProfile;
use tracing::{debug, info, warn};

/// Sends candidates and applies the response oracle.
pub struct Verifier {
    transport: Arc<dyn HttpTransport>,
    profile: Arc<TraversalProfile>,
}

impl Verifier {
    pub fn new(transport: Arc<dyn HttpTransport>, profile: Arc<TraversalProfile>) -> Self {
        Self { transport, profile }
    }

    /// Issues exactly one request. Transport failures are logged and count as
    /// "not exploitable"; they never abort the scan.
    pub async fn is_exploitable(&self, exploit: &PotentialExploit) -> bool {
        match self.transport.send(exploit.request(), exploit.service()).await {
            Ok(response) => match response.body_string() {
                Some(body) if self.profile.matches(body) => {
                    info!(
                        request = %exploit.request(),
                        status = response.status,
                        "Traversal confirmed"
                    );
                    true
                }
                Some(_) => false,
                None => {
                    debug!(
                        request = %exploit.request(),
                        status = response.status,
                        "Empty response body"
                    );
                    false
                }
            },
            Err(e) => {
                warn!(request = %exploit.request(), error = %e, "Unable to query candidate");
                false
            }
        }
    }
}
