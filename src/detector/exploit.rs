use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::config::InjectionPoint;
use crate::models::{HttpRequest, NetworkService};

/// Testing priority of a candidate. Lower ranks are tested first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(usize);

/// Configured injection points, in priority order.
///
/// The list is expected to have passed `validate_config` (non-empty, no
/// duplicates).
#[derive(Debug, Clone)]
pub struct InjectionPointOrder {
    points: Vec<InjectionPoint>,
}

impl InjectionPointOrder {
    pub fn new(points: Vec<InjectionPoint>) -> Self {
        Self { points }
    }

    pub fn priority_of(&self, point: InjectionPoint) -> Option<Priority> {
        self.points.iter().position(|p| *p == point).map(Priority)
    }

    /// Points paired with their priority, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = (InjectionPoint, Priority)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (*p, Priority(i)))
    }
}

/// A synthesized request that may expose a file on its owning service.
///
/// Two candidates are equal when they send the same request to the same
/// service. Priority and provenance are ignored, so distinct generation paths
/// that land on the same URL collapse into one candidate.
#[derive(Debug, Clone)]
pub struct PotentialExploit {
    request: HttpRequest,
    service: Arc<NetworkService>,
    priority: Priority,
    injection_point: InjectionPoint,
    payload: String,
}

impl PotentialExploit {
    pub fn new(
        request: HttpRequest,
        service: Arc<NetworkService>,
        priority: Priority,
        injection_point: InjectionPoint,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            request,
            service,
            priority,
            injection_point,
            payload: payload.into(),
        }
    }

    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn service(&self) -> &Arc<NetworkService> {
        &self.service
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn injection_point(&self) -> InjectionPoint {
        self.injection_point
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Total order used to pick what gets tested: priority, then URL, with
    /// method and the owning service as final tie-breaks.
    ///
    /// Returns `Equal` only for candidates that are also `==`.
    pub fn testing_order(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.request.url.cmp(&other.request.url))
            .then_with(|| self.request.method.cmp(&other.request.method))
            .then_with(|| self.request.headers.cmp(&other.request.headers))
            .then_with(|| self.service.as_ref().cmp(other.service.as_ref()))
    }
}

impl PartialEq for PotentialExploit {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request && self.service == other.service
    }
}

impl Eq for PotentialExploit {}

impl Hash for PotentialExploit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.request.hash(state);
        self.service.hash(state);
    }
}

impl fmt::Display for PotentialExploit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (injection point: {}, payload: {})",
            self.request.method, self.request.url, self.injection_point, self.payload
        )
    }
}
