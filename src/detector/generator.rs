use std::sync::Arc;

use reqwest::Url;
use crate::config::InjectionPoint;
use crate::models::{CrawlTarget, HttpMethod, HttpRequest, NetworkService};
use super::exploit::{InjectionPointOrder, PotentialExploit, Priority};
use tracing::debug;

/// Builds the request template for a crawled endpoint. Returns `None` for
/// methods the transport cannot express.
pub fn request_from_crawl_target(target: &CrawlTarget) -> Option<HttpRequest> {
    match target.http_method.parse::<HttpMethod>() {
        Ok(method) => Some(HttpRequest {
            method,
            url: target.url.clone(),
            headers: Vec::new(),
        }),
        Err(e) => {
            debug!(url = %target.url, error = %e, "Skipping crawl target");
            None
        }
    }
}

/// Raw pieces of a template URL. Payloads are spliced into these strings
/// directly so their percent-encoding survives untouched.
struct UrlParts {
    origin: String,
    path: String,
    query: Option<String>,
}

impl UrlParts {
    fn parse(raw: &str) -> Option<Self> {
        let url = Url::parse(raw).ok()?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return None;
        }
        let host = url.host_str()?;
        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Some(Self {
            origin,
            path: url.path().to_string(),
            query: url.query().map(|q| q.to_string()),
        })
    }

    fn query_suffix(&self) -> String {
        match &self.query {
            Some(q) => format!("?{}", q),
            None => String::new(),
        }
    }

    fn at_root(&self, payload: &str) -> Vec<String> {
        vec![format!("{}/{}", self.origin, payload)]
    }

    fn at_path_suffix(&self, payload: &str) -> Vec<String> {
        let separator = if self.path.ends_with('/') { "" } else { "/" };
        vec![format!(
            "{}{}{}{}{}",
            self.origin,
            self.path,
            separator,
            payload,
            self.query_suffix()
        )]
    }

    fn at_path_segments(&self, payload: &str) -> Vec<String> {
        let segments: Vec<&str> = self.path.trim_start_matches('/').split('/').collect();
        let query = self.query_suffix();

        segments
            .iter()
            .enumerate()
            .filter(|(_, segment)| !segment.is_empty())
            .map(|(i, _)| {
                let mut replaced = segments.clone();
                replaced[i] = payload;
                format!("{}/{}{}", self.origin, replaced.join("/"), query)
            })
            .collect()
    }

    fn at_query_parameters(&self, payload: &str) -> Vec<String> {
        let Some(query) = &self.query else {
            return Vec::new();
        };
        let params: Vec<&str> = query.split('&').collect();

        params
            .iter()
            .enumerate()
            .filter(|(_, param)| !param.is_empty())
            .map(|(i, param)| {
                let name = param.split_once('=').map_or(*param, |(name, _)| name);
                let injected = format!("{}={}", name, payload);
                let rebuilt: Vec<&str> = params
                    .iter()
                    .enumerate()
                    .map(|(j, p)| if i == j { injected.as_str() } else { *p })
                    .collect();
                format!("{}{}?{}", self.origin, self.path, rebuilt.join("&"))
            })
            .collect()
    }
}

/// Synthesizes candidates for one request template of one service.
///
/// `PATH_SEGMENT` and `QUERY_PARAMETER` yield one candidate per segment or
/// parameter, and none when the URL has no segment or query.
pub struct ExploitGenerator<'a> {
    request: HttpRequest,
    service: Arc<NetworkService>,
    injection_points: &'a InjectionPointOrder,
    parts: Option<UrlParts>,
}

impl<'a> ExploitGenerator<'a> {
    pub fn new(
        request: HttpRequest,
        service: Arc<NetworkService>,
        injection_points: &'a InjectionPointOrder,
    ) -> Self {
        let parts = UrlParts::parse(&request.url);
        if parts.is_none() {
            debug!(url = %request.url, "Unable to parse crawled URL, no candidates generated");
        }
        Self {
            request,
            service,
            injection_points,
            parts,
        }
    }

    /// One candidate per configured injection point (per segment or
    /// parameter for the positional points).
    pub fn inject_payload(&self, payload: &str) -> Vec<PotentialExploit> {
        let Some(parts) = &self.parts else {
            return Vec::new();
        };

        let mut exploits = Vec::new();
        for (point, priority) in self.injection_points.iter() {
            let urls = match point {
                InjectionPoint::Root => parts.at_root(payload),
                InjectionPoint::PathSuffix => parts.at_path_suffix(payload),
                InjectionPoint::PathSegment => parts.at_path_segments(payload),
                InjectionPoint::QueryParameter => parts.at_query_parameters(payload),
            };
            exploits.extend(
                urls.into_iter()
                    .map(|url| self.candidate(url, priority, point, payload)),
            );
        }
        exploits
    }

    fn candidate(
        &self,
        url: String,
        priority: Priority,
        point: InjectionPoint,
        payload: &str,
    ) -> PotentialExploit {
        PotentialExploit::new(
            self.request.with_url(url),
            Arc::clone(&self.service),
            priority,
            point,
            payload,
        )
    }
}
