use serde::{Deserialize, Serialize};

/// Location in a request where a traversal payload is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InjectionPoint {
    /// Payload placed directly under the origin, dropping path and query.
    Root,
    /// Payload appended to the full request path.
    PathSuffix,
    /// Payload replacing one path segment at a time.
    PathSegment,
    /// Payload replacing one query parameter value at a time.
    QueryParameter,
}

impl InjectionPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::PathSuffix => "PATH_SUFFIX",
            Self::PathSegment => "PATH_SEGMENT",
            Self::QueryParameter => "QUERY_PARAMETER",
        }
    }
}

impl std::fmt::Display for InjectionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectorConfig {
    /// Crawled URLs fuzzed per service, taken in URL order.
    #[serde(default = "default_max_crawled_urls_to_fuzz")]
    pub max_crawled_urls_to_fuzz: usize,
    /// Upper bound on requests sent per detection run.
    #[serde(default = "default_max_exploits_to_test")]
    pub max_exploits_to_test: usize,
    /// Ordered from highest to lowest testing priority.
    #[serde(default = "default_injection_points")]
    pub injection_points: Vec<InjectionPoint>,
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
    #[serde(default)]
    pub http: HttpClientConfig,
}

fn default_max_crawled_urls_to_fuzz() -> usize {
    50
}

fn default_max_exploits_to_test() -> usize {
    500
}

fn default_injection_points() -> Vec<InjectionPoint> {
    vec![
        InjectionPoint::QueryParameter,
        InjectionPoint::PathSegment,
        InjectionPoint::PathSuffix,
        InjectionPoint::Root,
    ]
}

fn default_max_concurrent_requests() -> usize {
    10
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_crawled_urls_to_fuzz: default_max_crawled_urls_to_fuzz(),
            max_exploits_to_test: default_max_exploits_to_test(),
            injection_points: default_injection_points(),
            max_concurrent_requests: default_max_concurrent_requests(),
            http: HttpClientConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpClientConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default)]
    pub follow_redirects: bool,
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
    pub user_agent: Option<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_accept_invalid_certs() -> bool {
    true
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            follow_redirects: false,
            accept_invalid_certs: default_accept_invalid_certs(),
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injection_point_deserialize() {
        let parsed: InjectionPoint = serde_json::from_str("\"PATH_SUFFIX\"").unwrap();
        assert_eq!(parsed, InjectionPoint::PathSuffix);
        let parsed: InjectionPoint = serde_json::from_str("\"QUERY_PARAMETER\"").unwrap();
        assert_eq!(parsed, InjectionPoint::QueryParameter);
    }

    #[test]
    fn test_injection_point_unknown_rejected() {
        assert!(serde_json::from_str::<InjectionPoint>("\"COOKIE\"").is_err());
    }

    #[test]
    fn test_injection_point_display() {
        assert_eq!(format!("{}", InjectionPoint::PathSegment), "PATH_SEGMENT");
        assert_eq!(InjectionPoint::Root.as_str(), "ROOT");
    }

    #[test]
    fn test_detector_config_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.max_crawled_urls_to_fuzz, 50);
        assert_eq!(config.max_exploits_to_test, 500);
        assert_eq!(config.injection_points[0], InjectionPoint::QueryParameter);
        assert_eq!(config.injection_points.len(), 4);
        assert_eq!(config.max_concurrent_requests, 10);
    }

    #[test]
    fn test_http_client_config_defaults() {
        let config = HttpClientConfig::default();
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.connect_timeout_secs, 5);
        assert!(!config.follow_redirects);
        assert!(config.accept_invalid_certs);
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: DetectorConfig = serde_yaml::from_str("max_exploits_to_test: 3").unwrap();
        assert_eq!(config.max_exploits_to_test, 3);
        assert_eq!(config.max_crawled_urls_to_fuzz, 50);
        assert_eq!(config.http.timeout_secs, 10);
    }
}
