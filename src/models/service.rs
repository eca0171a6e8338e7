use serde::{Deserialize, Serialize};

/// Service names that are always treated as web services.
const WEB_SERVICE_NAMES: &[&str] = &[
    "http",
    "https",
    "http-alt",
    "http-proxy",
    "ssl/http",
    "ssl/https",
];

/// The scanned target as reported by the host engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TargetInfo {
    /// Hostnames or IP addresses identifying the target.
    #[serde(default)]
    pub network_endpoints: Vec<String>,
}

/// A (method, url) pair observed while crawling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrawlTarget {
    pub http_method: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CrawlResult {
    pub crawl_target: CrawlTarget,
    /// HTTP status seen at crawl time.
    pub response_code: u16,
}

/// A reachable service on the target, together with the crawl results
/// gathered for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NetworkService {
    pub host: String,
    pub port: u16,
    /// Service name as identified by fingerprinting, e.g. "http" or "ssl/http".
    pub service_name: String,
    /// Path under which the web application is mounted.
    #[serde(default)]
    pub application_root: Option<String>,
    #[serde(default)]
    pub crawl_results: Vec<CrawlResult>,
}

impl NetworkService {
    pub fn is_web_service(&self) -> bool {
        let name = self.service_name.to_lowercase();
        WEB_SERVICE_NAMES.contains(&name.as_str()) || name.starts_with("http")
    }

    pub fn is_plain_http(&self) -> bool {
        let name = self.service_name.to_lowercase();
        !(name == "https"
            || name.starts_with("ssl/")
            || name.starts_with("tls/")
            || self.port == 443)
    }

    /// Root URL of the web application, always ending in `/`.
    pub fn root_url(&self) -> String {
        let (scheme, default_port) = if self.is_plain_http() {
            ("http", 80)
        } else {
            ("https", 443)
        };

        // Bare IPv6 literals need brackets
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };
        let authority = if self.port == default_port {
            host
        } else {
            format!("{}:{}", host, self.port)
        };

        let root = self.application_root.as_deref().unwrap_or("").trim_matches('/');
        if root.is_empty() {
            format!("{}://{}/", scheme, authority)
        } else {
            format!("{}://{}/{}/", scheme, authority, root)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_service(name: &str, port: u16) -> NetworkService {
        NetworkService {
            host: "example.com".to_string(),
            port,
            service_name: name.to_string(),
            application_root: None,
            crawl_results: Vec::new(),
        }
    }

    #[test]
    fn test_web_service_names() {
        assert!(make_service("http", 80).is_web_service());
        assert!(make_service("ssl/http", 443).is_web_service());
        assert!(make_service("HTTP-ALT", 8080).is_web_service());
        assert!(!make_service("ssh", 22).is_web_service());
        assert!(!make_service("mysql", 3306).is_web_service());
    }

    #[test]
    fn test_root_url_default_ports() {
        assert_eq!(make_service("http", 80).root_url(), "http://example.com/");
        assert_eq!(make_service("https", 443).root_url(), "https://example.com/");
    }

    #[test]
    fn test_root_url_custom_port() {
        assert_eq!(make_service("http", 8080).root_url(), "http://example.com:8080/");
        assert_eq!(make_service("ssl/http", 8443).root_url(), "https://example.com:8443/");
    }

    #[test]
    fn test_root_url_application_root() {
        let mut service = make_service("http", 80);
        service.application_root = Some("/app".to_string());
        assert_eq!(service.root_url(), "http://example.com/app/");
        service.application_root = Some("portal/".to_string());
        assert_eq!(service.root_url(), "http://example.com/portal/");
    }

    #[test]
    fn test_root_url_ipv6() {
        let mut service = make_service("http", 8080);
        service.host = "::1".to_string();
        assert_eq!(service.root_url(), "http://[::1]:8080/");
    }

    #[test]
    fn test_crawl_results_default_when_missing() {
        let service: NetworkService = serde_json::from_str(
            r#"{"host": "10.0.0.1", "port": 80, "service_name": "http"}"#,
        )
        .unwrap();
        assert!(service.crawl_results.is_empty());
        assert!(service.application_root.is_none());
    }
}
