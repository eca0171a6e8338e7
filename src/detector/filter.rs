use crate::models::{CrawlResult, CrawlTarget, NetworkService};

/// Accepts GET requests whose crawl-time status is not a redirect. Client and
/// server errors are fuzzed too: some servers leak file contents on error pages.
pub fn should_fuzz(crawl_result: &CrawlResult) -> bool {
    let code = crawl_result.response_code;
    !(300..400).contains(&code) && crawl_result.crawl_target.http_method == "GET"
}

/// Eligible crawl targets of a service, in URL order, capped at `max_targets`.
pub fn select_crawl_targets(service: &NetworkService, max_targets: usize) -> Vec<&CrawlTarget> {
    let mut targets: Vec<&CrawlTarget> = service
        .crawl_results
        .iter()
        .filter(|r| should_fuzz(r))
        .map(|r| &r.crawl_target)
        .collect();

    targets.sort_by(|a, b| a.url.cmp(&b.url));
    targets.truncate(max_targets);
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crawl(method: &str, url: &str, code: u16) -> CrawlResult {
        CrawlResult {
            crawl_target: CrawlTarget {
                http_method: method.to_string(),
                url: url.to_string(),
            },
            response_code: code,
        }
    }

    fn service_with(results: Vec<CrawlResult>) -> NetworkService {
        NetworkService {
            host: "example.com".to_string(),
            port: 80,
            service_name: "http".to_string(),
            application_root: None,
            crawl_results: results,
        }
    }

    #[test]
    fn test_get_success_is_fuzzed() {
        assert!(should_fuzz(&crawl("GET", "http://example.com/", 200)));
    }

    #[test]
    fn test_get_server_error_is_fuzzed() {
        assert!(should_fuzz(&crawl("GET", "http://example.com/", 500)));
        assert!(should_fuzz(&crawl("GET", "http://example.com/", 404)));
    }

    #[test]
    fn test_redirects_are_skipped() {
        assert!(!should_fuzz(&crawl("GET", "http://example.com/", 300)));
        assert!(!should_fuzz(&crawl("GET", "http://example.com/", 301)));
        assert!(!should_fuzz(&crawl("GET", "http://example.com/", 399)));
        assert!(should_fuzz(&crawl("GET", "http://example.com/", 400)));
    }

    #[test]
    fn test_post_is_never_fuzzed() {
        for code in [200, 301, 404, 500] {
            assert!(!should_fuzz(&crawl("POST", "http://example.com/", code)));
        }
    }

    #[test]
    fn test_method_match_is_exact() {
        assert!(!should_fuzz(&crawl("get", "http://example.com/", 200)));
        assert!(!should_fuzz(&crawl("HEAD", "http://example.com/", 200)));
    }

    #[test]
    fn test_select_sorts_and_caps() {
        let service = service_with(vec![
            crawl("GET", "http://example.com/c", 200),
            crawl("POST", "http://example.com/a", 200),
            crawl("GET", "http://example.com/b", 500),
            crawl("GET", "http://example.com/old", 302),
            crawl("GET", "http://example.com/a", 200),
        ]);

        let selected = select_crawl_targets(&service, 2);
        let urls: Vec<&str> = selected.iter().map(|t| t.url.as_str()).collect();
        assert_eq!(urls, vec!["http://example.com/a", "http://example.com/b"]);
    }

    #[test]
    fn test_select_zero_cap() {
        let service = service_with(vec![crawl("GET", "http://example.com/a", 200)]);
        assert!(select_crawl_targets(&service, 0).is_empty());
    }
}
