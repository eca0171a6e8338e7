use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "max_crawled_urls_to_fuzz": { "type": "integer", "minimum": 0 },
            "max_exploits_to_test": { "type": "integer", "minimum": 0 },
            "injection_points": {
                "type": "array",
                "minItems": 1,
                "uniqueItems": true,
                "items": {
                    "type": "string",
                    "enum": ["ROOT", "PATH_SUFFIX", "PATH_SEGMENT", "QUERY_PARAMETER"]
                }
            },
            "max_concurrent_requests": { "type": "integer", "minimum": 1 },
            "http": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "timeout_secs": { "type": "integer", "minimum": 1 },
                    "connect_timeout_secs": { "type": "integer", "minimum": 1 },
                    "follow_redirects": { "type": "boolean" },
                    "accept_invalid_certs": { "type": "boolean" },
                    "user_agent": { "type": "string" }
                }
            }
        }
    })
});
