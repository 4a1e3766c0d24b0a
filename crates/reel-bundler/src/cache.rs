//! Cache-namespace derivation using BLAKE3 content hashing.
//!
//! The namespace isolates persistent-cache partitions per environment and
//! per input-props value, so a rebuild with different props never reads
//! stale artifacts. The derivation is pure and stable across processes.

use blake3::Hasher;
use serde_json::Value;

use crate::environment::Environment;

/// Current namespace format version. Increment when the derivation changes.
const CACHE_FORMAT_VERSION: u32 = 2;

/// Derive the cache namespace for an (environment, input props) pair.
///
/// The name embeds the environment for readability and a 16-hex-digit
/// BLAKE3 prefix over the format version, the environment, and the
/// compact JSON form of the props. `serde_json` objects keep sorted keys,
/// so structurally equal props hash identically.
pub fn cache_name(environment: Environment, input_props: &Value) -> String {
    let mut hasher = Hasher::new();

    hasher.update(&CACHE_FORMAT_VERSION.to_le_bytes());
    hasher.update(environment.as_str().as_bytes());
    hasher.update(b"\0");
    hasher.update(input_props.to_string().as_bytes());

    let hash = hasher.finalize();
    let hex = hash.to_hex();
    format!("reel-{}-{}", environment.as_str(), &hex[..16])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_name_deterministic() {
        let props = json!({"title": "intro", "frames": 120});
        let a = cache_name(Environment::Production, &props);
        let b = cache_name(Environment::Production, &props);
        assert_eq!(a, b);
    }

    #[test]
    fn test_cache_name_ignores_key_insertion_order() {
        let mut first = serde_json::Map::new();
        first.insert("a".into(), json!(1));
        first.insert("b".into(), json!(2));

        let mut second = serde_json::Map::new();
        second.insert("b".into(), json!(2));
        second.insert("a".into(), json!(1));

        assert_eq!(
            cache_name(Environment::Development, &Value::Object(first)),
            cache_name(Environment::Development, &Value::Object(second)),
        );
    }

    #[test]
    fn test_cache_name_changes_on_props_change() {
        let a = cache_name(Environment::Production, &json!({"a": 1}));
        let b = cache_name(Environment::Production, &json!({"a": 2}));
        assert_ne!(a, b);
    }

    #[test]
    fn test_cache_name_changes_on_environment_change() {
        let props = json!({});
        let dev = cache_name(Environment::Development, &props);
        let prod = cache_name(Environment::Production, &props);
        assert_ne!(dev, prod);
    }

    #[test]
    fn test_cache_name_shape() {
        let name = cache_name(Environment::Production, &json!({}));
        let suffix = name.strip_prefix("reel-production-").unwrap();
        assert_eq!(suffix.len(), 16);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
