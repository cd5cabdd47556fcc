use axum::http::{header, HeaderMap};
use sha2::{Digest, Sha256};

use backend_domain::RuntimeConfig;

/// Admin requests carry `Authorization: Bearer <admin password>`.
/// Without a configured password every admin request is refused.
pub fn authorize_admin(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    let Some(expected) = config.admin_password.as_deref() else {
        return false;
    };
    extract_bearer(headers)
        .map(|token| digest_matches(&token, expected))
        .unwrap_or(false)
}

fn digest_matches(candidate: &str, expected: &str) -> bool {
    Sha256::digest(candidate.as_bytes()) == Sha256::digest(expected.as_bytes())
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn config(password: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            admin_password: password.map(ToString::to_string),
            ..RuntimeConfig::default()
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );
        headers
    }

    #[test]
    fn matching_password_is_accepted() {
        assert!(authorize_admin(&config(Some("rahasia")), &bearer("rahasia")));
    }

    #[test]
    fn wrong_or_missing_token_is_refused() {
        let config = config(Some("rahasia"));
        assert!(!authorize_admin(&config, &bearer("tebakan")));
        assert!(!authorize_admin(&config, &HeaderMap::new()));

        let mut basic = HeaderMap::new();
        basic.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic cmFoYXNpYQ=="));
        assert!(!authorize_admin(&config, &basic));
    }

    #[test]
    fn unset_password_fails_closed() {
        assert!(!authorize_admin(&config(None), &bearer("anything")));
    }
}
