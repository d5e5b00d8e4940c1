//! API Client
//!
//! The browser delegates the DNS half of email validation to the
//! server; everything else on the page is local.

use landing_core::DomainResolver;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DomainCheckResponse {
    resolvable: bool,
}

/// Page origin; reqwest needs absolute URLs, a bare path won't parse
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn domain_check_url(origin: &str) -> String {
    format!("{origin}/api/validate/domain")
}

/// Ask the server whether a domain has a DNS record. A failed request
/// counts as unresolvable; the submission is rejected and the visitor
/// can retry.
pub async fn check_domain(domain: &str) -> bool {
    let client = reqwest::Client::new();

    let response = client
        .post(domain_check_url(&page_origin()))
        .json(&serde_json::json!({ "domain": domain }))
        .send()
        .await;

    match response {
        Ok(resp) if resp.status().is_success() => resp
            .json::<DomainCheckResponse>()
            .await
            .map(|r| r.resolvable)
            .unwrap_or(false),
        _ => false,
    }
}

/// Server-backed resolver plugged into the onboarding flow
#[derive(Clone, Copy, Debug, Default)]
pub struct ApiResolver;

impl ApiResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DomainResolver for ApiResolver {
    async fn resolve(&self, domain: &str) -> bool {
        check_domain(domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_url_is_absolute() {
        let url = domain_check_url("http://localhost:3000");
        assert_eq!(url, "http://localhost:3000/api/validate/domain");
        // An absolute URL carries a scheme; a bare path would fail
        // reqwest's URL parsing before the request is ever sent
        assert!(url.starts_with("http"));
    }
}
