//! Email Validation
//!
//! Two-step check before a lead is persisted: an anchored syntax
//! pattern, then a DNS lookup of the domain through the
//! [`DomainResolver`] seam. The browser build delegates the lookup to
//! the server; tests substitute a static resolver.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{LandingError, Result};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$")
        .expect("email pattern compiles")
});

/// Syntax check only; no network involved
pub fn is_well_formed(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Domain part of an address, after the last `@`
pub fn domain_of(email: &str) -> Option<&str> {
    email.rsplit_once('@').map(|(_, domain)| domain)
}

/// Answers whether a domain has a resolvable DNS record.
///
/// A transient lookup failure counts as unresolvable; the submission
/// is simply rejected and the visitor retries.
#[allow(async_fn_in_trait)]
pub trait DomainResolver {
    async fn resolve(&self, domain: &str) -> bool;
}

/// Full validation: syntax first, then DNS. Both must pass before a
/// lead may be persisted.
pub async fn validate_email<R: DomainResolver>(email: &str, resolver: &R) -> Result<()> {
    if !is_well_formed(email) {
        return Err(LandingError::InvalidEmail(email.into()));
    }
    let domain = domain_of(email)
        .ok_or_else(|| LandingError::InvalidEmail(email.into()))?;
    if !resolver.resolve(domain).await {
        return Err(LandingError::UnresolvableDomain(domain.into()));
    }
    Ok(())
}

/// Fixed-answer resolver for tests and offline use
#[derive(Clone, Copy, Debug)]
pub struct StaticResolver {
    resolves: bool,
}

impl StaticResolver {
    /// Resolver that accepts every domain
    pub fn resolving() -> Self {
        Self { resolves: true }
    }

    /// Resolver that rejects every domain
    pub fn non_resolving() -> Self {
        Self { resolves: false }
    }
}

impl DomainResolver for StaticResolver {
    async fn resolve(&self, _domain: &str) -> bool {
        self.resolves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_addresses() {
        for email in [
            "fan@example.com",
            "first.last@example.co.uk",
            "stats+nba@analytics-hub.io",
        ] {
            assert!(is_well_formed(email), "{email} should pass");
        }
    }

    #[test]
    fn test_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "missing-domain@",
            "@missing-local.com",
            "no-dot@domain",
            "spaces in@example.com",
        ] {
            assert!(!is_well_formed(email), "{email} should fail");
        }
    }

    #[test]
    fn test_domain_extraction() {
        assert_eq!(domain_of("fan@example.com"), Some("example.com"));
        assert_eq!(domain_of("no-at-sign"), None);
    }

    #[tokio::test]
    async fn test_validation_requires_syntax() {
        let err = validate_email("not-an-email", &StaticResolver::resolving())
            .await
            .unwrap_err();
        assert!(matches!(err, LandingError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_validation_requires_dns() {
        let err = validate_email("fan@nowhere.invalid", &StaticResolver::non_resolving())
            .await
            .unwrap_err();
        assert!(matches!(err, LandingError::UnresolvableDomain(_)));
    }

    #[tokio::test]
    async fn test_validation_passes_both_checks() {
        validate_email("fan@example.com", &StaticResolver::resolving())
            .await
            .unwrap();
    }
}
