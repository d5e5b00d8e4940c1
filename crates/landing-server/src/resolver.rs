//! DNS-backed Domain Resolution
//!
//! The browser cannot perform DNS lookups, so the email-capture flow
//! delegates the domain half of validation to this resolver over the
//! JSON API.

use landing_core::DomainResolver;

/// Resolver using the system DNS via tokio
#[derive(Clone, Copy, Debug, Default)]
pub struct DnsResolver;

impl DnsResolver {
    pub fn new() -> Self {
        Self
    }

    /// True when the domain resolves to at least one address. Lookup
    /// errors count as unresolvable; the visitor just retries.
    pub async fn lookup(&self, domain: &str) -> bool {
        match tokio::net::lookup_host((domain, 443)).await {
            Ok(mut addrs) => addrs.next().is_some(),
            Err(e) => {
                tracing::debug!("DNS lookup failed for {domain}: {e}");
                false
            }
        }
    }
}

impl DomainResolver for DnsResolver {
    async fn resolve(&self, domain: &str) -> bool {
        self.lookup(domain).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reserved_tld_does_not_resolve() {
        // RFC 2606 reserves .invalid; it never has DNS records
        let resolver = DnsResolver::new();
        assert!(!resolver.lookup("definitely-nowhere.invalid").await);
    }
}
