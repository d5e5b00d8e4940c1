//! Application State

use crate::resolver::DnsResolver;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// DNS resolver backing the email-domain check
    pub resolver: DnsResolver,
}
