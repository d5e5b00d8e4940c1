//! Onboarding Dialog Flow
//!
//! Explicit state machine behind the early-access modals. A fresh
//! visitor walks teaser -> email capture -> thank-you; a returning
//! visitor (persisted lead) jumps straight to thank-you on any
//! trigger. The flow object is session-scoped and passed around
//! explicitly, never held in a global.

use crate::email::{DomainResolver, validate_email};
use crate::error::Result;
use crate::lead::{User, load_user, save_user};
use crate::store::KeyValueStore;

/// The three mutually exclusive modal dialogs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialog {
    /// Teaser: the agent is not live yet
    Notify,
    /// Email capture
    Subscribe,
    /// Thank-you for registered visitors
    Thanks,
}

/// Session-scoped dialog sequencer.
///
/// `default_dialog` is what a fresh trigger opens; `open_dialog` is
/// what is currently forced open, if anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OnboardingFlow {
    default_dialog: Dialog,
    open_dialog: Option<Dialog>,
}

impl OnboardingFlow {
    /// Initialize from persisted state: a stored lead means triggers
    /// go straight to the thank-you dialog. A missing or unreadable
    /// record is the normal first-time default, not an error.
    pub fn resume(store: &dyn KeyValueStore) -> Self {
        let default_dialog = match load_user(store) {
            Ok(Some(_)) => Dialog::Thanks,
            Ok(None) => Dialog::Notify,
            Err(e) => {
                tracing::warn!("unreadable persisted lead, treating as first visit: {e}");
                Dialog::Notify
            }
        };
        Self {
            default_dialog,
            open_dialog: None,
        }
    }

    pub fn default_dialog(&self) -> Dialog {
        self.default_dialog
    }

    pub fn open_dialog(&self) -> Option<Dialog> {
        self.open_dialog
    }

    /// A suggestion click or chat submission: open whatever the
    /// session's default dialog is.
    pub fn trigger(&mut self) {
        self.open_dialog = Some(self.default_dialog);
    }

    /// "Next" on the teaser moves to email capture; no-op elsewhere.
    pub fn advance(&mut self) {
        if self.open_dialog == Some(Dialog::Notify) {
            self.open_dialog = Some(Dialog::Subscribe);
        }
    }

    /// Submit an email from the capture dialog.
    ///
    /// On success the lead is persisted exactly once, the thank-you
    /// dialog opens, and it becomes the session default. On rejection
    /// the capture dialog stays open and nothing is persisted; the
    /// caller shows the warning and re-prompts.
    pub async fn submit_email<R: DomainResolver>(
        &mut self,
        email: &str,
        resolver: &R,
        store: &dyn KeyValueStore,
    ) -> Result<()> {
        validate_email(email, resolver).await?;

        save_user(store, &User::new(email))?;
        tracing::info!("registered early-access lead");

        self.open_dialog = Some(Dialog::Thanks);
        self.default_dialog = Dialog::Thanks;
        Ok(())
    }

    /// Close the open dialog. The session default is untouched, so a
    /// registered visitor's next trigger reopens the thank-you.
    pub fn dismiss(&mut self) {
        self.open_dialog = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::StaticResolver;
    use crate::lead::USER_KEY;
    use crate::store::MemoryStore;

    fn fresh_flow(store: &MemoryStore) -> OnboardingFlow {
        OnboardingFlow::resume(store)
    }

    #[test]
    fn test_first_trigger_opens_teaser() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);

        assert_eq!(flow.open_dialog(), None);
        flow.trigger();
        assert_eq!(flow.open_dialog(), Some(Dialog::Notify));
    }

    #[test]
    fn test_next_moves_to_email_capture() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);

        flow.trigger();
        flow.advance();
        assert_eq!(flow.open_dialog(), Some(Dialog::Subscribe));
    }

    #[test]
    fn test_advance_is_noop_outside_teaser() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);

        flow.advance();
        assert_eq!(flow.open_dialog(), None);

        flow.trigger();
        flow.advance();
        flow.advance();
        assert_eq!(flow.open_dialog(), Some(Dialog::Subscribe));
    }

    #[test]
    fn test_returning_visitor_goes_straight_to_thanks() {
        let store = MemoryStore::new();
        store.set(USER_KEY, r#"{"email":"fan@example.com"}"#).unwrap();

        let mut flow = fresh_flow(&store);
        assert_eq!(flow.default_dialog(), Dialog::Thanks);

        flow.trigger();
        assert_eq!(flow.open_dialog(), Some(Dialog::Thanks));
    }

    #[test]
    fn test_corrupt_lead_record_means_first_visit() {
        let store = MemoryStore::new();
        store.set(USER_KEY, "not json").unwrap();

        let flow = fresh_flow(&store);
        assert_eq!(flow.default_dialog(), Dialog::Notify);
    }

    #[tokio::test]
    async fn test_invalid_email_keeps_capture_open() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);
        flow.trigger();
        flow.advance();

        let err = flow
            .submit_email("not-an-email", &StaticResolver::resolving(), &store)
            .await
            .unwrap_err();

        assert!(err.is_email_rejection());
        assert_eq!(flow.open_dialog(), Some(Dialog::Subscribe));
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_unresolvable_domain_is_rejected_like_invalid() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);
        flow.trigger();
        flow.advance();

        let err = flow
            .submit_email("fan@nowhere.invalid", &StaticResolver::non_resolving(), &store)
            .await
            .unwrap_err();

        assert!(err.is_email_rejection());
        assert_eq!(flow.open_dialog(), Some(Dialog::Subscribe));
        assert_eq!(store.get(USER_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_valid_email_persists_once_and_opens_thanks() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);
        flow.trigger();
        flow.advance();

        flow.submit_email("user@example.com", &StaticResolver::resolving(), &store)
            .await
            .unwrap();

        assert_eq!(
            store.get(USER_KEY).unwrap().as_deref(),
            Some(r#"{"email":"user@example.com"}"#)
        );
        assert_eq!(flow.open_dialog(), Some(Dialog::Thanks));
        assert_eq!(flow.default_dialog(), Dialog::Thanks);
    }

    #[tokio::test]
    async fn test_close_keeps_thanks_as_default() {
        let store = MemoryStore::new();
        let mut flow = fresh_flow(&store);
        flow.trigger();
        flow.advance();
        flow.submit_email("user@example.com", &StaticResolver::resolving(), &store)
            .await
            .unwrap();

        flow.dismiss();
        assert_eq!(flow.open_dialog(), None);
        assert_eq!(flow.default_dialog(), Dialog::Thanks);

        // A later trigger reopens thanks, never the earlier dialogs
        flow.trigger();
        assert_eq!(flow.open_dialog(), Some(Dialog::Thanks));
    }
}
