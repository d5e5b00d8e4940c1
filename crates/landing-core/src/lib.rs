//! # landing-core
//!
//! Core logic for the Courtside early-access landing page: the typed
//! message/attachment model behind the canned transcript, the
//! onboarding dialog state machine, email validation, and the
//! key-value persistence seam.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     Landing Page                         │
//! │  ┌────────────┐  ┌───────────────┐  ┌────────────────┐   │
//! │  │  Transcript│  │ OnboardingFlow│  │ KeyValueStore  │   │
//! │  │  (Messages)│  │ (state machine│──│ localStorage / │   │
//! │  └────────────┘  │  + email check│  │ memory         │   │
//! │                  └───────────────┘  └────────────────┘   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The `DomainResolver` trait keeps the DNS half of email validation
//! swappable: real lookups on the server, an API call from the
//! browser, a fixed answer in tests.

pub mod content;
pub mod email;
pub mod error;
pub mod lead;
pub mod message;
pub mod onboarding;
pub mod store;

pub use email::DomainResolver;
pub use error::{LandingError, Result};
pub use lead::{USER_KEY, User};
pub use message::{ContentBlock, DataTable, Message, Role, Suggestion};
pub use onboarding::{Dialog, OnboardingFlow};
pub use store::{KeyValueStore, MemoryStore};
