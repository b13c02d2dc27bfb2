//! # Formula Client
//!
//! Everything that talks to the outside world on behalf of the builder:
//!
//! - [`FormApiClient`]: stores submitted forms and fetches stored ones
//! - [`ClientConfig`]: where the form service lives and how long to wait for it
//! - [`AuthSession`]: who is signed in, as handed over by the identity provider
//!

pub mod api;
pub mod config;
pub mod session;

pub use api::{CreatedForm, FormApiClient};
pub use config::ClientConfig;
pub use session::{AuthSession, UserProfile};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
