//! Identity session
//!
//! Sign-in happens with an external identity provider. The app only receives
//! the resulting profile and access token, handed over through the
//! environment:
//!
//! - `FORMULA_USER_SUB` (required for a session)
//! - `FORMULA_USER_EMAIL`
//! - `FORMULA_USER_NAME`
//! - `FORMULA_TOKEN`

use serde::{Deserialize, Serialize};
use std::env;

/// Signed-in user as reported by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable subject identifier
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Authentication state of the app
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthSession {
    user: Option<UserProfile>,
    token: Option<String>,
}

impl AuthSession {
    /// A session with nobody signed in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A signed-in session
    pub fn signed_in(user: UserProfile, token: Option<String>) -> Self {
        Self {
            user: Some(user),
            token,
        }
    }

    /// Read the session from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read the session through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(sub) = non_empty("FORMULA_USER_SUB") else {
            tracing::debug!("No identity session in environment");
            return Self::anonymous();
        };

        let user = UserProfile {
            sub,
            email: non_empty("FORMULA_USER_EMAIL"),
            name: non_empty("FORMULA_USER_NAME"),
        };
        tracing::info!("Signed in as {}", user.email.as_deref().unwrap_or(&user.sub));
        Self::signed_in(user, non_empty("FORMULA_TOKEN"))
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Bearer token to send with API requests
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Owner id stamped on submitted forms
    pub fn owner_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.sub.as_str())
    }

    /// Name to greet the user with
    pub fn display_name(&self) -> Option<&str> {
        let user = self.user.as_ref()?;
        Some(
            user.name
                .as_deref()
                .or(user.email.as_deref())
                .unwrap_or(&user.sub),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
