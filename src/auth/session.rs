// ABOUTME: Session object holding the single auth-state subscription for the tracker
// ABOUTME: Created once at startup and injected wherever the signed-in user is needed
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::IdentityProvider;
use crate::errors::{AppError, AppResult};
use crate::models::AuthUser;
use tokio::sync::watch;

/// Who is signed in, kept current by one provider subscription
#[derive(Clone, Debug)]
pub struct Session {
    state: watch::Receiver<Option<AuthUser>>,
}

impl Session {
    /// Subscribe to `provider` and track its auth state
    #[must_use]
    pub fn attach(provider: &dyn IdentityProvider) -> Self {
        Self {
            state: provider.on_auth_change(),
        }
    }

    /// Fixed session with no provider behind it
    #[must_use]
    pub fn fixed(user: Option<AuthUser>) -> Self {
        let (_, state) = watch::channel(user);
        Self { state }
    }

    /// Currently signed-in user
    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.state.borrow().clone()
    }

    /// Whether anyone is signed in
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.state.borrow().is_some()
    }

    /// The signed-in user, or `AUTH_REQUIRED`
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when nobody is signed in
    pub fn require_user(&self) -> AppResult<AuthUser> {
        self.current_user().ok_or_else(AppError::auth_required)
    }

    /// Wait for the next auth change and return the new state
    ///
    /// Returns `None` once the provider is gone and no further change can
    /// arrive.
    pub async fn changed(&mut self) -> Option<Option<AuthUser>> {
        self.state.changed().await.ok()?;
        Some(self.state.borrow_and_update().clone())
    }
}
