// ABOUTME: Identity provider contract and the session object injected into the tracker
// ABOUTME: Providers publish auth changes on a watch channel; the session holds the one subscription
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Authentication
//!
//! Sign-in flows belong to the host application. The tracker only needs the
//! provider contract below and a `Session` to learn who is signed in.

/// In-memory identity provider
pub mod memory;
/// Session object tracking the signed-in user
pub mod session;

pub use memory::InMemoryIdentityProvider;
pub use session::Session;

use crate::errors::AppResult;
use crate::models::AuthUser;
use async_trait::async_trait;
use tokio::sync::watch;

/// External identity provider
///
/// Errors are `AUTH_INVALID` with the provider's message, meant to be shown
/// to the user verbatim.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Sign in with email and password
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` if the credentials are rejected
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser>;

    /// Create an account and sign in
    ///
    /// # Errors
    ///
    /// Returns `AUTH_INVALID` if the account cannot be created
    async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthUser>;

    /// Sign out the current user
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to sign out
    async fn sign_out(&self) -> AppResult<()>;

    /// Subscribe to auth state changes
    ///
    /// The receiver starts with the current user and sees every later change.
    fn on_auth_change(&self) -> watch::Receiver<Option<AuthUser>>;
}
