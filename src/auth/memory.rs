// ABOUTME: In-memory identity provider with salted SHA-256 password hashes
// ABOUTME: Used by tests and offline sessions; messages mirror hosted identity services
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::IdentityProvider;
use crate::errors::{AppError, AppResult};
use crate::models::AuthUser;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tracing::info;
use uuid::Uuid;

const MIN_PASSWORD_LEN: usize = 6;

/// Provider messages shown verbatim to the user
mod messages {
    pub const BAD_EMAIL: &str = "The email address is badly formatted.";
    pub const WEAK_PASSWORD: &str = "Password should be at least 6 characters.";
    pub const EMAIL_IN_USE: &str = "The email address is already in use by another account.";
    pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";
}

struct Account {
    user: AuthUser,
    salt: String,
    password_hash: String,
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::auth_invalid(messages::BAD_EMAIL)),
    }
}

/// Identity provider keeping accounts in process memory
#[derive(Clone)]
pub struct InMemoryIdentityProvider {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    state: Arc<watch::Sender<Option<AuthUser>>>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    /// Provider with no accounts and nobody signed in
    #[must_use]
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
            state: Arc::new(state),
        }
    }

    fn publish(&self, user: Option<AuthUser>) {
        self.state.send_replace(user);
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        let email = normalize_email(email)?;
        let user = {
            let accounts = self.accounts.read().await;
            let account = accounts
                .get(&email)
                .ok_or_else(|| AppError::auth_invalid(messages::INVALID_CREDENTIALS))?;
            if hash_password(&account.salt, password) != account.password_hash {
                return Err(AppError::auth_invalid(messages::INVALID_CREDENTIALS)
                    .with_user_id(account.user.id));
            }
            account.user.clone()
        };

        info!(user.id = %user.id, "user signed in");
        self.publish(Some(user.clone()));
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str) -> AppResult<AuthUser> {
        let email = normalize_email(email)?;
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::auth_invalid(messages::WEAK_PASSWORD));
        }

        let user = {
            let mut accounts = self.accounts.write().await;
            if accounts.contains_key(&email) {
                return Err(AppError::auth_invalid(messages::EMAIL_IN_USE));
            }
            let salt = Uuid::new_v4().to_string();
            let user = AuthUser::new(email.clone());
            accounts.insert(
                email,
                Account {
                    user: user.clone(),
                    password_hash: hash_password(&salt, password),
                    salt,
                },
            );
            user
        };

        info!(user.id = %user.id, "account created");
        self.publish(Some(user.clone()));
        Ok(user)
    }

    async fn sign_out(&self) -> AppResult<()> {
        self.publish(None);
        Ok(())
    }

    fn on_auth_change(&self) -> watch::Receiver<Option<AuthUser>> {
        self.state.subscribe()
    }
}
