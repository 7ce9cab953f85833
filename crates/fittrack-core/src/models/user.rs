// ABOUTME: Authenticated user record returned by identity providers
// ABOUTME: Opaque to the tracker beyond its id and email
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Provider-assigned user id
    pub id: Uuid,
    /// Email address used to sign in
    pub email: String,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl AuthUser {
    /// Create a new user with a fresh id
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}
