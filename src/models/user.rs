//! User model and the authenticated principal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::Role;
use crate::error::AppError;

/// User model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Short barber representation for the public listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BarberSummary {
    pub id: i32,
    pub name: String,
}

/// Claims carried by bearer tokens from the identity provider. The server
/// verifies the signature and trusts `user_id` and `role`; it does not issue
/// tokens itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Sign a token for these claims (used by tests and tooling; production
    /// tokens come from the identity provider).
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a bearer token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_barber(&self) -> bool {
        self.role == Role::Barber
    }

    /// Require the barber role (availability management, status updates)
    pub fn require_barber(&self) -> Result<(), AppError> {
        if self.is_barber() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Barber role required".to_string(),
            ))
        }
    }

    /// Require that the operation targets the principal's own account
    pub fn require_self(&self, user_id: i32) -> Result<(), AppError> {
        if self.user_id == user_id {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Operation not permitted on another user's behalf".to_string(),
            ))
        }
    }
}
