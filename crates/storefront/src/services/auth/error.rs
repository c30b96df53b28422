//! Authentication error types.

use thiserror::Error;

use amrita_core::EmailError;

use crate::db::RepositoryError;

/// Errors from authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password combination is wrong.
    ///
    /// Deliberately does not distinguish "no such user" from "wrong
    /// password" in client-facing messages.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No user with the given identity exists.
    #[error("user not found")]
    UserNotFound,

    /// Registration attempted with an email that is already taken.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password does not meet requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// Email failed structural validation.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Requested role is not self-assignable.
    #[error("{0}")]
    InvalidRole(String),

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,

    /// Underlying repository error.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}
