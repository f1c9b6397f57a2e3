//! Account service
//!
//! Handles user registration, login, session management and profile lookup.

use std::sync::Arc;

use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domain::entities::{NewSession, NewUser, SessionId, User, UserId};
use crate::domain::ports::{SessionRepository, UserRepository};
use crate::error::{AppError, DomainError};

type HmacSha256 = Hmac<Sha256>;

/// Sessions live for a week; expired rows are purged at the next login.
const SESSION_TTL_DAYS: i64 = 7;

/// Service for managing accounts and their sessions
pub struct AccountService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    users: Arc<UR>,
    sessions: Arc<SR>,
}

impl<UR, SR> AccountService<UR, SR>
where
    UR: UserRepository,
    SR: SessionRepository,
{
    pub fn new(users: Arc<UR>, sessions: Arc<SR>) -> Self {
        Self { users, sessions }
    }

    /// Register a new user. The email must not be taken.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        cpf: &str,
    ) -> Result<User, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::Domain(DomainError::AlreadyExists(
                "Email já cadastrado".to_string(),
            )));
        }

        let new_user = NewUser {
            name: name.to_string(),
            email: email.to_string(),
            cpf: cpf.to_string(),
            password_hash: hash_password(password),
        };

        Ok(self.users.create(&new_user).await?)
    }

    /// Verify credentials and open a session.
    ///
    /// Returns the user and the plain session token - the token is never
    /// stored and cannot be recovered later.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        if !verify_password(password, &user.password_hash) {
            return Err(AppError::Unauthorized);
        }

        // Opportunistic cleanup; a failure here must not block the login
        if let Err(e) = self.sessions.delete_expired(Utc::now()).await {
            tracing::warn!(error = %e, "Failed to purge expired sessions");
        }

        let token = generate_session_token();
        let new_session = NewSession {
            user_id: user.id,
            token_hash: hash_session_token(&token),
            expires_at: Utc::now() + Duration::days(SESSION_TTL_DAYS),
        };
        self.sessions.create(&new_session).await?;

        Ok((user, token))
    }

    /// Resolve a bearer token into its user and session.
    ///
    /// Returns `None` for unknown or expired tokens.
    pub async fn authenticate(
        &self,
        token: &str,
    ) -> Result<Option<(User, SessionId)>, AppError> {
        let session = match self
            .sessions
            .find_by_token_hash(&hash_session_token(token))
            .await?
        {
            Some(session) => session,
            None => return Ok(None),
        };

        if session.is_expired(Utc::now()) {
            return Ok(None);
        }

        let user = self.users.find_by_id(&session.user_id).await?;
        Ok(user.map(|u| (u, session.id)))
    }

    /// Close a session (logout)
    pub async fn logout(&self, session_id: &SessionId) -> Result<(), AppError> {
        self.sessions.delete(session_id).await?;
        Ok(())
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AppError> {
        Ok(self.users.find_by_id(id).await?)
    }
}

/// Hash a password with a fresh random salt.
///
/// Format: `hex(salt)$hex(hmac_sha256(salt, password))`.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; 16] = rand::thread_rng().gen();
    let tag = password_tag(&salt, password);
    format!("{}${}", hex::encode(salt), hex::encode(tag))
}

/// Check a password against a stored hash (constant-time on the tag)
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_hex, tag_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(tag)) = (hex::decode(salt_hex), hex::decode(tag_hex)) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(&salt) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(password.as_bytes());
    mac.verify_slice(&tag).is_ok()
}

fn password_tag(salt: &[u8], password: &str) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(salt).expect("HMAC accepts any key length");
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Generate a fresh session token (returned to the client once)
fn generate_session_token() -> String {
    let mut rng = rand::thread_rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.gen()).collect();
    format!("st-{}", hex::encode(bytes))
}

/// Hash a session token for storage and lookup
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
