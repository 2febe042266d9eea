//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundary between the domain and the managed
//! backend collaborator (authentication, record collections, blob storage)
//! plus the local session cache. Adapters implement them to connect to
//! real infrastructure.

use async_trait::async_trait;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::model::{
    AuthUser, DonationRecord, NewAccount, Profile, Session, SignUp, Subscription,
};

/// Error type for authentication operations.
///
/// The known causes each carry a tailored user-facing message; everything
/// else falls back to a generic one.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid login credentials")]
    InvalidCredentials,
    #[error("Email not confirmed")]
    EmailNotConfirmed,
    #[error("Too many requests")]
    RateLimited,
    #[error("User already registered")]
    AlreadyRegistered,
    #[error("Password too weak")]
    WeakPassword,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
}

impl AuthError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => {
                "Invalid email or password. Please check your credentials and try again."
            }
            AuthError::EmailNotConfirmed => {
                "Please check your email and confirm your account before signing in."
            }
            AuthError::RateLimited => {
                "Too many attempts. Please wait a moment before trying again."
            }
            AuthError::AlreadyRegistered => {
                "An account with this email already exists. Please try logging in instead."
            }
            AuthError::WeakPassword => "Password is too weak. Please use a stronger password.",
            AuthError::InvalidEmail => "Please enter a valid email address.",
            AuthError::Api(_) | AuthError::Network(_) => {
                "The operation failed. Please try again."
            }
        }
    }
}

/// Port for the collaborator's authentication API.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Register a new account with its profile metadata payload.
    async fn sign_up(&self, account: &NewAccount) -> Result<SignUp, AuthError>;

    /// Exchange credentials for a session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Invalidate the session behind the given token.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;

    /// Resolve the user a token belongs to.
    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;
}

/// Error type for record collection operations.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for the collaborator's record collections.
///
/// Only upsert-by-identifier and select-by-equality are used; there are no
/// transactions and no joins.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert or replace a profile keyed by user id.
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RecordError>;

    /// Fetch a profile by user id; absent records are not an error.
    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, RecordError>;

    /// Fetch a subscription by user id; absent records are not an error.
    async fn fetch_subscription(&self, user_id: Uuid)
        -> Result<Option<Subscription>, RecordError>;

    /// Store a new donation listing.
    async fn insert_donation(&self, donation: &DonationRecord) -> Result<(), RecordError>;
}

/// Error type for blob storage operations.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("File too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },
    #[error("API error: {0}")]
    Api(String),
    #[error("Network error: {0}")]
    Network(String),
}

/// Port for the collaborator's blob storage bucket.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload an object under the given path.
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobError>;

    /// Public retrieval address for an object path. No network call.
    fn public_url(&self, path: &str) -> String;
}

/// Error type for the local session cache.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Port for caching the collaborator-issued session between commands.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the cached session, if any.
    async fn load(&self) -> Result<Option<Session>, SessionError>;

    /// Replace the cached session.
    async fn save(&self, session: &Session) -> Result<(), SessionError>;

    /// Drop the cached session; clearing an empty cache is fine.
    async fn clear(&self) -> Result<(), SessionError>;
}

/// Port for time/clock operations (enables deterministic testing).
pub trait Clock: Send + Sync {
    /// Get the current time.
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

// Ports stay usable behind shared references in use cases and tests.

#[async_trait]
impl<A: AuthGateway + ?Sized> AuthGateway for &A {
    async fn sign_up(&self, account: &NewAccount) -> Result<SignUp, AuthError> {
        (*self).sign_up(account).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        (*self).sign_in(email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        (*self).sign_out(access_token).await
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        (*self).current_user(access_token).await
    }
}

#[async_trait]
impl<R: RecordStore + ?Sized> RecordStore for &R {
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RecordError> {
        (*self).upsert_profile(profile).await
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, RecordError> {
        (*self).fetch_profile(user_id).await
    }

    async fn fetch_subscription(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, RecordError> {
        (*self).fetch_subscription(user_id).await
    }

    async fn insert_donation(&self, donation: &DonationRecord) -> Result<(), RecordError> {
        (*self).insert_donation(donation).await
    }
}

#[async_trait]
impl<B: BlobStore + ?Sized> BlobStore for &B {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), BlobError> {
        (*self).upload(path, bytes, content_type).await
    }

    fn public_url(&self, path: &str) -> String {
        (*self).public_url(path)
    }
}

#[async_trait]
impl<S: SessionStore + ?Sized> SessionStore for &S {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        (*self).load().await
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        (*self).save(session).await
    }

    async fn clear(&self) -> Result<(), SessionError> {
        (*self).clear().await
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (*self).now()
    }
}
