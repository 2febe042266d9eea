//! Authentication flows: registration, login, logout
//!
//! These orchestrate local validation, the collaborator's auth API and the
//! session cache. No credentials are verified or stored here.

use uuid::Uuid;

use crate::{
    model::{NewAccount, ProfileMetadata, Registration, Session},
    ports::{AuthError, AuthGateway, SessionError, SessionStore},
    validation::{validate_credentials, validate_registration, ValidationError},
};

/// Error type for the auth flows.
#[derive(Debug, thiserror::Error)]
pub enum AuthFlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Session cache error: {0}")]
    Session(#[from] SessionError),
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegisterOutcome {
    pub user_id: Uuid,
    pub email: String,
    /// The collaborator wants an e-mail confirmation before first login.
    pub confirmation_pending: bool,
}

/// Use case for registration, login and logout.
pub struct AuthUseCase<A, S> {
    gateway: A,
    sessions: S,
}

impl<A: AuthGateway, S: SessionStore> AuthUseCase<A, S> {
    pub fn new(gateway: A, sessions: S) -> Self {
        Self { gateway, sessions }
    }

    /// Validate the registration form and create the account, forwarding
    /// the profile metadata payload verbatim.
    pub async fn register(&self, form: &Registration) -> Result<RegisterOutcome, AuthFlowError> {
        validate_registration(form)?;

        let account = NewAccount {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            metadata: ProfileMetadata {
                full_name: form.full_name.trim().to_string(),
                user_role: form.kind.role(),
                organization_name: non_blank(form.organization.as_deref()),
                phone: non_blank(form.phone.as_deref()),
                address: non_blank(Some(&form.location)),
            },
        };

        let signup = self.gateway.sign_up(&account).await?;

        tracing::info!(
            user_id = %signup.user.id,
            confirmation_pending = signup.confirmation_pending(),
            "Registered account"
        );

        if let Some(session) = &signup.session {
            self.sessions.save(session).await?;
        }

        Ok(RegisterOutcome {
            user_id: signup.user.id,
            email: signup.user.email.clone(),
            confirmation_pending: signup.confirmation_pending(),
        })
    }

    /// Sign in and cache the issued session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthFlowError> {
        validate_credentials(email, password)?;

        let session = self.gateway.sign_in(email.trim(), password).await?;
        self.sessions.save(&session).await?;

        tracing::info!(user_id = %session.user_id, "Signed in");
        Ok(session)
    }

    /// Sign out of the collaborator and drop the cached session.
    /// Returns `false` when there was no session to end.
    pub async fn logout(&self) -> Result<bool, AuthFlowError> {
        let Some(session) = self.sessions.load().await? else {
            return Ok(false);
        };

        // The local cache goes away even if the remote call fails; a stale
        // token on disk is worse than an unacknowledged sign-out.
        let result = self.gateway.sign_out(&session.access_token).await;
        self.sessions.clear().await?;
        result?;

        tracing::info!(user_id = %session.user_id, "Signed out");
        Ok(true)
    }

    /// The cached session, if any.
    pub async fn current_session(&self) -> Result<Option<Session>, AuthFlowError> {
        Ok(self.sessions.load().await?)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}
