//! HTTP adapter for the collaborator's token-based auth API

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;
use zerohunger_domain::{
    AuthError, AuthGateway, AuthUser, NewAccount, ProfileMetadata, Session, SignUp,
};

/// Auth gateway speaking the collaborator's `/auth/v1` endpoints.
pub struct HttpAuthGateway {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl HttpAuthGateway {
    pub fn new(base_url: String, api_key: SecretString) -> Self {
        Self::with_timeout(base_url, api_key, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: String, api_key: SecretString, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    async fn fault_from(response: reqwest::Response) -> AuthError {
        if response.status() == 429 {
            return AuthError::RateLimited;
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<WireFault>(&body)
            .ok()
            .and_then(WireFault::message)
            .unwrap_or(body);

        classify_fault(status.as_u16(), &message)
    }
}

/// Map a fault status/message onto the closed error causes. The message
/// matching mirrors the phrases the collaborator is known to return.
fn classify_fault(status: u16, message: &str) -> AuthError {
    if status == 429 || message.contains("Too many requests") {
        return AuthError::RateLimited;
    }
    if message.contains("Invalid login credentials") {
        return AuthError::InvalidCredentials;
    }
    if message.contains("Email not confirmed") {
        return AuthError::EmailNotConfirmed;
    }
    if message.contains("already registered") {
        return AuthError::AlreadyRegistered;
    }
    if message.contains("Password should be at least") {
        return AuthError::WeakPassword;
    }
    if message.contains("Unable to validate email address")
        || message.to_lowercase().contains("invalid email")
    {
        return AuthError::InvalidEmail;
    }
    AuthError::Api(format!("API returned {}: {}", status, message))
}

#[derive(Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a ProfileMetadata,
}

#[derive(Serialize)]
struct PasswordGrantRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Fault payloads vary by endpoint; take whichever message field is set.
#[derive(Deserialize)]
struct WireFault {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl WireFault {
    fn message(self) -> Option<String> {
        self.error_description.or(self.msg).or(self.message)
    }
}

#[derive(Deserialize)]
struct WireSession {
    access_token: String,
    user: WireUser,
}

#[derive(Deserialize)]
struct WireUser {
    id: Uuid,
    email: String,
    #[serde(default)]
    confirmed_at: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
}

impl WireUser {
    fn into_auth_user(self) -> AuthUser {
        let confirmed_at = self
            .email_confirmed_at
            .or(self.confirmed_at)
            .and_then(|raw| OffsetDateTime::parse(&raw, &Rfc3339).ok());
        AuthUser {
            id: self.id,
            email: self.email,
            confirmed_at,
        }
    }
}

/// Sign-up returns a session when confirmation is disabled and a bare user
/// object when a confirmation e-mail was sent.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpBody {
    Issued(WireSession),
    Pending(WireUser),
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn sign_up(&self, account: &NewAccount) -> Result<SignUp, AuthError> {
        let request = SignUpRequest {
            email: &account.email,
            password: &account.password,
            data: &account.metadata,
        };

        let response = self
            .client
            .post(self.endpoint("signup"))
            .header("apikey", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fault_from(response).await);
        }

        let body: SignUpBody = response
            .json()
            .await
            .map_err(|e| AuthError::Api(e.to_string()))?;

        let signup = match body {
            SignUpBody::Issued(wire) => {
                let user = wire.user.into_auth_user();
                let session = Session {
                    access_token: wire.access_token,
                    user_id: user.id,
                    email: user.email.clone(),
                };
                SignUp {
                    user,
                    session: Some(session),
                }
            }
            SignUpBody::Pending(wire) => SignUp {
                user: wire.into_auth_user(),
                session: None,
            },
        };

        tracing::info!(
            user_id = %signup.user.id,
            pending = signup.confirmation_pending(),
            "Sign-up accepted"
        );
        Ok(signup)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = PasswordGrantRequest { email, password };

        let response = self
            .client
            .post(format!("{}?grant_type=password", self.endpoint("token")))
            .header("apikey", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fault_from(response).await);
        }

        let wire: WireSession = response
            .json()
            .await
            .map_err(|e| AuthError::Api(e.to_string()))?;

        let user = wire.user.into_auth_user();
        Ok(Session {
            access_token: wire.access_token,
            user_id: user.id,
            email: user.email,
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::fault_from(response).await);
        }
        Ok(())
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let response = self
            .client
            .get(self.endpoint("user"))
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.status() == 401 {
            return Err(AuthError::InvalidCredentials);
        }

        if !response.status().is_success() {
            return Err(Self::fault_from(response).await);
        }

        let wire: WireUser = response
            .json()
            .await
            .map_err(|e| AuthError::Api(e.to_string()))?;
        Ok(wire.into_auth_user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use zerohunger_domain::UserRole;

    fn gateway(server: &MockServer) -> HttpAuthGateway {
        HttpAuthGateway::new(server.uri(), SecretString::new("anon-key".into()))
    }

    fn new_account() -> NewAccount {
        NewAccount {
            email: "amina@example.com".to_string(),
            password: "hunter22".to_string(),
            metadata: ProfileMetadata {
                full_name: "Amina Otieno".to_string(),
                user_role: UserRole::Donor,
                organization_name: None,
                phone: None,
                address: Some("Nairobi".to_string()),
            },
        }
    }

    #[tokio::test]
    async fn sign_in_returns_a_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .and(query_param("grant_type", "password"))
            .and(header("apikey", "anon-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt-token",
                "token_type": "bearer",
                "user": {
                    "id": "4f9f2f38-3f53-4f0b-9f50-1f4d6c1e3a11",
                    "email": "amina@example.com",
                    "email_confirmed_at": "2025-01-15T12:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let session = gateway(&server)
            .sign_in("amina@example.com", "hunter22")
            .await
            .unwrap();

        assert_eq!(session.access_token, "jwt-token");
        assert_eq!(session.email, "amina@example.com");
    }

    #[tokio::test]
    async fn sign_in_maps_invalid_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "invalid_grant",
                "error_description": "Invalid login credentials"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .sign_in("amina@example.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn sign_in_maps_unconfirmed_email() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error_description": "Email not confirmed"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .sign_in("amina@example.com", "hunter22")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::EmailNotConfirmed));
    }

    #[tokio::test]
    async fn sign_in_maps_rate_limiting() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/token"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = gateway(&server)
            .sign_in("amina@example.com", "hunter22")
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::RateLimited));
    }

    #[tokio::test]
    async fn sign_up_without_confirmation_reports_pending() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "4f9f2f38-3f53-4f0b-9f50-1f4d6c1e3a11",
                "email": "amina@example.com",
                "confirmed_at": null
            })))
            .mount(&server)
            .await;

        let signup = gateway(&server).sign_up(&new_account()).await.unwrap();

        assert!(signup.confirmation_pending());
        assert!(signup.session.is_none());
    }

    #[tokio::test]
    async fn sign_up_with_auto_confirmation_issues_a_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt-token",
                "user": {
                    "id": "4f9f2f38-3f53-4f0b-9f50-1f4d6c1e3a11",
                    "email": "amina@example.com",
                    "email_confirmed_at": "2025-01-15T12:00:00Z"
                }
            })))
            .mount(&server)
            .await;

        let signup = gateway(&server).sign_up(&new_account()).await.unwrap();

        assert!(!signup.confirmation_pending());
        assert_eq!(
            signup.session.expect("session issued").access_token,
            "jwt-token"
        );
    }

    #[tokio::test]
    async fn sign_up_maps_duplicate_registration() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "msg": "User already registered"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).sign_up(&new_account()).await.unwrap_err();
        assert!(matches!(err, AuthError::AlreadyRegistered));
    }

    #[tokio::test]
    async fn sign_up_maps_weak_password() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/v1/signup"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "msg": "Password should be at least 6 characters"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).sign_up(&new_account()).await.unwrap_err();
        assert!(matches!(err, AuthError::WeakPassword));
    }

    #[tokio::test]
    async fn current_user_maps_expired_token() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/auth/v1/user"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = gateway(&server).current_user("stale").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
