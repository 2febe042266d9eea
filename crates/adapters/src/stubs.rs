//! In-memory and stub implementations of the ports
//!
//! Used by tests and by commands that have to work without a configured
//! collaborator.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;
use zerohunger_domain::{
    AuthError, AuthGateway, AuthUser, BlobError, BlobStore, DonationRecord, NewAccount, Profile,
    RecordError, RecordStore, Session, SessionError, SessionStore, SignUp, Subscription,
};

/// Auth gateway that accepts any credentials and issues a fixed token.
pub struct StubAuthGateway {
    user_id: Uuid,
}

impl StubAuthGateway {
    pub fn new() -> Self {
        Self {
            user_id: Uuid::new_v4(),
        }
    }

    pub fn with_user_id(user_id: Uuid) -> Self {
        Self { user_id }
    }

    fn session_for(&self, email: &str) -> Session {
        Session {
            access_token: "stub-token".to_string(),
            user_id: self.user_id,
            email: email.to_string(),
        }
    }
}

impl Default for StubAuthGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthGateway for StubAuthGateway {
    async fn sign_up(&self, account: &NewAccount) -> Result<SignUp, AuthError> {
        let user = AuthUser {
            id: self.user_id,
            email: account.email.clone(),
            confirmed_at: Some(OffsetDateTime::now_utc()),
        };
        Ok(SignUp {
            session: Some(self.session_for(&user.email)),
            user,
        })
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Session, AuthError> {
        Ok(self.session_for(email))
    }

    async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
        Ok(())
    }

    async fn current_user(&self, _access_token: &str) -> Result<AuthUser, AuthError> {
        Ok(AuthUser {
            id: self.user_id,
            email: "stub@example.com".to_string(),
            confirmed_at: Some(OffsetDateTime::now_utc()),
        })
    }
}

/// In-memory record store.
#[derive(Default)]
pub struct InMemoryRecordStore {
    profiles: RwLock<HashMap<Uuid, Profile>>,
    subscriptions: RwLock<HashMap<Uuid, Subscription>>,
    donations: RwLock<Vec<DonationRecord>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a subscription record for a user.
    pub fn with_subscription(self, subscription: Subscription) -> Self {
        self.subscriptions
            .write()
            .expect("lock poisoned")
            .insert(subscription.user_id, subscription.clone());
        self
    }

    /// Donations stored so far, in insertion order.
    pub fn donations(&self) -> Vec<DonationRecord> {
        self.donations.read().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RecordError> {
        self.profiles
            .write()
            .map_err(|e| RecordError::Api(e.to_string()))?
            .insert(profile.user_id, profile.clone());
        Ok(profile.clone())
    }

    async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, RecordError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| RecordError::Api(e.to_string()))?;
        Ok(profiles.get(&user_id).cloned())
    }

    async fn fetch_subscription(
        &self,
        user_id: Uuid,
    ) -> Result<Option<Subscription>, RecordError> {
        let subscriptions = self
            .subscriptions
            .read()
            .map_err(|e| RecordError::Api(e.to_string()))?;
        Ok(subscriptions.get(&user_id).cloned())
    }

    async fn insert_donation(&self, donation: &DonationRecord) -> Result<(), RecordError> {
        self.donations
            .write()
            .map_err(|e| RecordError::Api(e.to_string()))?
            .push(donation.clone());
        Ok(())
    }
}

/// In-memory blob store keyed by object path.
#[derive(Default)]
pub struct InMemoryBlobStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.objects
            .read()
            .expect("lock poisoned")
            .contains_key(path)
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), BlobError> {
        self.objects
            .write()
            .map_err(|e| BlobError::Api(e.to_string()))?
            .insert(path.to_string(), bytes);
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://objects/{}", path)
    }
}

/// In-memory session cache.
#[derive(Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<Session>, SessionError> {
        Ok(self
            .session
            .read()
            .map_err(|e| SessionError::Serialization(e.to_string()))?
            .clone())
    }

    async fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self
            .session
            .write()
            .map_err(|e| SessionError::Serialization(e.to_string()))? = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        *self
            .session
            .write()
            .map_err(|e| SessionError::Serialization(e.to_string()))? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use zerohunger_domain::{PlanKind, SubscriptionStatus, UserRole};

    #[tokio::test]
    async fn profile_roundtrip() {
        let store = InMemoryRecordStore::new();
        let profile = Profile::new(
            Uuid::nil(),
            "Amina Otieno".to_string(),
            UserRole::Donor,
            datetime!(2025-06-01 12:00 UTC),
        );

        store.upsert_profile(&profile).await.unwrap();
        let fetched = store.fetch_profile(Uuid::nil()).await.unwrap();

        assert_eq!(fetched.unwrap().full_name, "Amina Otieno");
    }

    #[tokio::test]
    async fn fetch_nonexistent_profile_is_none() {
        let store = InMemoryRecordStore::new();
        assert!(store.fetch_profile(Uuid::nil()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seeded_subscription_is_returned() {
        let store = InMemoryRecordStore::new().with_subscription(Subscription {
            user_id: Uuid::nil(),
            status: SubscriptionStatus::Active,
            plan_type: PlanKind::Premium,
            trial_ends_at: None,
        });

        let subscription = store.fetch_subscription(Uuid::nil()).await.unwrap();
        assert_eq!(subscription.unwrap().plan_type, PlanKind::Premium);
    }

    #[tokio::test]
    async fn stub_gateway_signs_in_anyone() {
        let gateway = StubAuthGateway::new();
        let session = gateway.sign_in("anyone@example.com", "whatever").await.unwrap();
        assert_eq!(session.access_token, "stub-token");
    }

    #[tokio::test]
    async fn blob_store_remembers_uploads() {
        let store = InMemoryBlobStore::new();
        store
            .upload("avatars/a.png", b"png".to_vec(), "image/png")
            .await
            .unwrap();

        assert!(store.contains("avatars/a.png"));
        assert_eq!(store.public_url("avatars/a.png"), "memory://objects/avatars/a.png");
    }
}
