//! Profile reading, editing and avatar upload

use crate::{
    avatar_object_path,
    model::{AuthUser, Profile, ProfileUpdate, Session},
    ports::{AuthError, AuthGateway, BlobError, BlobStore, Clock, RecordError, RecordStore},
    validation::{validate_avatar_size, ValidationError},
};

/// Error type for the profile flows.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Blob(#[from] BlobError),
}

/// Use case for viewing and editing the signed-in user's profile.
pub struct ProfileUseCase<A, R, B, C> {
    gateway: A,
    records: R,
    blobs: B,
    clock: C,
}

impl<A, R, B, C> ProfileUseCase<A, R, B, C>
where
    A: AuthGateway,
    R: RecordStore,
    B: BlobStore,
    C: Clock,
{
    pub fn new(gateway: A, records: R, blobs: B, clock: C) -> Self {
        Self {
            gateway,
            records,
            blobs,
            clock,
        }
    }

    /// Resolve the session's user and their stored profile. A user without
    /// a profile record is valid (they registered but never edited it).
    pub async fn current(
        &self,
        session: &Session,
    ) -> Result<(AuthUser, Option<Profile>), ProfileError> {
        let user = self.gateway.current_user(&session.access_token).await?;
        let profile = self.records.fetch_profile(user.id).await?;
        Ok((user, profile))
    }

    /// Apply edits on top of the stored profile (or a fresh one) and upsert
    /// the result by user id.
    pub async fn update(
        &self,
        session: &Session,
        update: ProfileUpdate,
    ) -> Result<Profile, ProfileError> {
        let mut profile = match self.records.fetch_profile(session.user_id).await? {
            Some(existing) => existing,
            None => Profile::new(
                session.user_id,
                update.full_name.clone().unwrap_or_default(),
                update.user_role.unwrap_or_default(),
                self.clock.now(),
            ),
        };

        if let Some(full_name) = update.full_name {
            profile.full_name = full_name;
        }
        if let Some(phone) = update.phone {
            profile.phone = Some(phone);
        }
        if let Some(address) = update.address {
            profile.address = Some(address);
        }
        if let Some(city) = update.city {
            profile.city = city;
        }
        if let Some(country) = update.country {
            profile.country = country;
        }
        if let Some(organization_name) = update.organization_name {
            profile.organization_name = Some(organization_name);
        }
        if let Some(user_role) = update.user_role {
            profile.user_role = user_role;
        }

        if profile.full_name.trim().is_empty() {
            return Err(ValidationError::MissingField("full name").into());
        }

        profile.updated_at = self.clock.now();
        let stored = self.records.upsert_profile(&profile).await?;

        tracing::info!(user_id = %stored.user_id, "Updated profile");
        Ok(stored)
    }

    /// Upload an avatar image and record its public URL on the profile.
    /// The 5 MiB cap is enforced before any upload is attempted.
    pub async fn set_avatar(
        &self,
        session: &Session,
        bytes: Vec<u8>,
        extension: &str,
    ) -> Result<String, ProfileError> {
        validate_avatar_size(&bytes)?;

        let path = avatar_object_path(session.user_id, &bytes, extension);
        let content_type = image_content_type(extension);

        self.blobs.upload(&path, bytes, content_type).await?;
        let url = self.blobs.public_url(&path);

        let mut profile = match self.records.fetch_profile(session.user_id).await? {
            Some(existing) => existing,
            None => Profile::new(
                session.user_id,
                session.email.clone(),
                Default::default(),
                self.clock.now(),
            ),
        };
        profile.avatar_url = Some(url.clone());
        profile.updated_at = self.clock.now();
        self.records.upsert_profile(&profile).await?;

        tracing::info!(user_id = %session.user_id, path = %path, "Uploaded avatar");
        Ok(url)
    }
}

fn image_content_type(extension: &str) -> &'static str {
    match extension.to_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DonationRecord, Subscription, UserRole};
    use crate::validation::MAX_AVATAR_BYTES;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use time::macros::datetime;
    use time::OffsetDateTime;
    use uuid::Uuid;

    struct FakeGateway;

    #[async_trait]
    impl AuthGateway for FakeGateway {
        async fn sign_up(
            &self,
            _account: &crate::model::NewAccount,
        ) -> Result<crate::model::SignUp, AuthError> {
            unimplemented!("not used")
        }

        async fn sign_in(&self, _email: &str, _password: &str) -> Result<Session, AuthError> {
            unimplemented!("not used")
        }

        async fn sign_out(&self, _access_token: &str) -> Result<(), AuthError> {
            Ok(())
        }

        async fn current_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
            if access_token == "good" {
                Ok(AuthUser {
                    id: Uuid::nil(),
                    email: "amina@example.com".to_string(),
                    confirmed_at: Some(OffsetDateTime::now_utc()),
                })
            } else {
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    #[derive(Default)]
    struct FakeRecords {
        profiles: Mutex<HashMap<Uuid, Profile>>,
    }

    #[async_trait]
    impl RecordStore for FakeRecords {
        async fn upsert_profile(&self, profile: &Profile) -> Result<Profile, RecordError> {
            self.profiles
                .lock()
                .unwrap()
                .insert(profile.user_id, profile.clone());
            Ok(profile.clone())
        }

        async fn fetch_profile(&self, user_id: Uuid) -> Result<Option<Profile>, RecordError> {
            Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
        }

        async fn fetch_subscription(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<Subscription>, RecordError> {
            Ok(None)
        }

        async fn insert_donation(&self, _donation: &DonationRecord) -> Result<(), RecordError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeBlobs {
        uploads: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BlobStore for FakeBlobs {
        async fn upload(
            &self,
            path: &str,
            _bytes: Vec<u8>,
            _content_type: &str,
        ) -> Result<(), BlobError> {
            self.uploads.lock().unwrap().push(path.to_string());
            Ok(())
        }

        fn public_url(&self, path: &str) -> String {
            format!("https://blobs.example/public/{}", path)
        }
    }

    struct FixedClock(OffsetDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> OffsetDateTime {
            self.0
        }
    }

    fn session() -> Session {
        Session {
            access_token: "good".to_string(),
            user_id: Uuid::nil(),
            email: "amina@example.com".to_string(),
        }
    }

    fn usecase<'a>(
        records: &'a FakeRecords,
        blobs: &'a FakeBlobs,
    ) -> ProfileUseCase<FakeGateway, &'a FakeRecords, &'a FakeBlobs, FixedClock> {
        ProfileUseCase::new(
            FakeGateway,
            records,
            blobs,
            FixedClock(datetime!(2025-06-01 12:00 UTC)),
        )
    }

    #[tokio::test]
    async fn update_creates_a_profile_when_none_exists() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        let update = ProfileUpdate {
            full_name: Some("Amina Otieno".to_string()),
            user_role: Some(UserRole::Donor),
            ..Default::default()
        };

        let profile = usecase.update(&session(), update).await.unwrap();
        assert_eq!(profile.full_name, "Amina Otieno");
        assert_eq!(profile.user_role, UserRole::Donor);
        assert_eq!(profile.city, "Nairobi");
    }

    #[tokio::test]
    async fn update_keeps_unedited_fields() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        usecase
            .update(
                &session(),
                ProfileUpdate {
                    full_name: Some("Amina Otieno".to_string()),
                    phone: Some("555-0100".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let profile = usecase
            .update(
                &session(),
                ProfileUpdate {
                    city: Some("Mombasa".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(profile.full_name, "Amina Otieno");
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert_eq!(profile.city, "Mombasa");
    }

    #[tokio::test]
    async fn update_requires_a_full_name() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        let err = usecase
            .update(&session(), ProfileUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProfileError::Validation(_)));
    }

    #[tokio::test]
    async fn set_avatar_uploads_and_records_the_url() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        let url = usecase
            .set_avatar(&session(), b"image-bytes".to_vec(), "png")
            .await
            .unwrap();

        assert!(url.starts_with("https://blobs.example/public/avatars/"));
        assert_eq!(blobs.uploads.lock().unwrap().len(), 1);

        let profile = records
            .fetch_profile(Uuid::nil())
            .await
            .unwrap()
            .expect("profile stored");
        assert_eq!(profile.avatar_url.as_deref(), Some(url.as_str()));
    }

    #[tokio::test]
    async fn oversized_avatar_is_rejected_before_upload() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        let err = usecase
            .set_avatar(&session(), vec![0u8; MAX_AVATAR_BYTES + 1], "png")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ProfileError::Validation(ValidationError::AvatarTooLarge)
        ));
        assert!(blobs.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn current_resolves_user_and_profile() {
        let records = FakeRecords::default();
        let blobs = FakeBlobs::default();
        let usecase = usecase(&records, &blobs);

        let (user, profile) = usecase.current(&session()).await.unwrap();
        assert_eq!(user.email, "amina@example.com");
        assert!(profile.is_none());
    }
}
