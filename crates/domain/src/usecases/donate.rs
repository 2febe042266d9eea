//! Donation submission

use uuid::Uuid;

use crate::{
    model::{DonationDraft, DonationRecord},
    ports::{Clock, RecordError, RecordStore},
    validation::{validate_donation, ValidationError},
};

/// Error type for donation submission.
#[derive(Debug, thiserror::Error)]
pub enum DonateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Use case for posting a food donation listing.
pub struct DonateUseCase<R, C> {
    records: R,
    clock: C,
}

impl<R: RecordStore, C: Clock> DonateUseCase<R, C> {
    pub fn new(records: R, clock: C) -> Self {
        Self { records, clock }
    }

    /// Validate the draft, stamp it and forward it to the collaborator.
    pub async fn submit(
        &self,
        donor_id: Uuid,
        draft: DonationDraft,
    ) -> Result<DonationRecord, DonateError> {
        validate_donation(&draft)?;

        let record = DonationRecord {
            id: Uuid::new_v4(),
            donor_id,
            draft,
            created_at: self.clock.now(),
        };

        self.records.insert_donation(&record).await?;

        tracing::info!(
            donation_id = %record.id,
            food_type = %record.draft.food_type,
            "Posted food donation"
        );

        Ok(record)
    }
}
