//! Subscription banner state

use uuid::Uuid;

use crate::{
    model::BannerState,
    ports::{Clock, RecordError, RecordStore},
};

/// Use case for resolving the dashboard subscription banner.
pub struct SubscriptionUseCase<R, C> {
    records: R,
    clock: C,
}

impl<R: RecordStore, C: Clock> SubscriptionUseCase<R, C> {
    pub fn new(records: R, clock: C) -> Self {
        Self { records, clock }
    }

    /// Fetch the user's subscription record (absence is not an error) and
    /// evaluate what the banner should show right now.
    pub async fn banner(&self, user_id: Uuid) -> Result<BannerState, RecordError> {
        let subscription = self.records.fetch_subscription(user_id).await?;
        let state = BannerState::evaluate(subscription.as_ref(), self.clock.now());

        tracing::debug!(user_id = %user_id, state = ?state, "Evaluated subscription banner");
        Ok(state)
    }
}
