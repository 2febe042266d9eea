//! The find-food listing board
//!
//! The board collects a location, a food type and a search radius, but a
//! search trigger does not narrow the displayed collection: the full fixed
//! catalog is always shown. That is the shipped behavior of the filter
//! surface and tests pin it; applying the filter would be a new feature.

use crate::model::{listing_catalog, FoodListing, FoodType, ListingFilter};

/// View state for the find-food page: the filter inputs plus the catalog.
#[derive(Debug, Clone)]
pub struct ListingBoard {
    filter: ListingFilter,
    catalog: Vec<FoodListing>,
}

impl ListingBoard {
    /// A board over the fixed listing catalog.
    pub fn new() -> Self {
        Self::with_catalog(listing_catalog())
    }

    pub fn with_catalog(catalog: Vec<FoodListing>) -> Self {
        Self {
            filter: ListingFilter::default(),
            catalog,
        }
    }

    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.filter.location = location.into();
    }

    pub fn set_food_type(&mut self, food_type: Option<FoodType>) {
        self.filter.food_type = food_type;
    }

    pub fn set_radius_km(&mut self, radius_km: u32) {
        self.filter.radius_km = radius_km;
    }

    /// Trigger a search. The collected filter is recorded but not applied;
    /// the result is the full catalog in its original order.
    pub fn search(&self) -> &[FoodListing] {
        tracing::debug!(
            location = %self.filter.location,
            food_type = ?self.filter.food_type,
            radius_km = self.filter.radius_km,
            "Listing search triggered"
        );
        &self.catalog
    }

    /// Number of listings currently marked available.
    pub fn available_count(&self) -> usize {
        self.catalog.iter().filter(|l| l.available).count()
    }
}

impl Default for ListingBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_returns_the_full_catalog() {
        let board = ListingBoard::new();
        assert_eq!(board.search().len(), 4);
    }

    #[test]
    fn filter_values_do_not_narrow_results() {
        let mut board = ListingBoard::new();
        let unfiltered: Vec<u32> = board.search().iter().map(|l| l.id).collect();

        board.set_location("Downtown");
        board.set_food_type(Some(FoodType::Dairy));
        board.set_radius_km(1);

        let filtered: Vec<u32> = board.search().iter().map(|l| l.id).collect();
        assert_eq!(unfiltered, filtered);
    }

    #[test]
    fn filter_state_is_still_collected() {
        let mut board = ListingBoard::new();
        board.set_location("City Center");
        board.set_food_type(Some(FoodType::PreparedMeals));
        board.set_radius_km(10);

        assert_eq!(board.filter().location, "City Center");
        assert_eq!(board.filter().food_type, Some(FoodType::PreparedMeals));
        assert_eq!(board.filter().radius_km, 10);
    }

    #[test]
    fn default_radius_is_five_km() {
        let board = ListingBoard::new();
        assert_eq!(board.filter().radius_km, 5);
    }

    #[test]
    fn available_count_tracks_the_catalog() {
        let board = ListingBoard::new();
        assert_eq!(board.available_count(), 4);
    }
}
