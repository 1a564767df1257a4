//! Category filter over the loaded trip list
//!
//! Holds the full collection and the view derived from it. The view is
//! rebuilt from scratch on every change; it is never patched in place.

use super::models::{CategoryFilter, Trip};

/// Filter a trip collection by category, preserving order
pub fn filter_trips(trips: &[Trip], category: CategoryFilter) -> Vec<Trip> {
    trips
        .iter()
        .filter(|trip| category.matches(trip))
        .cloned()
        .collect()
}

/// Full trip collection plus the currently selected category and its view
#[derive(Debug, Clone, Default)]
pub struct TripFilter {
    all_trips: Vec<Trip>,
    selected: CategoryFilter,
    visible: Vec<Trip>,
}

impl TripFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the full collection (initial load)
    pub fn set_trips(&mut self, trips: Vec<Trip>) {
        self.all_trips = trips;
        self.recompute();
    }

    /// Select a category and rebuild the view
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.selected = category;
        self.recompute();
    }

    pub fn select_next_category(&mut self) {
        self.select_category(self.selected.next());
    }

    pub fn select_previous_category(&mut self) {
        self.select_category(self.selected.prev());
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected
    }

    /// Trips matching the selected category, in load order
    pub fn visible(&self) -> &[Trip] {
        &self.visible
    }

    pub fn all(&self) -> &[Trip] {
        &self.all_trips
    }

    fn recompute(&mut self) {
        self.visible = filter_trips(&self.all_trips, self.selected);
    }
}
