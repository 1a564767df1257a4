// Application state record
//
// Single owner, single writer. The runtime feeds `Message`s in and executes
// the returned `Effect`s; `update` itself never touches the network.

use crate::api::ApiError;
use crate::trips::{
    CategoryFilter, Completion, DetailLoader, DetailRequest, StalePolicy, Trip, TripDetail,
    TripFilter, TripId,
};

/// Inputs to the state record
#[derive(Debug)]
pub enum Message {
    /// Initial trip list arrived (or failed)
    TripsLoaded(Result<Vec<Trip>, ApiError>),
    /// A detail request finished
    DetailLoaded {
        seq: u64,
        result: Result<TripDetail, ApiError>,
    },
    SelectCategory(CategoryFilter),
    NextCategory,
    PrevCategory,
    /// User activated a trip in the list
    ActivateTrip(TripId),
}

/// Side effects requested by [`AppState::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadTrips,
    LoadDetail(DetailRequest),
}

/// Lifecycle of the initial trip list load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Default)]
pub struct AppState {
    filter: TripFilter,
    loader: DetailLoader,
    list_status: ListStatus,
}

impl AppState {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            filter: TripFilter::new(),
            loader: DetailLoader::new(policy),
            list_status: ListStatus::Idle,
        }
    }

    /// Kick off the initial trip list load
    pub fn start(&mut self) -> Vec<Effect> {
        self.list_status = ListStatus::Loading;
        vec![Effect::LoadTrips]
    }

    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::TripsLoaded(Ok(trips)) => {
                tracing::info!("Loaded {} trips", trips.len());
                self.filter.set_trips(trips);
                self.list_status = ListStatus::Loaded;
                Vec::new()
            }
            Message::TripsLoaded(Err(e)) => {
                tracing::error!(kind = e.kind(), "Failed to load trips: {}", e);
                self.list_status = ListStatus::Failed;
                Vec::new()
            }
            Message::DetailLoaded { seq, result } => {
                let failure = result.as_ref().err().map(|e| (e.kind(), e.to_string()));
                match self.loader.complete(seq, result) {
                    Completion::Applied => {
                        if let Some(detail) = self.loader.detail() {
                            tracing::debug!("Showing details for trip {}", detail.trip.id);
                        }
                    }
                    Completion::Stale => match failure {
                        Some((kind, msg)) => {
                            tracing::debug!(
                                kind,
                                "Discarded stale detail failure (seq {}): {}",
                                seq,
                                msg
                            );
                        }
                        None => {
                            tracing::debug!("Discarded stale detail response (seq {})", seq);
                        }
                    },
                    Completion::Failed => {
                        if let Some((kind, msg)) = failure {
                            tracing::error!(kind, "Failed to load trip details: {}", msg);
                        }
                    }
                }
                Vec::new()
            }
            Message::SelectCategory(category) => {
                self.filter.select_category(category);
                self.log_category();
                Vec::new()
            }
            Message::NextCategory => {
                self.filter.select_next_category();
                self.log_category();
                Vec::new()
            }
            Message::PrevCategory => {
                self.filter.select_previous_category();
                self.log_category();
                Vec::new()
            }
            Message::ActivateTrip(id) => {
                let request = self.loader.begin(id);
                tracing::debug!("Loading trip {} (seq {})", id, request.seq);
                vec![Effect::LoadDetail(request)]
            }
        }
    }

    fn log_category(&self) {
        tracing::debug!(
            "Category {} → {} of {} trips",
            self.filter.selected_category(),
            self.filter.visible().len(),
            self.filter.all().len()
        );
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read access for views
    // ─────────────────────────────────────────────────────────────────────

    pub fn visible_trips(&self) -> &[Trip] {
        self.filter.visible()
    }

    pub fn total_trips(&self) -> usize {
        self.filter.all().len()
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.filter.selected_category()
    }

    pub fn detail(&self) -> Option<&TripDetail> {
        self.loader.detail()
    }

    pub fn selected_trip_id(&self) -> Option<TripId> {
        self.loader.selected_id()
    }

    pub fn detail_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn list_status(&self) -> ListStatus {
        self.list_status
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.loader.policy()
    }
}
