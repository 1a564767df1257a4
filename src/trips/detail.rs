//! Detail slot for the selected trip
//!
//! One slot, one trip. Every activation issues a request stamped with a
//! sequence number; completions may arrive in any order. Whether an older
//! completion may overwrite a newer one is decided by [`StalePolicy`].

use super::models::{TripDetail, TripId};

/// What to do with a response that is not for the latest request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Only the latest issued request may fill the slot
    #[default]
    Discard,
    /// Whichever response arrives last fills the slot
    Accept,
}

impl StalePolicy {
    /// Parse policy string from config
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "accept" => Self::Accept,
            _ => Self::Discard,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::Accept => "accept",
        }
    }
}

/// A detail request handed to the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailRequest {
    pub seq: u64,
    pub id: TripId,
}

/// Outcome of feeding a completion into the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The slot now holds the response
    Applied,
    /// A newer request exists; response dropped
    Stale,
    /// The request failed; slot untouched
    Failed,
}

#[derive(Debug, Default)]
pub struct DetailLoader {
    policy: StalePolicy,
    next_seq: u64,
    latest: Option<DetailRequest>,
    in_flight: usize,
    detail: Option<TripDetail>,
}

impl DetailLoader {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Start loading a trip; the caller performs the fetch
    pub fn begin(&mut self, id: TripId) -> DetailRequest {
        self.next_seq += 1;
        let request = DetailRequest {
            seq: self.next_seq,
            id,
        };
        self.latest = Some(request);
        self.in_flight += 1;
        request
    }

    /// Feed a finished fetch back in
    pub fn complete<E>(&mut self, seq: u64, result: Result<TripDetail, E>) -> Completion {
        self.in_flight = self.in_flight.saturating_sub(1);

        let is_latest = self.latest.map(|r| r.seq) == Some(seq);
        if !is_latest && self.policy == StalePolicy::Discard {
            return Completion::Stale;
        }

        let detail = match result {
            Ok(detail) => detail,
            Err(_) => return Completion::Failed,
        };

        self.detail = Some(detail);
        Completion::Applied
    }

    /// Detail currently shown, possibly for an earlier selection
    pub fn detail(&self) -> Option<&TripDetail> {
        self.detail.as_ref()
    }

    /// Trip id of the most recent activation
    pub fn selected_id(&self) -> Option<TripId> {
        self.latest.map(|r| r.id)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }
}
