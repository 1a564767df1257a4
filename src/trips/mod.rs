// Trips domain: wire models, category filter, detail slot and text rendering

pub mod detail;
pub mod display;
pub mod filter;
pub mod models;

pub use detail::{Completion, DetailLoader, DetailRequest, StalePolicy};
pub use display::DisplayOptions;
pub use filter::{filter_trips, TripFilter};
pub use models::{BuyingOption, CategoryFilter, Guide, PackingItem, Trip, TripDetail, TripId};
