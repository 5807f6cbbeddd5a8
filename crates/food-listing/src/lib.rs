//! Takaful Food Listing Engine
//!
//! Layered architecture:
//! - domain: backend records, statuses, roles and date normalization
//! - api: the marketplace REST seam and its reqwest implementation
//! - listing: enrichment join, view model, query planning, loading,
//!   rendering and action dispatch

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod listing;

pub use api::{HttpApi, MarketplaceApi, ReservationRequest};
pub use config::ListingConfig;
pub use domain::{Role, Session, UiStatus};
pub use error::{ActionError, ApiError, ApiResult};
pub use listing::{
    dispatch, render, Action, ActionButton, ActionOutcome, FilterCounts, Filter, FoodCard,
    ListingLoader, ListingSnapshot, ListingView, LoadGenerations, UnifiedListItem,
};
