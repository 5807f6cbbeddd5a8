//! Listing Engine
//!
//! From backend records to a rendered, filterable card list.

mod dispatch;
mod enrich;
mod loader;
mod plan;
mod render;
mod view_model;

#[cfg(test)]
mod mock;

pub use dispatch::{dispatch, Action, ActionOutcome};
pub use enrich::enrich_orders;
pub use loader::{FilterCounts, ListingLoader, ListingSnapshot, LoadGenerations, LoadToken};
pub use plan::{plan, Filter, QueryPlan};
pub use render::{render, status_presentation, ActionButton, FoodCard, ListingView, StatusPresentation};
pub use view_model::{from_food, from_order, UnifiedListItem, NOT_SPECIFIED, NO_TITLE, NO_VALUE};
